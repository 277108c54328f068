pub const DEFAULT_PROJECT_NAME: &str = "Knitting Counter";

/// Display name of the project. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    name: String,
}

impl Default for ProjectIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

impl ProjectIdentity {
    pub fn from_persisted(raw: Option<&str>) -> Self {
        let mut project = Self::default();
        if let Some(name) = raw {
            project.rename(name);
        }
        project
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed rename; blank input reverts to the default name.
    pub fn rename(&mut self, new_name: &str) -> &str {
        let trimmed = new_name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_PROJECT_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_trims_and_defaults() {
        let mut project = ProjectIdentity::default();
        assert_eq!(project.rename("  Aran sweater "), "Aran sweater");
        assert_eq!(project.rename("\t \n"), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn load_falls_back_to_default() {
        assert_eq!(ProjectIdentity::from_persisted(None).name(), DEFAULT_PROJECT_NAME);
        assert_eq!(ProjectIdentity::from_persisted(Some("")).name(), DEFAULT_PROJECT_NAME);
        assert_eq!(ProjectIdentity::from_persisted(Some("Socks")).name(), "Socks");
    }
}

use crate::cli::commands::session;
use crate::cli::parser::{Commands, NameAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Name { action } = cmd {
        let mut app = session::open(cfg);

        match action {
            NameAction::Show => app.render_project_name(),
            NameAction::Set { name } => {
                app.rename_project(name);
                let final_name = app.project().name().to_string();
                success(format!("Project renamed to '{}'.", final_name));
                session::audit(&app, "name", "", &format!("Project renamed to '{}'", final_name));
            }
        }
    }

    Ok(())
}

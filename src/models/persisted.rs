//! Decoding of the stored `rows` value.
//!
//! Two shapes exist in the wild: the legacy one, a bare JSON array of counts,
//! and the structured one, an array of `{name, count}` objects. The first
//! element decides which shape the whole array is read as. Elements are then
//! decoded one by one, so a single damaged entry never costs the others.

use crate::models::row::{Row, clamp_stored_count, default_row_name};
use crate::utils::parse::parse_int_lenient;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum PersistedRows {
    /// `[0, 3, 5]`
    Legacy(Vec<u64>),
    /// `[{"name": "Row 1", "count": 0}, ...]`
    Structured(Vec<Row>),
}

/// Count of one stored entry. Numbers are clamped, numeric strings are read
/// leniently, anything else (null, bool, objects) counts as 0.
fn stored_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_f64().map_or(0, clamp_stored_count),
        Value::String(s) => u64::try_from(parse_int_lenient(s)).unwrap_or(0),
        _ => 0,
    }
}

fn stored_row(value: &Value) -> Row {
    match value {
        Value::Object(fields) => Row {
            name: fields
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            count: fields.get("count").map_or(0, stored_count),
        },
        other => Row {
            name: String::new(),
            count: stored_count(other),
        },
    }
}

impl PersistedRows {
    /// Decode a stored value. `None` when nothing usable is stored: missing,
    /// blank, not JSON, not an array, or an empty array.
    pub fn decode(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) else {
            return None;
        };

        match items.first()? {
            Value::Number(_) => Some(PersistedRows::Legacy(
                items.iter().map(stored_count).collect(),
            )),
            _ => Some(PersistedRows::Structured(
                items.iter().map(stored_row).collect(),
            )),
        }
    }

    /// Convert either shape into structured rows.
    ///
    /// Applying this to an already structured value only fills in blank names,
    /// so running it more than once never changes the result.
    pub fn normalize(self) -> Vec<Row> {
        match self {
            PersistedRows::Legacy(counts) => counts
                .into_iter()
                .enumerate()
                .map(|(i, count)| Row {
                    name: default_row_name(i + 1),
                    count,
                })
                .collect(),
            PersistedRows::Structured(rows) => rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| {
                    if row.name.trim().is_empty() {
                        Row {
                            name: default_row_name(i + 1),
                            count: row.count,
                        }
                    } else {
                        row
                    }
                })
                .collect(),
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, PersistedRows::Legacy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, count: u64) -> Row {
        Row {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn legacy_counts_get_positional_names() {
        let decoded = PersistedRows::decode(Some("[0, 3, 5]")).unwrap();
        assert!(decoded.is_legacy());
        assert_eq!(
            decoded.normalize(),
            vec![row("Row 1", 0), row("Row 2", 3), row("Row 3", 5)]
        );
    }

    #[test]
    fn structured_rows_are_kept_as_is() {
        let raw = r#"[{"name":"Ribbing","count":12},{"name":"Body","count":40}]"#;
        let decoded = PersistedRows::decode(Some(raw)).unwrap();
        assert!(!decoded.is_legacy());
        assert_eq!(
            decoded.normalize(),
            vec![row("Ribbing", 12), row("Body", 40)]
        );
    }

    #[test]
    fn migration_is_idempotent() {
        let once = PersistedRows::decode(Some("[2, -1]")).unwrap().normalize();
        let encoded = serde_json::to_string(&once).unwrap();
        let twice = PersistedRows::decode(Some(&encoded)).unwrap().normalize();
        assert_eq!(once, twice);
        assert_eq!(twice, vec![row("Row 1", 2), row("Row 2", 0)]);
    }

    #[test]
    fn garbage_and_missing_values_decode_to_none() {
        assert_eq!(PersistedRows::decode(None), None);
        assert_eq!(PersistedRows::decode(Some("")), None);
        assert_eq!(PersistedRows::decode(Some("null")), None);
        assert_eq!(PersistedRows::decode(Some("{not json")), None);
        assert_eq!(PersistedRows::decode(Some(r#"{"name":"x"}"#)), None);
        assert_eq!(PersistedRows::decode(Some("[]")), None);
    }

    #[test]
    fn damaged_entries_keep_their_neighbours() {
        let raw = r#"[{"name":"Body","count":40},{"name":"Sleeve","count":null},{"name":"Cuff","count":"12"},{"count":true}]"#;
        let rows = PersistedRows::decode(Some(raw)).unwrap().normalize();
        assert_eq!(
            rows,
            vec![row("Body", 40), row("Sleeve", 0), row("Cuff", 12), row("Row 4", 0)]
        );
    }

    #[test]
    fn first_entry_decides_the_shape() {
        let legacy = PersistedRows::decode(Some(r#"[4, {"name":"x","count":2}, "7"]"#)).unwrap();
        assert!(legacy.is_legacy());
        assert_eq!(
            legacy.normalize(),
            vec![row("Row 1", 4), row("Row 2", 0), row("Row 3", 7)]
        );

        let structured = PersistedRows::decode(Some(r#"[{"name":"Hem","count":3}, 9]"#)).unwrap();
        assert!(!structured.is_legacy());
        assert_eq!(structured.normalize(), vec![row("Hem", 3), row("Row 2", 9)]);
    }

    #[test]
    fn blank_structured_names_fall_back_to_position() {
        let raw = r#"[{"name":"Cuff","count":1},{"name":"  ","count":2}]"#;
        let rows = PersistedRows::decode(Some(raw)).unwrap().normalize();
        assert_eq!(rows, vec![row("Cuff", 1), row("Row 2", 2)]);
    }
}

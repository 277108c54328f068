use crate::errors::AppResult;
use crate::models::persisted::PersistedRows;
use crate::models::row::{Row, default_row_name};
use crate::utils::parse::parse_int_lenient;

/// Ordered list of rows. Never empty.
///
/// Indices are 0-based. Any index past the end is clamped to the last row
/// (or to the end of the list for insertions) instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<Row>,
}

impl Default for RowList {
    fn default() -> Self {
        Self {
            rows: vec![Row::numbered(1)],
        }
    }
}

impl RowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already normalized rows; an empty vector becomes the
    /// default single-row list.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        if rows.is_empty() {
            Self::default()
        } else {
            Self { rows }
        }
    }

    /// Build from the stored `rows` value, migrating the legacy shape.
    pub fn from_persisted(raw: Option<&str>) -> Self {
        match PersistedRows::decode(raw) {
            Some(persisted) => Self::from_rows(persisted.normalize()),
            None => Self::default(),
        }
    }

    /// JSON form written under the `rows` key.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.rows)?)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Whether a row can currently be removed.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.rows.len() - 1)
    }

    /// Insert a fresh row right after `after` (`None` inserts at the start).
    /// Returns the index the new row landed on.
    pub fn add(&mut self, after: Option<usize>) -> usize {
        let len = self.rows.len();
        let at = after.map_or(0, |i| i.saturating_add(1)).min(len);
        self.rows.insert(at, Row::numbered(len + 1));
        at
    }

    /// Remove the row at `index`. Inert when only one row is left.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() {
            return false;
        }
        let index = self.clamp_index(index);
        self.rows.remove(index);
        true
    }

    /// Rename a row; a blank name regenerates `"Row {index+1}"`.
    pub fn rename(&mut self, index: usize, new_name: &str) {
        let index = self.clamp_index(index);
        let trimmed = new_name.trim();
        self.rows[index].name = if trimmed.is_empty() {
            default_row_name(index + 1)
        } else {
            trimmed.to_string()
        };
    }

    pub fn change_count(&mut self, index: usize, delta: i64) {
        let index = self.clamp_index(index);
        let row = &mut self.rows[index];
        row.count = if delta >= 0 {
            row.count.saturating_add(delta.unsigned_abs())
        } else {
            row.count.saturating_sub(delta.unsigned_abs())
        };
    }

    pub fn set_count(&mut self, index: usize, value: i64) {
        let index = self.clamp_index(index);
        self.rows[index].count = value.max(0).unsigned_abs();
    }

    /// Set a count from raw text input; non-numeric input counts as 0.
    pub fn set_count_input(&mut self, index: usize, raw: &str) {
        self.set_count(index, parse_int_lenient(raw));
    }

    /// Splice-move: take the row out at `from`, then insert it at `to` of the
    /// shortened list. Returns false when nothing moved.
    pub fn move_row(&mut self, from: usize, to: usize) -> bool {
        let from = self.clamp_index(from);
        let to = self.clamp_index(to);
        if from == to {
            return false;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &RowList) -> Vec<&str> {
        list.rows().iter().map(|r| r.name.as_str()).collect()
    }

    fn list_of(n: usize) -> RowList {
        let mut list = RowList::new();
        for i in 1..n {
            list.add(Some(i - 1));
        }
        list
    }

    #[test]
    fn default_list_has_one_row() {
        let list = RowList::new();
        assert_eq!(list.rows(), &[Row::numbered(1)]);
        assert!(!list.can_remove());
    }

    #[test]
    fn add_after_first_row() {
        let mut list = RowList::new();
        let at = list.add(Some(0));
        assert_eq!(at, 1);
        assert_eq!(list.rows(), &[Row::numbered(1), Row::numbered(2)]);
    }

    #[test]
    fn add_at_start_and_out_of_range() {
        let mut list = list_of(2);
        assert_eq!(list.add(None), 0);
        assert_eq!(names(&list), ["Row 3", "Row 1", "Row 2"]);

        assert_eq!(list.add(Some(99)), 3);
        assert_eq!(names(&list), ["Row 3", "Row 1", "Row 2", "Row 4"]);

        assert_eq!(list.add(Some(usize::MAX)), 4);
    }

    #[test]
    fn names_are_not_renumbered() {
        let mut list = list_of(3);
        list.remove(0);
        list.add(Some(1));
        assert_eq!(names(&list), ["Row 2", "Row 3", "Row 3"]);
    }

    #[test]
    fn remove_last_row_is_a_no_op() {
        let mut list = RowList::new();
        assert!(!list.remove(0));
        assert_eq!(list, RowList::new());
    }

    #[test]
    fn length_never_drops_below_one() {
        let mut list = list_of(4);
        let script: [(bool, usize); 12] = [
            (false, 0),
            (false, 3),
            (false, 9),
            (true, 1),
            (false, 0),
            (false, 0),
            (false, 0),
            (false, 0),
            (true, 0),
            (false, 5),
            (false, 0),
            (false, 0),
        ];
        for (add, index) in script {
            if add {
                list.add(Some(index));
            } else {
                list.remove(index);
            }
            assert!(!list.is_empty());
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_out_of_range_takes_last_row() {
        let mut list = list_of(3);
        assert!(list.remove(10));
        assert_eq!(names(&list), ["Row 1", "Row 2"]);
    }

    #[test]
    fn blank_rename_regenerates_default() {
        let mut list = list_of(2);
        list.rename(1, "Sleeve");
        assert_eq!(list.get(1).unwrap().name, "Sleeve");
        list.rename(1, "   ");
        assert_eq!(list.get(1).unwrap().name, "Row 2");
    }

    #[test]
    fn rename_trims_input() {
        let mut list = RowList::new();
        list.rename(0, "  Heel flap ");
        assert_eq!(list.get(0).unwrap().name, "Heel flap");
    }

    #[test]
    fn counts_never_go_negative() {
        let mut list = RowList::new();
        list.change_count(0, 1);
        list.change_count(0, 1);
        assert_eq!(list.get(0).unwrap().count, 2);
        list.change_count(0, -5);
        assert_eq!(list.get(0).unwrap().count, 0);
        list.change_count(0, i64::MIN);
        assert_eq!(list.get(0).unwrap().count, 0);

        list.set_count(0, -3);
        assert_eq!(list.get(0).unwrap().count, 0);
        list.set_count(0, 17);
        assert_eq!(list.get(0).unwrap().count, 17);
    }

    #[test]
    fn set_count_input_is_lenient() {
        let mut list = RowList::new();
        list.set_count_input(0, "24");
        assert_eq!(list.get(0).unwrap().count, 24);
        list.set_count_input(0, "lots");
        assert_eq!(list.get(0).unwrap().count, 0);
        list.set_count_input(0, "-8");
        assert_eq!(list.get(0).unwrap().count, 0);
    }

    #[test]
    fn move_uses_splice_semantics() {
        let mut list = list_of(4);
        assert!(list.move_row(0, 2));
        assert_eq!(names(&list), ["Row 2", "Row 3", "Row 1", "Row 4"]);

        assert!(list.move_row(3, 0));
        assert_eq!(names(&list), ["Row 4", "Row 2", "Row 3", "Row 1"]);
    }

    #[test]
    fn move_there_and_back_restores_order() {
        let original = list_of(5);
        for i in 0..5 {
            for j in 0..5 {
                let mut list = original.clone();
                list.move_row(i, j);
                list.move_row(j, i);
                assert_eq!(list, original, "move({i}, {j}) then move({j}, {i})");
            }
        }
    }

    #[test]
    fn move_same_index_or_clamped_same_is_a_no_op() {
        let mut list = list_of(3);
        assert!(!list.move_row(1, 1));
        assert!(!list.move_row(2, 40));
        assert_eq!(names(&list), ["Row 1", "Row 2", "Row 3"]);

        assert!(list.move_row(40, 0));
        assert_eq!(names(&list), ["Row 3", "Row 1", "Row 2"]);
    }

    #[test]
    fn loads_legacy_and_structured_values() {
        let legacy = RowList::from_persisted(Some("[0,3,5]"));
        assert_eq!(names(&legacy), ["Row 1", "Row 2", "Row 3"]);
        assert_eq!(
            legacy.rows().iter().map(|r| r.count).collect::<Vec<_>>(),
            [0, 3, 5]
        );

        let json = legacy.to_json().unwrap();
        assert_eq!(RowList::from_persisted(Some(&json)), legacy);
    }

    #[test]
    fn empty_or_missing_value_loads_default() {
        assert_eq!(RowList::from_persisted(None), RowList::new());
        assert_eq!(RowList::from_persisted(Some("[]")), RowList::new());
        assert_eq!(RowList::from_persisted(Some("oops")), RowList::new());
    }
}

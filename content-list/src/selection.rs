//! Positional selection state for the rows currently displayed.
//!
//! One [`SelectionEntry`] exists per visible row. The entries are rebuilt
//! from scratch whenever the rows or the externally owned selection change;
//! membership is decided by [`ListRow::id`] so that refetched clones of a row
//! stay selected.

use std::collections::HashSet;

use crate::row::ListRow;

/// Selection state of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry<T> {
    /// Whether the row is checked.
    pub checked: bool,
    /// The row itself while checked, `None` otherwise.
    pub item: Option<T>,
}

impl<T> SelectionEntry<T> {
    fn unchecked() -> Self {
        Self {
            checked: false,
            item: None,
        }
    }

    fn checked(item: T) -> Self {
        Self {
            checked: true,
            item: Some(item),
        }
    }
}

impl<T> Default for SelectionEntry<T> {
    fn default() -> Self {
        Self::unchecked()
    }
}

/// Per-row checked state plus the derived "select all" flag.
#[derive(Debug, Clone)]
pub struct SelectionState<T: ListRow> {
    entries: Vec<SelectionEntry<T>>,
    select_all: bool,
}

impl<T: ListRow> Default for SelectionState<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            select_all: false,
        }
    }
}

impl<T: ListRow> SelectionState<T> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild entries for `rows`, checking every row whose id appears in
    /// `selected`.
    pub fn rebuild(&mut self, rows: &[T], selected: &[T], can_select: impl Fn(&T) -> bool) {
        let selected_ids: HashSet<String> = selected.iter().map(ListRow::id).collect();

        self.entries = rows
            .iter()
            .map(|row| {
                if selected_ids.contains(&row.id()) {
                    SelectionEntry::checked(row.clone())
                } else {
                    SelectionEntry::unchecked()
                }
            })
            .collect();

        self.recompute(rows, can_select);
        log::debug!(
            "Selection rebuilt: {} rows, {} checked",
            rows.len(),
            self.checked_count()
        );
    }

    /// Set every selectable row to `target`.
    ///
    /// Rows refused by `can_select` keep their current state.
    pub fn toggle_select_all(&mut self, rows: &[T], target: bool, can_select: impl Fn(&T) -> bool) {
        for (entry, row) in self.entries.iter_mut().zip(rows) {
            if !can_select(row) {
                continue;
            }
            *entry = if target {
                SelectionEntry::checked(row.clone())
            } else {
                SelectionEntry::unchecked()
            };
        }
        self.recompute(rows, can_select);
    }

    /// Set the entry at `index` to `checked`.
    ///
    /// Returns `false` when `index` has no row.
    pub fn toggle_one(
        &mut self,
        rows: &[T],
        index: usize,
        checked: bool,
        can_select: impl Fn(&T) -> bool,
    ) -> bool {
        let (Some(entry), Some(row)) = (self.entries.get_mut(index), rows.get(index)) else {
            return false;
        };
        *entry = if checked {
            SelectionEntry::checked(row.clone())
        } else {
            SelectionEntry::unchecked()
        };
        log::trace!("Row {} ({}) checked={}", index, row.id(), checked);
        self.recompute(rows, can_select);
        true
    }

    /// Recompute the select-all flag.
    ///
    /// True iff at least one selectable row exists and every selectable row
    /// is checked.
    pub(crate) fn recompute(&mut self, rows: &[T], can_select: impl Fn(&T) -> bool) {
        let mut selectable = 0usize;
        let mut all_checked = true;
        for (entry, row) in self.entries.iter().zip(rows) {
            if can_select(row) {
                selectable += 1;
                all_checked &= entry.checked;
            }
        }
        self.select_all = selectable > 0 && all_checked;
    }

    /// The derived select-all flag.
    pub fn select_all(&self) -> bool {
        self.select_all
    }

    /// All entries, aligned with the rows.
    pub fn entries(&self) -> &[SelectionEntry<T>] {
        &self.entries
    }

    /// Whether the row at `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.checked)
    }

    /// Number of checked rows.
    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    /// Checked items in row order.
    pub fn checked_items(&self) -> Vec<T> {
        self.entries
            .iter()
            .filter(|e| e.checked)
            .filter_map(|e| e.item.clone())
            .collect()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.select_all = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32);

    impl ListRow for Row {
        fn id(&self) -> String {
            self.0.to_string()
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (0..n).map(Row).collect()
    }

    #[test]
    fn test_entries_keep_item_only_while_checked() {
        let rows = rows(3);
        let mut state = SelectionState::new();
        state.rebuild(&rows, &[Row(1)], |_| true);

        assert_eq!(state.entries()[0], SelectionEntry::unchecked());
        assert_eq!(state.entries()[1], SelectionEntry::checked(Row(1)));

        state.toggle_one(&rows, 1, false, |_| true);
        assert_eq!(state.entries()[1].item, None);
    }

    #[test]
    fn test_toggle_one_out_of_range() {
        let rows = rows(2);
        let mut state = SelectionState::new();
        state.rebuild(&rows, &[], |_| true);
        assert!(!state.toggle_one(&rows, 5, true, |_| true));
        assert_eq!(state.checked_count(), 0);
    }

    #[test]
    fn test_select_all_ignores_unselectable_rows() {
        let rows = rows(4);
        let even = |r: &Row| r.0 % 2 == 0;
        let mut state = SelectionState::new();
        state.rebuild(&rows, &[Row(0)], even);
        assert!(!state.select_all());

        state.toggle_one(&rows, 2, true, even);
        assert!(state.select_all());
        assert_eq!(state.checked_items(), vec![Row(0), Row(2)]);
    }

    #[test]
    fn test_select_all_false_without_selectable_rows() {
        let rows = rows(2);
        let mut state = SelectionState::new();
        state.rebuild(&rows, &rows, |_| false);
        assert_eq!(state.checked_count(), 2);
        assert!(!state.select_all());
    }
}

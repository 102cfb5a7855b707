//! Showing and hiding columns.
//!
//! One algorithm drives both directions: hiding is showing with a removal
//! placement. The request pipeline is: normalize the selector, resolve each
//! entry against the chosen source list, optionally collapse duplicates,
//! remove existing occurrences while compensating the insertion point, then
//! splice the survivors back in as a group.

use super::registry::ColumnRegistry;

/// Which list a [`ColumnSelector`]'s indexes address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indexing {
    /// Indexes are display positions in the active list.
    Active,
    /// Indexes are permanent data indexes into the all-columns map.
    All,
}

/// Where shown columns are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Append after the last display slot. The default.
    #[default]
    End,
    /// Insert before the given display position (clamped to the list).
    Before(usize),
    /// Remove matching occurrences and insert nothing. This is what hiding
    /// is made of.
    RemoveOnly,
}

/// One column index or a sequence of them.
///
/// Operations accept `impl Into<ColumnSelector>`, so a bare index and a
/// single-element sequence are interchangeable at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// A single index.
    One(i32),
    /// A sequence of indexes, processed in order.
    Many(Vec<i32>),
}

impl ColumnSelector {
    fn into_vec(self) -> Vec<i32> {
        match self {
            ColumnSelector::One(index) => vec![index],
            ColumnSelector::Many(indexes) => indexes,
        }
    }
}

impl From<i32> for ColumnSelector {
    fn from(index: i32) -> Self {
        ColumnSelector::One(index)
    }
}

impl From<Vec<i32>> for ColumnSelector {
    fn from(indexes: Vec<i32>) -> Self {
        ColumnSelector::Many(indexes)
    }
}

impl From<&[i32]> for ColumnSelector {
    fn from(indexes: &[i32]) -> Self {
        ColumnSelector::Many(indexes.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for ColumnSelector {
    fn from(indexes: [i32; N]) -> Self {
        ColumnSelector::Many(indexes.to_vec())
    }
}

impl ColumnRegistry {
    /// Makes the selected columns visible at the requested placement.
    ///
    /// Selected indexes are resolved against the source list chosen by
    /// `indexing`; entries that resolve to nothing are dropped. Unless
    /// `allow_duplicates` is set, a column already on display is moved
    /// rather than duplicated: its existing occurrence is removed first and
    /// the insertion point is decremented once per removal that happened
    /// before it, keeping the net insertion point stable relative to the
    /// surviving slots. The surviving request is spliced in as a group, in
    /// request order.
    pub fn show_columns(
        &mut self,
        indexing: Indexing,
        selector: impl Into<ColumnSelector>,
        placement: Placement,
        allow_duplicates: bool,
    ) {
        let requested = selector.into().into_vec();

        // Resolve before any mutation: Active positions address the list as
        // it stands at call time.
        let mut resolved: Vec<i32> = requested
            .iter()
            .filter_map(|&index| self.resolve(indexing, index))
            .collect();

        let mut insert_at: isize = match placement {
            Placement::End => self.active_order().len() as isize,
            Placement::Before(position) => position as isize,
            Placement::RemoveOnly => -1,
        };

        if !allow_duplicates {
            // A request naming the same column twice collapses to its first
            // occurrence.
            let mut unique = Vec::with_capacity(resolved.len());
            for index in resolved {
                if !unique.contains(&index) {
                    unique.push(index);
                }
            }
            resolved = unique;

            for &index in &resolved {
                if let Some(position) = self.remove_active_occurrence(index) {
                    if (position as isize) < insert_at {
                        insert_at -= 1;
                    }
                }
            }
        }

        if insert_at >= 0 {
            let at = (insert_at as usize).min(self.active_order().len());
            self.splice_active(at, &resolved);
        }

        tracing::debug!(
            target: "quadrille::columns",
            shown = resolved.len(),
            removal_only = insert_at < 0,
            active = self.active_order().len(),
            "show columns"
        );
    }

    /// Removes the selected columns from display.
    ///
    /// Sugar for [`show_columns`](Self::show_columns) with
    /// [`Placement::RemoveOnly`]. Hiding an already hidden column is a
    /// silent no-op; note that hide followed by show re-appends at the end
    /// rather than restoring the original position.
    pub fn hide_columns(&mut self, indexing: Indexing, selector: impl Into<ColumnSelector>) {
        self.show_columns(indexing, selector, Placement::RemoveOnly, false);
    }

    fn resolve(&self, indexing: Indexing, index: i32) -> Option<i32> {
        match indexing {
            Indexing::Active => usize::try_from(index)
                .ok()
                .and_then(|position| self.active_column(position))
                .map(|column| column.index()),
            Indexing::All => self.column(index).map(|column| column.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::{DEFAULT_COLUMN_WIDTH, TREE_COLUMN_INDEX};
    use crate::model::schema_from_names;

    fn registry(names: &[&str]) -> ColumnRegistry {
        let mut registry = ColumnRegistry::new();
        registry.reset(
            &schema_from_names(names.iter().copied()),
            DEFAULT_COLUMN_WIDTH,
        );
        registry
    }

    #[test]
    fn test_hide_removes_display_slot() {
        let mut r = registry(&["a", "b", "c"]);

        r.hide_columns(Indexing::All, 1);
        assert_eq!(r.active_order(), &[0, 2]);

        // Hiding again is a silent no-op.
        r.hide_columns(Indexing::All, 1);
        assert_eq!(r.active_order(), &[0, 2]);
    }

    #[test]
    fn test_hide_by_display_position() {
        let mut r = registry(&["a", "b", "c"]);

        r.hide_columns(Indexing::Active, 0);
        assert_eq!(r.active_order(), &[1, 2]);
    }

    #[test]
    fn test_show_appends_at_end_by_default() {
        let mut r = registry(&["a", "b", "c"]);

        r.hide_columns(Indexing::All, 0);
        r.show_columns(Indexing::All, 0, Placement::End, false);

        // Hide then show does not restore the original position.
        assert_eq!(r.active_order(), &[1, 2, 0]);
    }

    #[test]
    fn test_scalar_and_sequence_selectors_agree() {
        let mut scalar = registry(&["a", "b", "c"]);
        let mut sequence = registry(&["a", "b", "c"]);

        scalar.hide_columns(Indexing::All, 1);
        sequence.hide_columns(Indexing::All, [1]);

        assert_eq!(scalar.active_order(), sequence.active_order());
    }

    #[test]
    fn test_unresolvable_indexes_are_dropped() {
        let mut r = registry(&["a", "b"]);

        r.show_columns(Indexing::All, [42, 0], Placement::Before(0), false);
        assert_eq!(r.active_order(), &[0, 1]);
    }

    #[test]
    fn test_insertion_point_compensation_single_removal() {
        let mut r = registry(&["a", "b", "c", "d"]);

        // Move "a" before display position 2. Its removal at position 0
        // shifts the insertion point left by one, landing before "c".
        r.show_columns(Indexing::All, 0, Placement::Before(2), false);
        assert_eq!(r.active_order(), &[1, 0, 2, 3]);
    }

    #[test]
    fn test_insertion_point_compensation_accumulates() {
        let mut r = registry(&["a", "b", "c", "d", "e"]);

        // Both removals happen before the insertion point; it is
        // decremented once per removal, so the group still lands before
        // "d" (the element originally at position 3).
        r.show_columns(Indexing::All, [0, 1], Placement::Before(3), false);
        assert_eq!(r.active_order(), &[2, 0, 1, 3, 4]);
    }

    #[test]
    fn test_removal_after_insertion_point_does_not_compensate() {
        let mut r = registry(&["a", "b", "c", "d"]);

        // "d" is removed from position 3, after the insertion point 1, so
        // the group lands at 1 unchanged.
        r.show_columns(Indexing::All, 3, Placement::Before(1), false);
        assert_eq!(r.active_order(), &[0, 3, 1, 2]);
    }

    #[test]
    fn test_insertion_point_beyond_length_clamps_to_append() {
        let mut r = registry(&["a", "b"]);

        r.hide_columns(Indexing::All, 0);
        r.show_columns(Indexing::All, 0, Placement::Before(99), false);
        assert_eq!(r.active_order(), &[1, 0]);
    }

    #[test]
    fn test_duplicate_request_collapses_to_first_occurrence() {
        let mut r = registry(&["a", "b", "c"]);

        r.hide_columns(Indexing::All, [0, 1]);
        r.show_columns(Indexing::All, [0, 1, 0], Placement::Before(0), false);

        // One visible occurrence of "a", placed as the group's head.
        assert_eq!(r.active_order(), &[0, 1, 2]);
    }

    #[test]
    fn test_allow_duplicates_skips_dedupe_and_removal() {
        let mut r = registry(&["a", "b", "c"]);

        r.show_columns(Indexing::All, 0, Placement::End, true);

        // The existing occurrence stays put; a second slot appears.
        assert_eq!(r.active_order(), &[0, 1, 2, 0]);
        assert_eq!(r.active_column_index(0), Some(0));
    }

    #[test]
    fn test_show_moves_existing_occurrence() {
        let mut r = registry(&["a", "b", "c"]);

        r.show_columns(Indexing::All, 2, Placement::Before(0), false);
        assert_eq!(r.active_order(), &[2, 0, 1]);
    }

    #[test]
    fn test_show_synthetic_column_explicitly() {
        let mut r = registry(&["a", "b"]);

        r.show_columns(Indexing::All, TREE_COLUMN_INDEX, Placement::Before(0), false);
        assert_eq!(r.active_order(), &[TREE_COLUMN_INDEX, 0, 1]);
        assert!(r.active_column(0).unwrap().is_synthetic());

        r.hide_columns(Indexing::All, TREE_COLUMN_INDEX);
        assert_eq!(r.active_order(), &[0, 1]);
    }

    #[test]
    fn test_active_indexing_resolves_before_mutation() {
        let mut r = registry(&["a", "b", "c", "d"]);

        // Display positions 1 and 2 name "b" and "c" as the list stands at
        // call time, even though the first removal shifts later positions.
        r.show_columns(Indexing::Active, [1, 2], Placement::End, false);
        assert_eq!(r.active_order(), &[0, 3, 1, 2]);
    }

    #[test]
    fn test_no_duplicates_across_show_hide_sequences() {
        let mut r = registry(&["a", "b", "c", "d", "e"]);

        r.hide_columns(Indexing::All, [1, 3]);
        r.show_columns(Indexing::All, [3, 1], Placement::Before(1), false);
        r.show_columns(Indexing::All, [0, 4], Placement::Before(2), false);
        r.hide_columns(Indexing::Active, 0);
        r.show_columns(Indexing::All, vec![2, 2, 3], Placement::End, false);

        let mut seen = Vec::new();
        for &index in r.active_order() {
            assert!(!seen.contains(&index), "duplicate display slot {index}");
            seen.push(index);
        }
    }
}

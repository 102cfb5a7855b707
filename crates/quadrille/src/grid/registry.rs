//! The column registry: every column the grid knows about, and the subset
//! currently on display.
//!
//! Two containers with distinct jobs:
//!
//! - the **all-columns map**, keyed by permanent data index, owns every
//!   [`Column`] including the two synthetic ones at negative indexes;
//! - the **active list** holds data indexes in display order. Hiding,
//!   showing and reordering touch only this list.
//!
//! The active list is deliberately unvalidated: entries are resolved against
//! the map lazily on access, so a stale or garbage index occupies a display
//! slot that simply resolves to nothing. Position lookups are linear scans;
//! the list is small and a reverse index would have to be rebuilt on every
//! splice.

use std::collections::BTreeMap;

use crate::model::ColumnSchema;

use super::column::{Column, ROW_NUMBER_COLUMN_INDEX, TREE_COLUMN_INDEX, UNDEFINED_COLUMN_INDEX};

/// Ordered column storage and display order.
///
/// This is a plain container; change notification and order persistence are
/// layered on by the grid that owns it.
#[derive(Debug, Default)]
pub struct ColumnRegistry {
    all: BTreeMap<i32, Column>,
    active: Vec<i32>,
}

impl ColumnRegistry {
    /// Creates an empty registry. Call [`reset`](Self::reset) to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds both containers from a schema.
    ///
    /// The two synthetic columns are created first, with default identities
    /// unless the schema carries explicit entries at their indexes. Every
    /// schema column becomes active, in schema order; synthetic columns
    /// never occupy display slots on reset (show them explicitly if a
    /// feature needs them on screen).
    pub fn reset(&mut self, schema: &[ColumnSchema], default_width: f64) {
        self.all.clear();
        self.active.clear();

        let tree = schema
            .iter()
            .find(|s| s.index == TREE_COLUMN_INDEX)
            .cloned()
            .unwrap_or_else(|| ColumnSchema::new(TREE_COLUMN_INDEX, "tree").with_header("Tree"));
        let row_number = schema
            .iter()
            .find(|s| s.index == ROW_NUMBER_COLUMN_INDEX)
            .cloned()
            .unwrap_or_else(|| ColumnSchema::new(ROW_NUMBER_COLUMN_INDEX, ""));

        self.all
            .insert(tree.index, Column::from_schema(&tree, default_width));
        self.all.insert(
            row_number.index,
            Column::from_schema(&row_number, default_width),
        );

        for entry in schema.iter().filter(|s| s.index >= 0) {
            self.all
                .insert(entry.index, Column::from_schema(entry, default_width));
            self.active.push(entry.index);
        }

        tracing::debug!(
            target: "quadrille::columns",
            schema_columns = self.active.len(),
            "reset columns"
        );
    }

    /// Creates a column and appends it to both containers.
    ///
    /// Re-adding an existing data index replaces the stored column without
    /// duplicating its display slot.
    pub fn add_column(&mut self, schema: &ColumnSchema, default_width: f64) -> &Column {
        let index = schema.index;
        self.all
            .insert(index, Column::from_schema(schema, default_width));
        if !self.active.contains(&index) {
            self.active.push(index);
        }
        &self.all[&index]
    }

    /// The column with the given data index, if it exists.
    pub fn column(&self, index: i32) -> Option<&Column> {
        self.all.get(&index)
    }

    pub(crate) fn column_mut(&mut self, index: i32) -> Option<&mut Column> {
        self.all.get_mut(&index)
    }

    /// The data index of the first schema column named `name`.
    ///
    /// Synthetic columns are not addressable by name.
    pub fn column_index_by_name(&self, name: &str) -> Option<i32> {
        self.all
            .range(0..)
            .find(|(_, c)| c.name() == name)
            .map(|(&i, _)| i)
    }

    /// The column at the given display position, if the slot resolves.
    pub fn active_column(&self, position: usize) -> Option<&Column> {
        self.active
            .get(position)
            .and_then(|index| self.all.get(index))
    }

    /// The display position of the column with the given data index.
    ///
    /// Linear scan over the active list.
    pub fn active_column_index(&self, index: i32) -> Option<usize> {
        self.active.iter().position(|&i| i == index)
    }

    /// True if the column occupies at least one display slot.
    pub fn is_active(&self, index: i32) -> bool {
        self.active.contains(&index)
    }

    /// Number of display slots (including unresolvable ones).
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Display order as raw data indexes.
    pub fn active_order(&self) -> &[i32] {
        &self.active
    }

    /// Active columns in display order, skipping unresolvable slots.
    pub fn active_columns(&self) -> impl Iterator<Item = &Column> {
        self.active.iter().filter_map(|index| self.all.get(index))
    }

    /// Every column in ascending data-index order (synthetic first).
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.all.values()
    }

    /// Schema columns (non-negative data index) in ascending order.
    pub fn schema_columns(&self) -> impl Iterator<Item = &Column> {
        self.all.range(0..).map(|(_, c)| c)
    }

    /// The highest schema data index, if any schema column exists.
    pub fn max_schema_index(&self) -> Option<i32> {
        self.all.range(0..).next_back().map(|(&i, _)| i)
    }

    /// Replaces the display order wholesale.
    ///
    /// Entries are not validated; an index that resolves to nothing yields
    /// a display slot that lookups report as empty.
    pub fn set_column_order(&mut self, order: &[i32]) {
        self.active = order.to_vec();
    }

    /// Replaces the display order by column name, first match wins.
    ///
    /// A name that matches no schema column still occupies its display
    /// slot: it is recorded as [`UNDEFINED_COLUMN_INDEX`] and resolves to
    /// nothing, the same contract as an unresolvable numeric entry in
    /// [`set_column_order`](Self::set_column_order).
    pub fn set_column_order_by_name(&mut self, names: &[&str]) {
        self.active = names
            .iter()
            .map(|name| match self.column_index_by_name(name) {
                Some(index) => index,
                None => {
                    tracing::warn!(
                        target: "quadrille::columns",
                        name,
                        "unknown column name in order; slot left undefined"
                    );
                    UNDEFINED_COLUMN_INDEX
                }
            })
            .collect();
    }

    /// Swaps two display slots. Out-of-range positions are ignored.
    ///
    /// Returns `true` if a swap happened.
    pub fn swap_columns(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.active.len() || b >= self.active.len() {
            return false;
        }
        self.active.swap(a, b);
        true
    }

    /// Removes the first display slot holding `index`, returning the
    /// position it occupied.
    pub(crate) fn remove_active_occurrence(&mut self, index: i32) -> Option<usize> {
        let position = self.active.iter().position(|&i| i == index)?;
        self.active.remove(position);
        Some(position)
    }

    /// Inserts `indexes` as a contiguous group starting at display slot `at`.
    pub(crate) fn splice_active(&mut self, at: usize, indexes: &[i32]) {
        self.active.splice(at..at, indexes.iter().copied());
    }
}

//! Grid-wide configurable properties.
//!
//! The grid-wide bag is the bottom layer of the property cascade: cell-own
//! and column overrides shadow it, and anything a caller does not find on
//! those layers falls back here. A handful of keys are well known to the
//! controller itself; everything else is carried opaquely for renderers and
//! features, and round-trips through state snapshots.

use quadrille_core::{PropertyBag, Value};

use super::column::DEFAULT_COLUMN_WIDTH;

/// Default height of a row, in pixels, when nothing overrides it.
pub const DEFAULT_ROW_HEIGHT: u32 = 24;

/// Shortest a row can be made, in pixels.
pub const MINIMUM_ROW_HEIGHT: u32 = 5;

/// Well-known grid property keys.
pub mod keys {
    /// Fallback row height (pixels; fractional values round up).
    pub const DEFAULT_ROW_HEIGHT: &str = "default_row_height";
    /// Width given to freshly created columns (pixels).
    pub const DEFAULT_COLUMN_WIDTH: &str = "default_column_width";
    /// Leading data rows pinned above the scroll region (integer).
    pub const FIXED_ROW_COUNT: &str = "fixed_row_count";
    /// Persisted active-column order (list of data indexes).
    pub const COLUMN_INDEXES: &str = "column_indexes";
    /// Whether the renderer draws the row-number handle column (bool).
    pub const SHOW_ROW_NUMBERS: &str = "show_row_numbers";
    /// Whether the renderer draws the tree drill-down column (bool).
    pub const SHOW_TREE_COLUMN: &str = "show_tree_column";
}

/// The grid-wide property bag with typed access to the keys the controller
/// understands.
#[derive(Debug, Clone, Default)]
pub struct GridProperties {
    bag: PropertyBag,
}

impl GridProperties {
    /// Creates an empty property set; every typed accessor reports its
    /// built-in default.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying bag.
    pub fn bag(&self) -> &PropertyBag {
        &self.bag
    }

    /// The value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.bag.get(key)
    }

    /// The string stored under `key`, if any.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.bag.get_str(key)
    }

    /// Sets `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.bag.set(key, value)
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.bag.remove(key)
    }

    /// Shallow-merges `overrides` into the bag.
    pub fn merge(&mut self, overrides: &PropertyBag) {
        self.bag.merge(overrides);
    }

    /// Drops every stored key, restoring built-in defaults.
    pub fn reset(&mut self) {
        self.bag.clear();
    }

    /// Fallback row height, never below [`MINIMUM_ROW_HEIGHT`]. Integer
    /// and float values are read alike; fractions round up.
    pub fn default_row_height(&self) -> u32 {
        self.bag
            .get_float(keys::DEFAULT_ROW_HEIGHT)
            .map(|h| h.max(MINIMUM_ROW_HEIGHT as f64).ceil() as u32)
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Width for freshly created columns.
    pub fn default_column_width(&self) -> f64 {
        self.bag
            .get_float(keys::DEFAULT_COLUMN_WIDTH)
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Leading data rows pinned above the scroll region.
    pub fn fixed_row_count(&self) -> usize {
        self.bag
            .get_int(keys::FIXED_ROW_COUNT)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    }

    /// Whether the handle column is drawn. Defaults to true.
    pub fn show_row_numbers(&self) -> bool {
        self.bag.get_bool(keys::SHOW_ROW_NUMBERS).unwrap_or(true)
    }

    /// Whether the tree column is drawn. Defaults to true.
    pub fn show_tree_column(&self) -> bool {
        self.bag.get_bool(keys::SHOW_TREE_COLUMN).unwrap_or(true)
    }

    /// The persisted active-column order, if one has been recorded.
    pub fn column_indexes(&self) -> Option<Vec<i32>> {
        let list = self.bag.get(keys::COLUMN_INDEXES)?.as_list()?;
        Some(
            list.iter()
                .filter_map(Value::as_int)
                .filter_map(|i| i32::try_from(i).ok())
                .collect(),
        )
    }

    /// Records the active-column order for persistence.
    pub fn set_column_indexes(&mut self, order: &[i32]) {
        let list: Vec<Value> = order.iter().map(|&i| Value::Int(i64::from(i))).collect();
        self.bag.set(keys::COLUMN_INDEXES, Value::List(list));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_stored_keys() {
        let props = GridProperties::new();

        assert_eq!(props.default_row_height(), DEFAULT_ROW_HEIGHT);
        assert_eq!(props.default_column_width(), DEFAULT_COLUMN_WIDTH);
        assert_eq!(props.fixed_row_count(), 0);
        assert!(props.show_row_numbers());
        assert!(props.column_indexes().is_none());
    }

    #[test]
    fn test_typed_accessors_read_stored_values() {
        let mut props = GridProperties::new();
        props.set(keys::DEFAULT_ROW_HEIGHT, 40);
        props.set(keys::FIXED_ROW_COUNT, 2);
        props.set(keys::SHOW_ROW_NUMBERS, false);

        assert_eq!(props.default_row_height(), 40);
        assert_eq!(props.fixed_row_count(), 2);
        assert!(!props.show_row_numbers());
    }

    #[test]
    fn test_default_row_height_respects_minimum() {
        let mut props = GridProperties::new();
        props.set(keys::DEFAULT_ROW_HEIGHT, 1);
        assert_eq!(props.default_row_height(), MINIMUM_ROW_HEIGHT);

        // Garbage values fall back to the built-in default.
        props.set(keys::DEFAULT_ROW_HEIGHT, "tall");
        assert_eq!(props.default_row_height(), DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_default_row_height_reads_float_values() {
        let mut props = GridProperties::new();

        // A snapshot can carry the height as a float; it rounds up.
        props.set(keys::DEFAULT_ROW_HEIGHT, 24.5);
        assert_eq!(props.default_row_height(), 25);

        props.set(keys::DEFAULT_ROW_HEIGHT, 2.5);
        assert_eq!(props.default_row_height(), MINIMUM_ROW_HEIGHT);
    }

    #[test]
    fn test_column_indexes_round_trip() {
        let mut props = GridProperties::new();
        props.set_column_indexes(&[2, 0, 1]);
        assert_eq!(props.column_indexes(), Some(vec![2, 0, 1]));

        props.reset();
        assert!(props.column_indexes().is_none());
    }
}

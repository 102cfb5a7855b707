//! Per-cell and per-row property resolution.
//!
//! Overrides live in two places. Column overrides sit on the [`Column`]
//! itself. Row and cell overrides are stored through the model's row
//! metadata, so they follow the row through sorts and filters: the row's
//! own properties live in the metadata bag under the reserved `"~row"`
//! key, and each cell's bag under its column's name. Names starting with
//! `~` are reserved for the grid and must not be used as column names.
//!
//! Resolution for a single cell key walks cell-own, then column. Grid-wide
//! defaults are the caller's fallback, not the resolver's: a `None` from
//! [`GridCore::cell_property`] means "nothing overrides this key here".
//!
//! [`Column`]: super::column::Column

use quadrille_core::{PropertyBag, Value, logging::targets};

use crate::error::{GridError, Result};
use crate::model::SubgridId;

use super::core::GridCore;
use super::properties::MINIMUM_ROW_HEIGHT;
use super::signals::CellKey;

/// Metadata key holding a row's own property bag.
pub const ROW_PROPERTIES_KEY: &str = "~row";

/// Property key holding a row's height override, in pixels.
pub const ROW_HEIGHT_KEY: &str = "height";

/// Outcome of a row property lookup.
///
/// Distinguishes "this row does not exist" from "this row exists but
/// carries no overrides", which callers treat differently: the first is
/// out of range, the second falls back to grid defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum RowProperties {
    /// The row is outside the subgrid's current row range.
    Missing,
    /// The row exists but has no property bag.
    Unset,
    /// The row's property bag.
    Bag(PropertyBag),
}

impl RowProperties {
    /// The bag, if one exists.
    pub fn bag(&self) -> Option<&PropertyBag> {
        match self {
            RowProperties::Bag(bag) => Some(bag),
            _ => None,
        }
    }
}

impl GridCore {
    // -------------------------------------------------------------------------
    // Row properties
    // -------------------------------------------------------------------------

    /// Looks up a row's property bag.
    ///
    /// When the row has no bag and `prototype` is given, the prototype is
    /// stored as the row's bag and returned, so the caller can treat the
    /// result as the live row state. Without a prototype the lookup is
    /// read-only.
    pub fn row_properties(
        &self,
        subgrid: SubgridId,
        row: usize,
        prototype: Option<PropertyBag>,
    ) -> RowProperties {
        let model = self.subgrids().model_of(subgrid);
        if row >= model.row_count() {
            return RowProperties::Missing;
        }

        let metadata = model.row_metadata(row);
        if let Some(bag) = metadata
            .as_ref()
            .and_then(|m| m.get(ROW_PROPERTIES_KEY))
            .and_then(Value::as_map)
        {
            return RowProperties::Bag(bag.clone());
        }

        match prototype {
            Some(proto) => {
                let mut meta = metadata.unwrap_or_default();
                meta.set(ROW_PROPERTIES_KEY, proto.clone());
                if !model.set_row_metadata(row, meta) {
                    tracing::debug!(
                        target: targets::PROPERTIES,
                        row,
                        "model declined row metadata; row properties not retained"
                    );
                }
                RowProperties::Bag(proto)
            }
            None => RowProperties::Unset,
        }
    }

    /// The row's display height in pixels.
    ///
    /// A per-row `height` override wins, rounded up and clamped to the
    /// minimum; otherwise the grid-wide default applies. Integer and
    /// float overrides are read alike.
    pub fn row_height(&self, subgrid: SubgridId, row: usize) -> u32 {
        if let RowProperties::Bag(bag) = self.row_properties(subgrid, row, None)
            && let Some(height) = bag.get_float(ROW_HEIGHT_KEY)
        {
            return height.max(MINIMUM_ROW_HEIGHT as f64).ceil() as u32;
        }
        self.properties().default_row_height()
    }

    /// Overrides one row's height.
    ///
    /// Fractional heights round up and the minimum is enforced. Setting a
    /// height equal to the row's current resolved height, or addressing a
    /// row that does not exist, is a silent no-op.
    pub fn set_row_height(&mut self, subgrid: SubgridId, row: usize, height: f64) {
        let model = self.subgrids().model_of(subgrid);
        if row >= model.row_count() {
            return;
        }

        let clamped = height.max(MINIMUM_ROW_HEIGHT as f64).ceil() as u32;
        if clamped == self.row_height(subgrid, row) {
            return;
        }

        let model = self.subgrids().model_of(subgrid);
        let mut metadata = model.row_metadata(row).unwrap_or_default();
        match metadata.get_mut(ROW_PROPERTIES_KEY).and_then(Value::as_map_mut) {
            Some(bag) => {
                bag.set(ROW_HEIGHT_KEY, clamped as i64);
            }
            None => {
                let mut bag = PropertyBag::new();
                bag.set(ROW_HEIGHT_KEY, clamped as i64);
                metadata.set(ROW_PROPERTIES_KEY, bag);
            }
        }

        if model.set_row_metadata(row, metadata) {
            self.signals().emit_shape();
        } else {
            tracing::debug!(
                target: targets::PROPERTIES,
                row,
                height = clamped,
                "model declined row metadata; row height not retained"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Cell properties
    // -------------------------------------------------------------------------

    /// The cell's own property bag, if it has one.
    pub fn cell_properties(
        &self,
        subgrid: SubgridId,
        column: i32,
        row: usize,
    ) -> Option<PropertyBag> {
        let name = self.columns().column(column)?.name().to_string();
        let metadata = self.subgrids().model_of(subgrid).row_metadata(row)?;
        metadata.get(&name).and_then(Value::as_map).cloned()
    }

    /// Resolves one property key for a cell: cell-own bag first, then the
    /// column's bag.
    ///
    /// `None` means no override exists at either level; the caller falls
    /// back to the grid-wide bag. The grid defaults are deliberately not
    /// consulted here so that callers can distinguish "overridden" from
    /// "default".
    pub fn cell_property(
        &self,
        subgrid: SubgridId,
        column: i32,
        row: usize,
        key: &str,
    ) -> Option<Value> {
        let col = self.columns().column(column)?;

        if let Some(metadata) = self.subgrids().model_of(subgrid).row_metadata(row)
            && let Some(value) = metadata
                .get(col.name())
                .and_then(Value::as_map)
                .and_then(|bag| bag.get(key))
        {
            return Some(value.clone());
        }

        col.properties().get(key).cloned()
    }

    /// Writes one property onto a single cell and returns the cell's
    /// resulting bag.
    ///
    /// The override is stored through the model's row metadata under the
    /// column's name. Unknown columns are a configuration error. When the
    /// model retains the write, the cell's cached rendering is invalidated
    /// and a cosmetic change is announced.
    pub fn set_cell_property(
        &mut self,
        subgrid: SubgridId,
        column: i32,
        row: usize,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<PropertyBag> {
        let name = self
            .columns()
            .column(column)
            .ok_or_else(|| GridError::unknown_column(column))?
            .name()
            .to_string();

        let model = self.subgrids().model_of(subgrid);
        let mut metadata = model.row_metadata(row).unwrap_or_default();

        let bag = match metadata.get_mut(&name).and_then(Value::as_map_mut) {
            Some(bag) => {
                bag.set(key, value);
                bag.clone()
            }
            None => {
                let mut bag = PropertyBag::new();
                bag.set(key, value);
                metadata.set(name.clone(), bag.clone());
                bag
            }
        };

        if model.set_row_metadata(row, metadata) {
            self.signals()
                .cell_cache_invalidated
                .emit(CellKey::new(subgrid, column, row));
            self.signals().emit_cosmetic();
        } else {
            tracing::debug!(
                target: targets::PROPERTIES,
                column,
                row,
                "model declined row metadata; cell property not retained"
            );
        }

        Ok(bag)
    }

    // -------------------------------------------------------------------------
    // Column properties
    // -------------------------------------------------------------------------

    /// The column's property bag.
    pub fn column_properties(&self, column: i32) -> Option<&PropertyBag> {
        self.columns().column(column).map(|c| c.properties())
    }

    /// Shallow-merges overrides into a column's bag; existing keys not
    /// named in `overrides` survive.
    pub fn set_column_properties(&mut self, column: i32, overrides: &PropertyBag) -> Result<()> {
        let col = self
            .columns_mut()
            .column_mut(column)
            .ok_or_else(|| GridError::unknown_column(column))?;
        col.properties_mut().merge(overrides);
        self.signals().emit_cosmetic();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::RwLock;
    use quadrille_core::Value;

    use crate::grid::properties::DEFAULT_ROW_HEIGHT;
    use crate::grid::signals::ChangeScope;
    use crate::model::{ColumnSchema, DataModel, Subgrid, SubgridSet, schema_from_names};

    use super::*;

    struct MetadataModel {
        rows: usize,
        metadata: RwLock<Vec<Option<PropertyBag>>>,
    }

    impl MetadataModel {
        fn new(rows: usize) -> Self {
            Self {
                rows,
                metadata: RwLock::new(vec![None; rows]),
            }
        }
    }

    impl DataModel for MetadataModel {
        fn row_count(&self) -> usize {
            self.rows
        }

        fn value(&self, row: usize, _column: i32) -> Value {
            Value::from(row as i64)
        }

        fn schema(&self) -> Vec<ColumnSchema> {
            schema_from_names(["alpha", "beta"])
        }

        fn row_metadata(&self, row: usize) -> Option<PropertyBag> {
            self.metadata.read().get(row).cloned().flatten()
        }

        fn set_row_metadata(&self, row: usize, metadata: PropertyBag) -> bool {
            match self.metadata.write().get_mut(row) {
                Some(slot) => {
                    *slot = Some(metadata);
                    true
                }
                None => false,
            }
        }
    }

    fn core(rows: usize) -> GridCore {
        let model = Arc::new(MetadataModel::new(rows));
        let subgrids = SubgridSet::new(vec![Subgrid::data(model)]).unwrap();
        GridCore::new(subgrids, PropertyBag::new())
    }

    #[test]
    fn test_row_properties_tri_state() {
        let core = core(2);
        let data = core.data_subgrid();

        assert_eq!(core.row_properties(data, 5, None), RowProperties::Missing);
        assert_eq!(core.row_properties(data, 0, None), RowProperties::Unset);

        let mut proto = PropertyBag::new();
        proto.set("flagged", true);
        let created = core.row_properties(data, 0, Some(proto));
        assert_eq!(
            created.bag().and_then(|b| b.get_bool("flagged")),
            Some(true)
        );

        // The prototype was stored; a plain lookup now finds it.
        let found = core.row_properties(data, 0, None);
        assert_eq!(found.bag().and_then(|b| b.get_bool("flagged")), Some(true));
    }

    #[test]
    fn test_row_height_defaults_and_overrides() {
        let mut core = core(3);
        let data = core.data_subgrid();

        assert_eq!(core.row_height(data, 0), DEFAULT_ROW_HEIGHT);

        core.set_row_height(data, 0, 41.2);
        assert_eq!(core.row_height(data, 0), 42);
        assert_eq!(core.row_height(data, 1), DEFAULT_ROW_HEIGHT);

        // Below-minimum requests clamp.
        core.set_row_height(data, 1, 1.0);
        assert_eq!(core.row_height(data, 1), MINIMUM_ROW_HEIGHT);
    }

    #[test]
    fn test_row_height_reads_float_metadata() {
        let core = core(2);
        let data = core.data_subgrid();

        // Models can hand back the height as a float; it is read with the
        // same round-up-and-clamp rule the setter applies.
        let mut row = PropertyBag::new();
        row.set(ROW_HEIGHT_KEY, 30.4);
        let mut metadata = PropertyBag::new();
        metadata.set(ROW_PROPERTIES_KEY, row);
        assert!(core.subgrids().model_of(data).set_row_metadata(0, metadata));

        assert_eq!(core.row_height(data, 0), 31);
        assert_eq!(core.row_height(data, 1), DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_set_row_height_redundant_or_out_of_range_is_silent() {
        let mut core = core(2);
        let data = core.data_subgrid();
        let scopes = Arc::new(RwLock::new(Vec::new()));

        let scopes_clone = scopes.clone();
        core.signals().changed.connect(move |&scope| {
            scopes_clone.write().push(scope);
        });

        core.set_row_height(data, 0, 30.0);
        assert_eq!(*scopes.read(), vec![ChangeScope::Shape]);

        // Same resolved height again: no notification.
        core.set_row_height(data, 0, 30.0);
        assert_eq!(*scopes.read(), vec![ChangeScope::Shape]);

        // Out of range: nothing happens at all.
        core.set_row_height(data, 99, 64.0);
        assert_eq!(*scopes.read(), vec![ChangeScope::Shape]);
        assert_eq!(core.row_height(data, 0), 30);
    }

    #[test]
    fn test_cell_property_shadows_column_property() {
        let mut core = core(2);
        let data = core.data_subgrid();

        let mut col_props = PropertyBag::new();
        col_props.set("color", "red");
        core.set_column_properties(0, &col_props).unwrap();

        // No cell override yet: the column value shows through.
        assert_eq!(
            core.cell_property(data, 0, 1, "color"),
            Some(Value::from("red"))
        );

        core.set_cell_property(data, 0, 1, "color", "blue").unwrap();
        assert_eq!(
            core.cell_property(data, 0, 1, "color"),
            Some(Value::from("blue"))
        );

        // Other rows and keys still resolve to the column level.
        assert_eq!(
            core.cell_property(data, 0, 0, "color"),
            Some(Value::from("red"))
        );
        assert_eq!(core.cell_property(data, 0, 1, "font"), None);
    }

    #[test]
    fn test_set_cell_property_unknown_column_fails() {
        let mut core = core(1);
        let data = core.data_subgrid();

        let err = core.set_cell_property(data, 7, 0, "color", "red").unwrap_err();
        assert!(matches!(err, GridError::UnknownColumn { index: 7 }));
    }

    #[test]
    fn test_set_cell_property_invalidates_cell_cache() {
        let mut core = core(2);
        let data = core.data_subgrid();
        let keys_seen = Arc::new(RwLock::new(Vec::new()));

        let keys_clone = keys_seen.clone();
        core.signals().cell_cache_invalidated.connect(move |key| {
            keys_clone.write().push(*key);
        });

        let bag = core.set_cell_property(data, 1, 0, "color", "blue").unwrap();
        assert_eq!(bag.get_str("color"), Some("blue"));
        assert_eq!(*keys_seen.read(), vec![CellKey::new(data, 1, 0)]);
    }

    #[test]
    fn test_cell_bags_keyed_by_column_name_survive_in_metadata() {
        let mut core = core(1);
        let data = core.data_subgrid();

        core.set_cell_property(data, 0, 0, "color", "blue").unwrap();
        core.set_row_height(data, 0, 50.0);

        // Both stores live side by side in the same metadata bag.
        let metadata = core.subgrids().model_of(data).row_metadata(0).unwrap();
        assert!(metadata.get("alpha").and_then(Value::as_map).is_some());
        assert!(metadata.get(ROW_PROPERTIES_KEY).and_then(Value::as_map).is_some());
        assert_eq!(core.row_height(data, 0), 50);
        assert_eq!(
            core.cell_property(data, 0, 0, "color"),
            Some(Value::from("blue"))
        );
    }

    #[test]
    fn test_column_properties_merge_preserves_unnamed_keys() {
        let mut core = core(1);

        let mut first = PropertyBag::new();
        first.set("color", "red");
        first.set("halign", "right");
        core.set_column_properties(1, &first).unwrap();

        let mut second = PropertyBag::new();
        second.set("color", "green");
        core.set_column_properties(1, &second).unwrap();

        let props = core.column_properties(1).unwrap();
        assert_eq!(props.get_str("color"), Some("green"));
        assert_eq!(props.get_str("halign"), Some("right"));
        assert_eq!(core.column_properties(9), None);
    }

    #[test]
    fn test_grid_default_fallback_is_callers_job() {
        let mut core = core(1);
        let data = core.data_subgrid();
        core.set_grid_property("color", "black");

        // The resolver reports no override; the grid bag still has the key.
        assert_eq!(core.cell_property(data, 0, 0, "color"), None);
        assert_eq!(
            core.properties().get("color"),
            Some(&Value::from("black"))
        );
    }
}

//! The grid's state owner.
//!
//! [`GridCore`] bundles the column registry, the grid-wide property bag, the
//! subgrid composition and the outbound signals, and is the host object
//! input features act on. Every mutating operation here pairs the registry
//! mutation with its notification scope, and the visibility operations
//! additionally persist the resulting display order, so callers cannot
//! forget either half.

use cursor_icon::CursorIcon;
use quadrille_core::{PropertyBag, Value};

use crate::error::{GridError, Result};
use crate::model::{ColumnSchema, SubgridId, SubgridSet};

use super::column::Column;
use super::properties::GridProperties;
use super::registry::ColumnRegistry;
use super::signals::GridSignals;
use super::visibility::{ColumnSelector, Indexing, Placement};

/// Columns, properties, subgrids and signals under one roof.
///
/// Obtained from [`Grid`](super::Grid) via
/// [`core`](super::Grid::core)/[`core_mut`](super::Grid::core_mut), and
/// passed to features during dispatch.
pub struct GridCore {
    columns: ColumnRegistry,
    properties: GridProperties,
    subgrids: SubgridSet,
    signals: GridSignals,
    cursor: CursorIcon,
}

impl GridCore {
    pub(crate) fn new(subgrids: SubgridSet, initial_properties: PropertyBag) -> Self {
        let mut properties = GridProperties::new();
        properties.merge(&initial_properties);

        let mut columns = ColumnRegistry::new();
        columns.reset(
            &subgrids.data_model().schema(),
            properties.default_column_width(),
        );

        Self {
            columns,
            properties,
            subgrids,
            signals: GridSignals::new(),
            cursor: CursorIcon::Default,
        }
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// The column registry (read side).
    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut ColumnRegistry {
        &mut self.columns
    }

    /// The grid-wide properties (read side).
    pub fn properties(&self) -> &GridProperties {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut GridProperties {
        &mut self.properties
    }

    /// The subgrid composition.
    pub fn subgrids(&self) -> &SubgridSet {
        &self.subgrids
    }

    /// The data subgrid's identity.
    pub fn data_subgrid(&self) -> SubgridId {
        self.subgrids.data_id()
    }

    /// The outbound signal bundle.
    pub fn signals(&self) -> &GridSignals {
        &self.signals
    }

    /// The pointer cursor last chosen by the feature chain.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    // -------------------------------------------------------------------------
    // Column registry operations
    // -------------------------------------------------------------------------

    /// Rebuilds all columns from the data model's current schema.
    ///
    /// Synthetic columns are recreated, every schema column becomes active
    /// in schema order, and all property overrides on columns are
    /// discarded.
    pub fn reset_columns(&mut self) {
        let schema = self.subgrids.data_model().schema();
        let width = self.properties.default_column_width();
        self.columns.reset(&schema, width);
        self.signals.emit_shape();
    }

    /// Creates a column and appends it to both containers.
    pub fn add_column(&mut self, schema: &ColumnSchema) -> &Column {
        let width = self.properties.default_column_width();
        let column = self.columns.add_column(schema, width);
        self.signals.emit_shape();
        column
    }

    /// Replaces the display order wholesale. See
    /// [`ColumnRegistry::set_column_order`].
    pub fn set_column_order(&mut self, order: &[i32]) {
        if self.columns.active_order() == order {
            return;
        }
        self.columns.set_column_order(order);
        self.signals.emit_shape();
    }

    /// Replaces the display order by column name, first match wins.
    pub fn set_column_order_by_name(&mut self, names: &[&str]) {
        let before = self.columns.active_order().to_vec();
        self.columns.set_column_order_by_name(names);
        if self.columns.active_order() != before {
            self.signals.emit_shape();
        }
    }

    /// Swaps two display slots, notifying only when a swap happened.
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        if self.columns.swap_columns(a, b) {
            self.signals.emit_cosmetic();
        }
    }

    /// Makes the selected columns visible at the requested placement, then
    /// persists the resulting order under the
    /// [`column_indexes`](super::keys::COLUMN_INDEXES) grid property.
    ///
    /// See [`ColumnRegistry::show_columns`] for the request pipeline.
    pub fn show_columns(
        &mut self,
        indexing: Indexing,
        selector: impl Into<ColumnSelector>,
        placement: Placement,
        allow_duplicates: bool,
    ) {
        let before = self.columns.active_order().to_vec();
        self.columns
            .show_columns(indexing, selector, placement, allow_duplicates);
        if self.columns.active_order() != before {
            self.properties.set_column_indexes(self.columns.active_order());
            self.signals.emit_shape();
        }
    }

    /// Removes the selected columns from display. A request that removes
    /// nothing is a silent no-op.
    pub fn hide_columns(&mut self, indexing: Indexing, selector: impl Into<ColumnSelector>) {
        self.show_columns(indexing, selector, Placement::RemoveOnly, false);
    }

    // -------------------------------------------------------------------------
    // Column attributes
    // -------------------------------------------------------------------------

    /// A column's current width in pixels.
    pub fn column_width(&self, column: i32) -> Option<f64> {
        self.columns.column(column).map(Column::width)
    }

    /// Sets a column's width (clamped to the minimum), turning autosizing
    /// off. Unknown columns are a configuration error.
    pub fn set_column_width(&mut self, column: i32, width: f64) -> Result<()> {
        let col = self
            .columns
            .column_mut(column)
            .ok_or_else(|| GridError::unknown_column(column))?;
        if col.set_width(width) {
            self.signals.emit_shape();
        }
        Ok(())
    }

    /// Re-enables or disables content-driven width for a column.
    pub fn set_column_autosizing(&mut self, column: i32, autosizing: bool) -> Result<()> {
        let col = self
            .columns
            .column_mut(column)
            .ok_or_else(|| GridError::unknown_column(column))?;
        if col.autosizing() != autosizing {
            col.set_autosizing(autosizing);
            self.signals.emit_cosmetic();
        }
        Ok(())
    }

    /// Replaces a column's header label.
    pub fn set_column_header(&mut self, column: i32, header: impl Into<String>) -> Result<()> {
        let col = self
            .columns
            .column_mut(column)
            .ok_or_else(|| GridError::unknown_column(column))?;
        col.set_header(header);
        self.signals.emit_cosmetic();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Grid-wide properties
    // -------------------------------------------------------------------------

    /// Sets one grid-wide property.
    pub fn set_grid_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.set(key, value);
        self.signals.emit_cosmetic();
    }

    /// Shallow-merges a bag of grid-wide properties.
    pub fn merge_grid_properties(&mut self, overrides: &PropertyBag) {
        self.properties.merge(overrides);
        self.signals.emit_cosmetic();
    }

    // -------------------------------------------------------------------------
    // Data access
    // -------------------------------------------------------------------------

    /// Raw cell value from the subgrid's model.
    pub fn cell_value(&self, subgrid: SubgridId, column: i32, row: usize) -> Value {
        self.subgrids.model_of(subgrid).value(row, column)
    }

    /// Rows contributed by one subgrid.
    pub fn row_count(&self, subgrid: SubgridId) -> usize {
        self.subgrids.model_of(subgrid).row_count()
    }

    /// Rows contributed by the whole composition.
    pub fn total_row_count(&self) -> usize {
        self.subgrids.total_row_count()
    }

    /// Non-scrolling rows: header subgrid rows plus the configured number
    /// of pinned data rows.
    pub fn fixed_row_count(&self) -> usize {
        self.subgrids.fixed_row_count(self.properties.fixed_row_count())
    }
}

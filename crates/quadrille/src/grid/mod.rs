//! The grid controller: columns, properties, state and dispatch.
//!
//! This module is the heart of the crate. A [`Grid`] owns a [`GridCore`]
//! (columns, properties, subgrids, signals) and a feature chain, and is
//! what an embedding toolkit drives: data queries and property writes go
//! through the operations here, native input goes through the
//! `handle_*` dispatch entry points.
//!
//! # Core Types
//!
//! - [`Grid`]: the controller an embedder owns; built via [`GridBuilder`]
//! - [`GridCore`]: columns, properties, subgrids and signals in one host
//! - [`ColumnRegistry`]: the all-columns set and the active display list
//! - [`GridProperties`]: the grid-wide property bag with typed accessors
//! - [`GridState`]: a restorable snapshot of grid configuration
//! - [`GridSignals`]: outbound change notifications with [`ChangeScope`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use quadrille::Value;
//! use quadrille::grid::{Grid, Indexing};
//! use quadrille::model::{ColumnSchema, DataModel, schema_from_names};
//!
//! struct Quotes;
//!
//! impl DataModel for Quotes {
//!     fn row_count(&self) -> usize {
//!         3
//!     }
//!
//!     fn value(&self, row: usize, column: i32) -> Value {
//!         Value::from(format!("r{row}c{column}"))
//!     }
//!
//!     fn schema(&self) -> Vec<ColumnSchema> {
//!         schema_from_names(["sym", "bid", "ask"])
//!     }
//! }
//!
//! let mut grid = Grid::with_model(Arc::new(Quotes))?;
//!
//! // Hide the bid column, then bring it back at the end.
//! grid.hide_columns(Indexing::All, 1);
//! assert_eq!(grid.columns().active_order(), &[0, 2]);
//! grid.show_columns(
//!     Indexing::All,
//!     1,
//!     quadrille::grid::Placement::End,
//!     false,
//! );
//! assert_eq!(grid.columns().active_order(), &[0, 2, 1]);
//!
//! // Snapshot and restore.
//! let snapshot = grid.get_state();
//! grid.hide_columns(Indexing::All, vec![0, 2]);
//! grid.set_state(&snapshot);
//! assert_eq!(grid.columns().active_order(), &[0, 2, 1]);
//! # Ok::<(), quadrille::GridError>(())
//! ```

mod column;
mod core;
mod properties;
mod registry;
mod resolver;
mod signals;
mod state;
mod visibility;

pub use column::{
    Column, DEFAULT_COLUMN_WIDTH, MINIMUM_COLUMN_WIDTH, ROW_NUMBER_COLUMN_INDEX, TREE_COLUMN_INDEX,
    UNDEFINED_COLUMN_INDEX,
};
pub use self::core::GridCore;
pub use properties::{DEFAULT_ROW_HEIGHT, GridProperties, MINIMUM_ROW_HEIGHT, keys};
pub use registry::ColumnRegistry;
pub use resolver::{ROW_HEIGHT_KEY, ROW_PROPERTIES_KEY, RowProperties};
pub use signals::{CellKey, ChangeScope, GridSignals};
pub use state::{GridState, NON_EXPORTABLE_KEYS};
pub use visibility::{ColumnSelector, Indexing, Placement};

use std::sync::Arc;

use cursor_icon::CursorIcon;
use quadrille_core::{PropertyBag, Value};

use crate::error::Result;
use crate::input::{
    DispatchResult, FeatureChain, FeatureDirectory, KeyEvent, PointerEvent, WheelEvent,
};
use crate::model::{DataModel, Subgrid, SubgridId, SubgridSet};

/// The grid controller.
///
/// Pairs the grid state ([`GridCore`]) with the feature chain that acts
/// on it. All the core's operations are reachable through
/// [`core`](Grid::core)/[`core_mut`](Grid::core_mut); the most common
/// ones are mirrored here directly.
pub struct Grid {
    core: GridCore,
    chain: FeatureChain,
}

impl Grid {
    /// Start building a grid.
    pub fn builder() -> GridBuilder {
        GridBuilder::new()
    }

    /// A grid over a single data model, with no features installed.
    pub fn with_model(model: Arc<dyn DataModel>) -> Result<Self> {
        GridBuilder::new()
            .subgrid(Subgrid::data(model))
            .build(&FeatureDirectory::new())
    }

    /// The grid's state host.
    pub fn core(&self) -> &GridCore {
        &self.core
    }

    /// The grid's state host, mutably.
    pub fn core_mut(&mut self) -> &mut GridCore {
        &mut self.core
    }

    /// Installed feature names, in chain order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.chain.names()
    }

    // -------------------------------------------------------------------------
    // Mirrored core operations
    // -------------------------------------------------------------------------

    /// See [`GridCore::columns`].
    pub fn columns(&self) -> &ColumnRegistry {
        self.core.columns()
    }

    /// See [`GridCore::properties`].
    pub fn properties(&self) -> &GridProperties {
        self.core.properties()
    }

    /// See [`GridCore::subgrids`].
    pub fn subgrids(&self) -> &SubgridSet {
        self.core.subgrids()
    }

    /// See [`GridCore::signals`].
    pub fn signals(&self) -> &GridSignals {
        self.core.signals()
    }

    /// See [`GridCore::data_subgrid`].
    pub fn data_subgrid(&self) -> SubgridId {
        self.core.data_subgrid()
    }

    /// See [`GridCore::cursor`].
    pub fn cursor(&self) -> CursorIcon {
        self.core.cursor()
    }

    /// See [`GridCore::show_columns`].
    pub fn show_columns(
        &mut self,
        indexing: Indexing,
        selector: impl Into<ColumnSelector>,
        placement: Placement,
        allow_duplicates: bool,
    ) {
        self.core
            .show_columns(indexing, selector, placement, allow_duplicates);
    }

    /// See [`GridCore::hide_columns`].
    pub fn hide_columns(&mut self, indexing: Indexing, selector: impl Into<ColumnSelector>) {
        self.core.hide_columns(indexing, selector);
    }

    /// See [`GridCore::set_column_order`].
    pub fn set_column_order(&mut self, order: &[i32]) {
        self.core.set_column_order(order);
    }

    /// See [`GridCore::set_column_order_by_name`].
    pub fn set_column_order_by_name(&mut self, names: &[&str]) {
        self.core.set_column_order_by_name(names);
    }

    /// See [`GridCore::swap_columns`].
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        self.core.swap_columns(a, b);
    }

    /// See [`GridCore::column_width`].
    pub fn column_width(&self, column: i32) -> Option<f64> {
        self.core.column_width(column)
    }

    /// See [`GridCore::set_column_width`].
    pub fn set_column_width(&mut self, column: i32, width: f64) -> Result<()> {
        self.core.set_column_width(column, width)
    }

    /// See [`GridCore::set_grid_property`].
    pub fn set_grid_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.core.set_grid_property(key, value);
    }

    /// See [`GridCore::cell_value`].
    pub fn cell_value(&self, subgrid: SubgridId, column: i32, row: usize) -> Value {
        self.core.cell_value(subgrid, column, row)
    }

    /// See [`GridCore::row_properties`].
    pub fn row_properties(
        &self,
        subgrid: SubgridId,
        row: usize,
        prototype: Option<PropertyBag>,
    ) -> RowProperties {
        self.core.row_properties(subgrid, row, prototype)
    }

    /// See [`GridCore::row_height`].
    pub fn row_height(&self, subgrid: SubgridId, row: usize) -> u32 {
        self.core.row_height(subgrid, row)
    }

    /// See [`GridCore::set_row_height`].
    pub fn set_row_height(&mut self, subgrid: SubgridId, row: usize, height: f64) {
        self.core.set_row_height(subgrid, row, height);
    }

    /// See [`GridCore::cell_property`].
    pub fn cell_property(
        &self,
        subgrid: SubgridId,
        column: i32,
        row: usize,
        key: &str,
    ) -> Option<Value> {
        self.core.cell_property(subgrid, column, row, key)
    }

    /// See [`GridCore::set_cell_property`].
    pub fn set_cell_property(
        &mut self,
        subgrid: SubgridId,
        column: i32,
        row: usize,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<PropertyBag> {
        self.core.set_cell_property(subgrid, column, row, key, value)
    }

    /// See [`GridCore::set_column_properties`].
    pub fn set_column_properties(&mut self, column: i32, overrides: &PropertyBag) -> Result<()> {
        self.core.set_column_properties(column, overrides)
    }

    /// See [`GridCore::get_state`].
    pub fn get_state(&self) -> GridState {
        self.core.get_state()
    }

    /// See [`GridCore::set_state`].
    pub fn set_state(&mut self, state: &GridState) {
        self.core.set_state(state);
    }

    /// See [`GridCore::add_state`].
    pub fn add_state(&mut self, state: &GridState) {
        self.core.add_state(state);
    }

    // -------------------------------------------------------------------------
    // Event dispatch
    // -------------------------------------------------------------------------
    //
    // Every entry point walks the chain for its category, then re-polls
    // the chain for a cursor. With no features installed the whole pass,
    // cursor poll included, is skipped.

    fn dispatch<E>(
        &mut self,
        handler: fn(&mut FeatureChain, &mut GridCore, &mut E) -> DispatchResult,
        event: &mut E,
    ) -> DispatchResult {
        if self.chain.is_empty() {
            return DispatchResult::Ignored;
        }
        let result = handler(&mut self.chain, &mut self.core, event);
        let cursor = self
            .chain
            .cursor(&self.core)
            .unwrap_or(CursorIcon::Default);
        self.core.set_cursor(cursor);
        result
    }

    /// Dispatch a pointer move (no button held).
    pub fn handle_pointer_move(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::pointer_move, event)
    }

    /// Dispatch a pointer press.
    pub fn handle_pointer_down(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::pointer_down, event)
    }

    /// Dispatch a pointer release.
    pub fn handle_pointer_up(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::pointer_up, event)
    }

    /// Dispatch a pointer move with a button held.
    pub fn handle_pointer_drag(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::pointer_drag, event)
    }

    /// Dispatch a primary-button click.
    pub fn handle_primary_click(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::primary_click, event)
    }

    /// Dispatch a secondary-button click.
    pub fn handle_context_click(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::context_click, event)
    }

    /// Dispatch a primary-button double click.
    pub fn handle_double_click(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::double_click, event)
    }

    /// Dispatch a pointer exit from the grid area.
    pub fn handle_pointer_exit(&mut self, event: &mut PointerEvent) -> DispatchResult {
        self.dispatch(FeatureChain::pointer_exit, event)
    }

    /// Dispatch a wheel event.
    pub fn handle_wheel(&mut self, event: &mut WheelEvent) -> DispatchResult {
        self.dispatch(FeatureChain::wheel, event)
    }

    /// Dispatch a key press.
    pub fn handle_key_down(&mut self, event: &mut KeyEvent) -> DispatchResult {
        self.dispatch(FeatureChain::key_down, event)
    }

    /// Dispatch a key release.
    pub fn handle_key_up(&mut self, event: &mut KeyEvent) -> DispatchResult {
        self.dispatch(FeatureChain::key_up, event)
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("columns", &self.core.columns().active_count())
            .field("subgrids", &self.core.subgrids().len())
            .field("features", &self.chain.names())
            .finish()
    }
}

/// Configures and constructs a [`Grid`].
///
/// Subgrids are adopted in call order, which is their top-to-bottom
/// render order; header subgrids go before the data subgrid. Features
/// are named in dispatch order and resolved against a
/// [`FeatureDirectory`] at build time.
#[derive(Default)]
pub struct GridBuilder {
    subgrids: Vec<Subgrid>,
    features: Vec<String>,
    properties: PropertyBag,
}

impl GridBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subgrid to the composition.
    pub fn subgrid(mut self, subgrid: Subgrid) -> Self {
        self.subgrids.push(subgrid);
        self
    }

    /// Appends a header subgrid.
    pub fn header_model(self, model: Arc<dyn DataModel>) -> Self {
        self.subgrid(Subgrid::header(model))
    }

    /// Appends the data subgrid.
    pub fn data_model(self, model: Arc<dyn DataModel>) -> Self {
        self.subgrid(Subgrid::data(model))
    }

    /// Appends a summary subgrid.
    pub fn summary_model(self, model: Arc<dyn DataModel>) -> Self {
        self.subgrid(Subgrid::summary(model))
    }

    /// Appends one feature name to the chain declaration.
    pub fn feature(mut self, name: impl Into<String>) -> Self {
        self.features.push(name.into());
        self
    }

    /// Appends several feature names to the chain declaration.
    pub fn features<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets one initial grid property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Merges a bag of initial grid properties.
    pub fn properties(mut self, bag: &PropertyBag) -> Self {
        self.properties.merge(bag);
        self
    }

    /// Builds the grid.
    ///
    /// Fails if any declared feature name is missing from `directory`, or
    /// if the subgrid composition does not contain exactly one data
    /// subgrid. Feature resolution happens first, so a misspelled name
    /// fails the build before anything is constructed. After construction
    /// each feature's [`install`](crate::input::Feature::install) hook
    /// runs once, in chain order.
    pub fn build(self, directory: &FeatureDirectory) -> Result<Grid> {
        let mut chain = directory.build_chain(&self.features)?;
        let subgrids = SubgridSet::new(self.subgrids)?;
        let mut core = GridCore::new(subgrids, self.properties);
        chain.install(&mut core);
        Ok(Grid { core, chain })
    }
}

//! Outbound notifications from the grid to its embedding layer.
//!
//! The layout/render engine registers itself by connecting to these signals.
//! Every mutation the controller performs ends in exactly one [`ChangeScope`]
//! emission, so the engine always knows how much work a change implies;
//! targeted invalidations ride on their own signals.

use quadrille_core::Signal;

use crate::model::SubgridId;

/// How much of the rendered surface a change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeScope {
    /// Appearance only: repaint, no layout work.
    Cosmetic,
    /// Geometry or composition changed (column slots, widths, row heights).
    Shape,
    /// Bulk configuration was applied; re-derive everything.
    State,
}

/// Addresses one cell: subgrid, column data index, row within the subgrid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    /// The subgrid the row lives in.
    pub subgrid: SubgridId,
    /// Column data index.
    pub column: i32,
    /// Row index within the subgrid.
    pub row: usize,
}

impl CellKey {
    /// Creates a cell key.
    pub fn new(subgrid: SubgridId, column: i32, row: usize) -> Self {
        Self {
            subgrid,
            column,
            row,
        }
    }
}

/// The bundle of signals a grid exposes.
pub struct GridSignals {
    /// Emitted after every observable mutation with the scope of the change.
    pub changed: Signal<ChangeScope>,

    /// Emitted when one cell's cached properties must be discarded.
    pub cell_cache_invalidated: Signal<CellKey>,

    /// Emitted when the cached width of the row-number handle column must
    /// be recomputed (row-count magnitude may have changed).
    pub row_number_width_reset: Signal<()>,
}

impl Default for GridSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSignals {
    /// Creates a new set of grid signals.
    pub fn new() -> Self {
        Self {
            changed: Signal::new(),
            cell_cache_invalidated: Signal::new(),
            row_number_width_reset: Signal::new(),
        }
    }

    /// Emits a repaint-only change.
    pub fn emit_cosmetic(&self) {
        self.changed.emit(ChangeScope::Cosmetic);
    }

    /// Emits a geometry/composition change.
    pub fn emit_shape(&self) {
        self.changed.emit(ChangeScope::Shape);
    }

    /// Emits a bulk-state change.
    pub fn emit_state(&self) {
        self.changed.emit(ChangeScope::State);
    }
}

//! Prelude module for Quadrille.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use quadrille::prelude::*;
//! ```
//!
//! This provides access to:
//! - The grid controller (`Grid`, `GridBuilder`, `GridCore`)
//! - Column management (`Column`, `ColumnRegistry`, `Indexing`, `Placement`)
//! - State snapshots (`GridState`)
//! - Change notifications (`ChangeScope`, `CellKey`, `GridSignals`)
//! - The data model surface (`DataModel`, `Subgrid`, `ColumnSchema`)
//! - Input handling (`Feature`, `FeatureDirectory`, event types)
//! - Property values (`Value`, `PropertyBag`) and signals (`Signal`)

// ============================================================================
// Grid Controller
// ============================================================================

pub use crate::error::{GridError, Result};
pub use crate::grid::{
    CellKey, ChangeScope, Column, ColumnRegistry, ColumnSelector, Grid, GridBuilder, GridCore,
    GridProperties, GridSignals, GridState, Indexing, Placement, RowProperties,
};

// ============================================================================
// Data Models and Subgrids
// ============================================================================

pub use crate::model::{
    ColumnSchema, DataModel, Subgrid, SubgridId, SubgridRole, SubgridSet, schema_from_names,
};

// ============================================================================
// Input Handling
// ============================================================================

pub use crate::input::{
    CursorIcon, DispatchResult, Feature, FeatureDirectory, KeyEvent, KeyboardModifiers,
    MouseButton, Point, PointerEvent, WheelEvent,
};

// ============================================================================
// Values and Signals
// ============================================================================

pub use quadrille_core::{PropertyBag, Signal, Value};

#[cfg(test)]
mod tests {
    #![allow(unused)]
    use super::*;

    /// Verify that all prelude exports are accessible and the types exist.
    #[test]
    fn test_prelude_types_exist() {
        let _signal: Signal<i32> = Signal::new();
        let mut bag = PropertyBag::new();
        bag.set("key", Value::from(1));

        let _point = Point::new(0.0, 0.0);
        let _modifiers = KeyboardModifiers::NONE;
        let _placement = Placement::End;
        let _indexing = Indexing::Active;
        let _scope = ChangeScope::Shape;
        let _directory = FeatureDirectory::new();
        let _builder: GridBuilder = Grid::builder();
    }
}

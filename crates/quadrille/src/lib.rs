//! Quadrille - a headless controller for interactive data grids.
//!
//! Quadrille is the controller layer of a tabular-data UI: it owns column
//! composition and ordering, per-grid/per-column/per-cell properties,
//! restorable state snapshots, and input dispatch through a pluggable
//! feature pipeline. It renders nothing. An embedding toolkit draws the
//! cells and translates native input into grid events; quadrille answers
//! what is where, and decides what happens next.
//!
//! # Architecture
//!
//! - [`model`]: the [`DataModel`](model::DataModel) trait the embedder
//!   implements, and the subgrid composition (header / data / summary
//!   bands stacked into one scroll surface)
//! - [`grid`]: the [`Grid`] controller with its column registry, property
//!   cascade, state snapshots and change signals
//! - [`input`]: [`Feature`](input::Feature)s, the feature chain, and the
//!   event types the embedder feeds in
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use quadrille::Value;
//! use quadrille::grid::{ChangeScope, Grid};
//! use quadrille::model::{ColumnSchema, DataModel, schema_from_names};
//!
//! struct Portfolio;
//!
//! impl DataModel for Portfolio {
//!     fn row_count(&self) -> usize {
//!         2
//!     }
//!
//!     fn value(&self, row: usize, column: i32) -> Value {
//!         Value::from(format!("r{row}c{column}"))
//!     }
//!
//!     fn schema(&self) -> Vec<ColumnSchema> {
//!         schema_from_names(["symbol", "quantity", "price"])
//!     }
//! }
//!
//! let mut grid = Grid::with_model(Arc::new(Portfolio))?;
//!
//! grid.signals().changed.connect(|scope: &ChangeScope| {
//!     // Re-render as much as the scope demands.
//!     let _ = scope;
//! });
//!
//! let data = grid.data_subgrid();
//! assert_eq!(grid.cell_value(data, 2, 1).as_str(), Some("r1c2"));
//! assert_eq!(grid.columns().active_count(), 3);
//! # Ok::<(), quadrille::GridError>(())
//! ```

pub mod error;
pub mod grid;
pub mod input;
pub mod model;
pub mod prelude;

pub use error::{GridError, Result};
pub use grid::Grid;
pub use quadrille_core::{ConnectionGuard, ConnectionId, PropertyBag, Signal, Value};

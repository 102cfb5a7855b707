//! Data model contract and subgrid composition.
//!
//! Everything the controller knows about the underlying data comes through
//! this module: the [`DataModel`] trait (rows, values, metadata, schema),
//! [`ColumnSchema`] descriptors, and the stacked [`Subgrid`] composition.

mod schema;
mod subgrid;
mod traits;

pub use schema::{ColumnSchema, schema_from_names};
pub use subgrid::{Subgrid, SubgridId, SubgridRole, SubgridSet};
pub use traits::DataModel;

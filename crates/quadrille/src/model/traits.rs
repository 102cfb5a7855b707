//! The data-model contract consumed by the grid controller.
//!
//! The controller never owns tabular data. Each subgrid wraps an object
//! implementing [`DataModel`], which supplies raw cell values, the column
//! schema (on the data subgrid), and a narrow row-metadata store that backs
//! row and cell property overrides.

use quadrille_core::{PropertyBag, Value};

use super::schema::ColumnSchema;

/// The interface between a row-bearing data source and the grid controller.
///
/// Implementations use interior mutability: the controller holds models
/// behind `Arc` and calls mutators through `&self`, matching the
/// single-threaded, strictly ordered execution model of the controller.
///
/// # Implementation Requirements
///
/// At minimum, implement [`row_count`](DataModel::row_count) and
/// [`value`](DataModel::value). Models backing the data subgrid should also
/// implement [`schema`](DataModel::schema); models that support row/cell
/// property overrides implement the metadata pair.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use parking_lot::RwLock;
/// use quadrille::model::{ColumnSchema, DataModel, schema_from_names};
/// use quadrille::{PropertyBag, Value};
///
/// struct VecModel {
///     rows: Vec<Vec<Value>>,
///     metadata: RwLock<HashMap<usize, PropertyBag>>,
/// }
///
/// impl DataModel for VecModel {
///     fn row_count(&self) -> usize {
///         self.rows.len()
///     }
///
///     fn value(&self, row: usize, column: i32) -> Value {
///         usize::try_from(column)
///             .ok()
///             .and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
///             .cloned()
///             .unwrap_or(Value::Null)
///     }
///
///     fn schema(&self) -> Vec<ColumnSchema> {
///         schema_from_names(["sym", "last"])
///     }
///
///     fn row_metadata(&self, row: usize) -> Option<PropertyBag> {
///         self.metadata.read().get(&row).cloned()
///     }
///
///     fn set_row_metadata(&self, row: usize, metadata: PropertyBag) -> bool {
///         self.metadata.write().insert(row, metadata);
///         true
///     }
/// }
/// ```
pub trait DataModel: Send + Sync {
    /// Number of rows this model currently contributes.
    fn row_count(&self) -> usize;

    /// Raw value of the cell at `(row, column)`.
    ///
    /// `column` is a data index from the schema. Negative indexes address
    /// the grid's synthetic columns; models that do not render them return
    /// [`Value::Null`].
    fn value(&self, row: usize, column: i32) -> Value;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// The column schema. Only consulted on the data subgrid.
    ///
    /// The default is an empty schema (a grid with only synthetic columns).
    fn schema(&self) -> Vec<ColumnSchema> {
        Vec::new()
    }

    /// Returns a copy of the metadata bag stored for `row`, if any.
    ///
    /// Metadata is an opaque per-row bag the controller uses to persist row
    /// properties and cell-own properties. The default is a model without
    /// metadata storage.
    fn row_metadata(&self, _row: usize) -> Option<PropertyBag> {
        None
    }

    /// Stores the metadata bag for `row`, replacing any previous bag.
    ///
    /// Returns `true` if the bag was stored. The store is index-addressed:
    /// implementations may accept rows they have not materialized yet, or
    /// return `false` to refuse the write (the default, read-only).
    fn set_row_metadata(&self, _row: usize, _metadata: PropertyBag) -> bool {
        false
    }

    /// Re-derives computed state after a bulk configuration change.
    ///
    /// Called once at the end of applying a state snapshot, so models can
    /// rebuild sort order, filters or derived analytics in one pass. The
    /// default does nothing.
    fn reindex(&self) {}
}

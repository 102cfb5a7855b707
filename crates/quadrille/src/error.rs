//! Error types for the grid controller.
//!
//! Only configuration mistakes are errors: a misspelled feature name, a
//! property write against a column that does not exist, a subgrid composition
//! without exactly one data subgrid. Lookups that merely find nothing return
//! `Option` instead, and redundant mutations (hiding a hidden column, setting
//! a row height to its current value) are silently accepted.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while configuring or mutating a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A feature name listed in the grid configuration is not registered.
    #[error("unknown feature '{name}' in grid configuration")]
    UnknownFeature { name: String },

    /// A property write addressed a column that does not exist.
    #[error("no column with data index {index}")]
    UnknownColumn { index: i32 },

    /// The subgrid composition does not contain a data subgrid.
    #[error("grid composition has no data subgrid")]
    NoDataSubgrid,

    /// The subgrid composition contains more than one data subgrid.
    #[error("grid composition has {count} data subgrids, expected exactly one")]
    MultipleDataSubgrids { count: usize },
}

impl GridError {
    /// Create an unknown-feature error.
    pub fn unknown_feature(name: impl Into<String>) -> Self {
        Self::UnknownFeature { name: name.into() }
    }

    /// Create an unknown-column error.
    pub fn unknown_column(index: i32) -> Self {
        Self::UnknownColumn { index }
    }
}

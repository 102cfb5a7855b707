//! Column schema descriptors supplied by data models.

use serde::{Deserialize, Serialize};

/// Describes one logical column of a data model.
///
/// The `index` is the column's permanent identity (its data index): it never
/// changes when columns are hidden or reordered, and negative values are
/// reserved for the grid's synthetic columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Permanent data index of the column.
    pub index: i32,
    /// Machine-facing field name.
    pub name: String,
    /// Human-facing header label. Defaults to the name when absent.
    pub header: Option<String>,
}

impl ColumnSchema {
    /// Creates a schema entry with no explicit header.
    pub fn new(index: i32, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            header: None,
        }
    }

    /// Sets the header label.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// The header label to display: the explicit header, else the name.
    pub fn effective_header(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.name)
    }
}

/// Builds a schema from field names, assigning data indexes in order.
///
/// Convenience for models whose columns are just an ordered list of names.
pub fn schema_from_names<I, S>(names: I) -> Vec<ColumnSchema>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| ColumnSchema::new(i as i32, name))
        .collect()
}

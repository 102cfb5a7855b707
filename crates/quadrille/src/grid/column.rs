//! Column objects and their synthetic siblings.

use quadrille_core::PropertyBag;

use crate::model::ColumnSchema;

/// Data index of the synthetic tree (drill-down) column.
pub const TREE_COLUMN_INDEX: i32 = -1;

/// Data index of the synthetic row-number (handle) column.
pub const ROW_NUMBER_COLUMN_INDEX: i32 = -2;

/// Data index recorded for a display slot whose by-name request matched no
/// column. Reserved: never present in the registry, so the slot resolves
/// to nothing.
pub const UNDEFINED_COLUMN_INDEX: i32 = i32::MIN;

/// Default width of a freshly created column, in pixels.
pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;

/// Narrowest a column can be made, in pixels.
pub const MINIMUM_COLUMN_WIDTH: f64 = 5.0;

/// One column of the grid.
///
/// A column's identity is its data index, fixed at creation: schema columns
/// sit at non-negative indexes, the two synthetic columns at
/// [`TREE_COLUMN_INDEX`] and [`ROW_NUMBER_COLUMN_INDEX`]. Everything else
/// (header, property overrides, width) is mutable through the grid.
#[derive(Debug, Clone)]
pub struct Column {
    index: i32,
    name: String,
    header: String,
    properties: PropertyBag,
    width: f64,
    autosizing: bool,
}

impl Column {
    /// Creates a column from a schema entry.
    pub(crate) fn from_schema(schema: &ColumnSchema, default_width: f64) -> Self {
        Self {
            index: schema.index,
            name: schema.name.clone(),
            header: schema.effective_header().to_string(),
            properties: PropertyBag::new(),
            width: default_width,
            autosizing: true,
        }
    }

    /// Permanent data index.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Machine-facing field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-facing header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub(crate) fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    /// True for the two synthetic columns.
    pub fn is_synthetic(&self) -> bool {
        self.index < 0
    }

    /// This column's own property overrides.
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    /// Current width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Clamps and stores a width, turning autosizing off.
    ///
    /// Returns `true` if the stored width changed.
    pub(crate) fn set_width(&mut self, width: f64) -> bool {
        let clamped = width.max(MINIMUM_COLUMN_WIDTH);
        self.autosizing = false;
        if (clamped - self.width).abs() < f64::EPSILON {
            return false;
        }
        self.width = clamped;
        true
    }

    /// Whether the layout engine may recompute this column's width from
    /// content. Cleared by an explicit width assignment.
    pub fn autosizing(&self) -> bool {
        self.autosizing
    }

    pub(crate) fn set_autosizing(&mut self, autosizing: bool) {
        self.autosizing = autosizing;
    }
}

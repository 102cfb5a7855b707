//! End-to-end tests for column management and state snapshots.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use quadrille::grid::{Grid, GridState, Indexing, Placement, keys};
use quadrille::model::{ColumnSchema, DataModel, schema_from_names};
use quadrille::{PropertyBag, Value};

/// A small quotes table with mutable per-row metadata.
struct QuotesModel {
    rows: Vec<[f64; 3]>,
    metadata: RwLock<Vec<Option<PropertyBag>>>,
}

impl QuotesModel {
    fn new() -> Self {
        let rows = vec![
            [101.2, 101.4, 101.3],
            [45.0, 45.1, 45.0],
            [7.61, 7.64, 7.62],
            [220.0, 220.6, 220.1],
        ];
        let len = rows.len();
        Self {
            rows,
            metadata: RwLock::new(vec![None; len]),
        }
    }
}

impl DataModel for QuotesModel {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn value(&self, row: usize, column: i32) -> Value {
        match (self.rows.get(row), column) {
            (Some(_), 0) => Value::from(format!("SYM{row}")),
            (Some(fields), 1..=3) => Value::from(fields[(column - 1) as usize]),
            _ => Value::Null,
        }
    }

    fn schema(&self) -> Vec<ColumnSchema> {
        schema_from_names(["symbol", "bid", "ask", "last"])
    }

    fn row_metadata(&self, row: usize) -> Option<PropertyBag> {
        self.metadata.read().get(row).cloned().flatten()
    }

    fn set_row_metadata(&self, row: usize, metadata: PropertyBag) -> bool {
        match self.metadata.write().get_mut(row) {
            Some(slot) => {
                *slot = Some(metadata);
                true
            }
            None => false,
        }
    }
}

fn quotes_grid() -> Grid {
    Grid::with_model(Arc::new(QuotesModel::new())).expect("grid should build")
}

fn assert_no_duplicates(grid: &Grid) {
    let order = grid.columns().active_order();
    let unique: HashSet<i32> = order.iter().copied().collect();
    assert_eq!(unique.len(), order.len(), "duplicate slots in {order:?}");
}

#[test]
fn test_show_hide_sequences_never_duplicate() {
    let mut grid = quotes_grid();

    grid.hide_columns(Indexing::All, vec![1, 3]);
    assert_no_duplicates(&grid);

    grid.show_columns(Indexing::All, 3, Placement::Before(0), false);
    assert_no_duplicates(&grid);
    assert_eq!(grid.columns().active_order(), &[3, 0, 2]);

    // Showing an already visible column moves it instead of doubling it.
    grid.show_columns(Indexing::All, 2, Placement::Before(0), false);
    assert_no_duplicates(&grid);
    assert_eq!(grid.columns().active_order(), &[2, 3, 0]);

    grid.show_columns(Indexing::All, vec![0, 1], Placement::End, false);
    assert_no_duplicates(&grid);
    assert_eq!(grid.columns().active_order(), &[2, 3, 0, 1]);
}

#[test]
fn test_hidden_column_returns_at_the_end() {
    let mut grid = quotes_grid();

    grid.hide_columns(Indexing::All, 0);
    assert_eq!(grid.columns().active_order(), &[1, 2, 3]);

    grid.show_columns(Indexing::All, 0, Placement::End, false);
    assert_eq!(grid.columns().active_order(), &[1, 2, 3, 0]);
}

#[test]
fn test_active_indexing_addresses_call_time_positions() {
    let mut grid = quotes_grid();

    // Remove the columns currently displayed at positions 0 and 2.
    grid.hide_columns(Indexing::Active, vec![0, 2]);
    assert_eq!(grid.columns().active_order(), &[1, 3]);
}

#[test]
fn test_order_persisted_under_column_indexes() {
    let mut grid = quotes_grid();

    grid.hide_columns(Indexing::All, 2);
    assert_eq!(
        grid.properties().get(keys::COLUMN_INDEXES),
        Some(&Value::from(vec![0, 1, 3]))
    );
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut grid = quotes_grid();
    grid.hide_columns(Indexing::All, 1);
    grid.set_grid_property("font", "monospace");
    let mut bag = PropertyBag::new();
    bag.set("halign", "right");
    grid.set_column_properties(3, &bag).expect("column 3 exists");

    let exported = grid.get_state();
    let json = serde_json::to_string(&exported).expect("state serializes");

    // A fresh grid over the same model adopts the snapshot wholesale.
    let parsed: GridState = serde_json::from_str(&json).expect("state parses");
    let mut restored = quotes_grid();
    restored.set_state(&parsed);

    assert_eq!(restored.columns().active_order(), &[0, 2, 3]);
    assert_eq!(restored.properties().get_str("font"), Some("monospace"));
    assert_eq!(
        restored.core().column_properties(3).and_then(|b| b.get_str("halign")),
        Some("right")
    );
    assert_eq!(restored.get_state(), exported);
}

#[test]
fn test_snapshot_application_is_idempotent() {
    let mut grid = quotes_grid();
    grid.hide_columns(Indexing::All, vec![0, 2]);
    grid.set_grid_property("theme", "dark");

    let first = grid.get_state();
    grid.set_state(&first);
    let second = grid.get_state();
    grid.set_state(&second);

    assert_eq!(first, second);
    assert_eq!(grid.get_state(), first);
}

#[test]
fn test_selections_do_not_round_trip() {
    let mut grid = quotes_grid();
    grid.set_grid_property("row_selection", vec![0, 2]);
    grid.set_grid_property("cell_selection", vec![1]);
    grid.set_grid_property("header_selection", vec![1]);
    grid.set_grid_property("font", "monospace");

    let state = grid.get_state();
    assert!(!state.properties.contains("row_selection"));
    assert!(!state.properties.contains("cell_selection"));
    assert!(!state.properties.contains("header_selection"));
    assert_eq!(state.properties.get_str("font"), Some("monospace"));
}

#[test]
fn test_row_heights_and_cell_overrides_live_in_row_metadata() {
    let mut grid = quotes_grid();
    let data = grid.data_subgrid();

    grid.set_row_height(data, 2, 40.0);
    grid.set_cell_property(data, 1, 2, "color", "red")
        .expect("column 1 exists");

    assert_eq!(grid.row_height(data, 2), 40);
    assert_eq!(
        grid.cell_property(data, 1, 2, "color"),
        Some(Value::from("red"))
    );

    // Untouched rows keep the grid default.
    assert_eq!(grid.row_height(data, 0), 24);
}

#[test]
fn test_cell_values_follow_data_indexes_not_positions() {
    let mut grid = quotes_grid();
    let data = grid.data_subgrid();

    let before = grid.cell_value(data, 1, 0);
    grid.set_column_order(&[3, 2, 1, 0]);

    // Reordering never changes addressing: dataIndex 1 is still the bid.
    assert_eq!(grid.cell_value(data, 1, 0), before);
    assert_eq!(grid.columns().active_column(3).map(|c| c.index()), Some(0));
}

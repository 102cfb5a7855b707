//! End-to-end tests for the input feature pipeline.

use std::sync::Arc;

use parking_lot::Mutex;

use quadrille::Value;
use quadrille::grid::{CellKey, ChangeScope, Grid, GridCore};
use quadrille::input::{
    CursorIcon, DispatchResult, Feature, FeatureDirectory, KeyEvent, KeyboardModifiers, MouseButton,
    Point, PointerEvent,
};
use quadrille::model::{ColumnSchema, DataModel, schema_from_names};

struct TableModel;

impl DataModel for TableModel {
    fn row_count(&self) -> usize {
        5
    }

    fn value(&self, row: usize, column: i32) -> Value {
        Value::from(format!("r{row}c{column}"))
    }

    fn schema(&self) -> Vec<ColumnSchema> {
        schema_from_names(["name", "qty", "price"])
    }
}

const SELECTION_KEY: &str = "row_selection";

/// Tracks selected rows under the grid's `row_selection` property.
///
/// Plain click replaces the selection, ctrl-click extends it, Escape
/// clears it.
struct RowSelection;

impl RowSelection {
    fn selected(grid: &GridCore) -> Vec<i64> {
        grid.properties()
            .get(SELECTION_KEY)
            .and_then(Value::as_list)
            .map(|rows| rows.iter().filter_map(Value::as_int).collect())
            .unwrap_or_default()
    }
}

impl Feature for RowSelection {
    fn name(&self) -> &'static str {
        "row-selection"
    }

    fn install(&mut self, grid: &mut GridCore) {
        grid.set_grid_property(SELECTION_KEY, Vec::<i64>::new());
    }

    fn primary_click(&mut self, grid: &mut GridCore, event: &mut PointerEvent) -> bool {
        let Some(cell) = event.cell else { return false };
        let row = cell.row as i64;
        let selection = if event.modifiers.control {
            let mut rows = Self::selected(grid);
            if !rows.contains(&row) {
                rows.push(row);
            }
            rows
        } else {
            vec![row]
        };
        grid.set_grid_property(SELECTION_KEY, selection);
        true
    }

    fn key_down(&mut self, grid: &mut GridCore, event: &mut KeyEvent) -> bool {
        if event.key != "Escape" {
            return false;
        }
        grid.set_grid_property(SELECTION_KEY, Vec::<i64>::new());
        true
    }
}

/// Arms a resize cursor near the first column's right edge (x = 100) and
/// resizes that column on drag.
struct BoundaryResize {
    armed: bool,
}

impl BoundaryResize {
    fn new() -> Self {
        Self { armed: false }
    }
}

impl Feature for BoundaryResize {
    fn name(&self) -> &'static str {
        "boundary-resize"
    }

    fn pointer_move(&mut self, _grid: &mut GridCore, event: &mut PointerEvent) -> bool {
        self.armed = (event.position.x - 100.0).abs() <= 3.0;
        false
    }

    fn pointer_drag(&mut self, grid: &mut GridCore, event: &mut PointerEvent) -> bool {
        if !self.armed {
            return false;
        }
        grid.set_column_width(0, event.position.x).is_ok()
    }

    fn cursor(&self, _grid: &GridCore) -> Option<CursorIcon> {
        self.armed.then_some(CursorIcon::ColResize)
    }
}

fn directory() -> FeatureDirectory {
    let mut directory = FeatureDirectory::new();
    directory.register("row-selection", || Box::new(RowSelection));
    directory.register("boundary-resize", || Box::new(BoundaryResize::new()));
    directory
}

fn interactive_grid() -> Grid {
    Grid::builder()
        .data_model(Arc::new(TableModel))
        .features(["row-selection", "boundary-resize"])
        .build(&directory())
        .expect("grid should build")
}

fn click_at_row(grid: &Grid, row: usize) -> PointerEvent {
    let cell = CellKey::new(grid.data_subgrid(), 0, row);
    PointerEvent::new(Point::new(10.0, 10.0 + row as f64 * 24.0))
        .with_cell(cell)
        .with_button(MouseButton::Left)
}

#[test]
fn test_install_seeds_selection_property() {
    let grid = interactive_grid();
    assert_eq!(
        grid.properties().get(SELECTION_KEY),
        Some(&Value::from(Vec::<i64>::new()))
    );
    assert_eq!(grid.feature_names(), ["row-selection", "boundary-resize"]);
}

#[test]
fn test_click_selects_and_ctrl_click_extends() {
    let mut grid = interactive_grid();

    let result = grid.handle_primary_click(&mut click_at_row(&grid, 2));
    assert_eq!(result, DispatchResult::Consumed);
    assert_eq!(RowSelection::selected(grid.core()), vec![2]);

    grid.handle_primary_click(&mut click_at_row(&grid, 4));
    assert_eq!(RowSelection::selected(grid.core()), vec![4]);

    let mut extend = click_at_row(&grid, 1).with_modifiers(KeyboardModifiers::CTRL);
    grid.handle_primary_click(&mut extend);
    assert_eq!(RowSelection::selected(grid.core()), vec![4, 1]);
}

#[test]
fn test_escape_clears_selection() {
    let mut grid = interactive_grid();
    grid.handle_primary_click(&mut click_at_row(&grid, 3));

    let result = grid.handle_key_down(&mut KeyEvent::new("Escape"));
    assert_eq!(result, DispatchResult::Consumed);
    assert!(RowSelection::selected(grid.core()).is_empty());

    // Other keys pass through the whole chain untouched.
    let result = grid.handle_key_down(&mut KeyEvent::new("ArrowDown"));
    assert_eq!(result, DispatchResult::Ignored);
}

#[test]
fn test_click_in_dead_space_is_ignored() {
    let mut grid = interactive_grid();
    grid.handle_primary_click(&mut click_at_row(&grid, 2));

    // No cell under the pointer: every feature declines.
    let mut event = PointerEvent::new(Point::new(900.0, 900.0)).with_button(MouseButton::Left);
    let result = grid.handle_primary_click(&mut event);

    assert_eq!(result, DispatchResult::Ignored);
    assert_eq!(RowSelection::selected(grid.core()), vec![2]);
}

#[test]
fn test_cursor_arms_near_boundary_and_withdraws() {
    let mut grid = interactive_grid();
    assert_eq!(grid.cursor(), CursorIcon::Default);

    grid.handle_pointer_move(&mut PointerEvent::new(Point::new(101.0, 40.0)));
    assert_eq!(grid.cursor(), CursorIcon::ColResize);

    grid.handle_pointer_move(&mut PointerEvent::new(Point::new(50.0, 40.0)));
    assert_eq!(grid.cursor(), CursorIcon::Default);
}

#[test]
fn test_armed_drag_resizes_column() {
    let mut grid = interactive_grid();
    let scopes = Arc::new(Mutex::new(Vec::new()));
    let scopes_clone = scopes.clone();
    grid.signals().changed.connect(move |&scope| {
        scopes_clone.lock().push(scope);
    });

    grid.handle_pointer_move(&mut PointerEvent::new(Point::new(99.0, 40.0)));
    let result = grid.handle_pointer_drag(&mut PointerEvent::new(Point::new(140.0, 40.0)));

    assert_eq!(result, DispatchResult::Consumed);
    assert_eq!(
        grid.columns().column(0).map(|c| c.width()),
        Some(140.0)
    );
    assert!(scopes.lock().contains(&ChangeScope::Shape));
}

#[test]
fn test_unarmed_drag_falls_through() {
    let mut grid = interactive_grid();

    let result = grid.handle_pointer_drag(&mut PointerEvent::new(Point::new(140.0, 40.0)));
    assert_eq!(result, DispatchResult::Ignored);
    assert_eq!(grid.columns().column(0).map(|c| c.width()), Some(100.0));
}

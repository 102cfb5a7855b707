//! Headless controller session over a small quotes table: rearrange
//! columns, resize one, and print the exported state as JSON.
//!
//! Run with: cargo run -p quadrille --example quotes
//!
//! Set `RUST_LOG=quadrille=trace` to watch the controller's tracing output.

use std::sync::Arc;

use quadrille::Value;
use quadrille::grid::{Grid, Indexing, Placement};
use quadrille::model::{ColumnSchema, DataModel, schema_from_names};

const ROWS: [[f64; 3]; 4] = [
    [101.2, 101.4, 101.3],
    [45.0, 45.1, 45.0],
    [7.61, 7.64, 7.62],
    [220.0, 220.6, 220.1],
];

/// A fixed four-row quotes table.
struct Quotes;

impl DataModel for Quotes {
    fn row_count(&self) -> usize {
        ROWS.len()
    }

    fn value(&self, row: usize, column: i32) -> Value {
        match (ROWS.get(row), column) {
            (Some(_), 0) => Value::from(format!("SYM{row}")),
            (Some(fields), 1..=3) => Value::from(fields[(column - 1) as usize]),
            _ => Value::Null,
        }
    }

    fn schema(&self) -> Vec<ColumnSchema> {
        schema_from_names(["symbol", "bid", "ask", "last"])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quadrille=debug")),
        )
        .init();

    let mut grid = Grid::with_model(Arc::new(Quotes))?;
    grid.signals()
        .changed
        .connect(|scope| println!("changed: {scope:?}"));

    // Hide the bid column, then bring it back ahead of the symbol.
    grid.hide_columns(Indexing::All, 1);
    grid.show_columns(Indexing::All, 1, Placement::Before(0), false);
    println!("active order: {:?}", grid.columns().active_order());

    // Widen the symbol column and tag a grid-wide property.
    grid.set_column_width(0, 140.0)?;
    grid.set_grid_property("font", "monospace");

    println!("{}", serde_json::to_string_pretty(&grid.get_state())?);
    Ok(())
}

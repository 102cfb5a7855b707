//! Logging facilities for Quadrille.
//!
//! Quadrille uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Registry mutations and state imports log at `debug`, input dispatch and
//! signal emission at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=quadrille::columns=debug`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "quadrille_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "quadrille_core::signal";
    /// Column registry and visibility/order operations.
    pub const COLUMNS: &str = "quadrille::columns";
    /// Property resolution and mutation.
    pub const PROPERTIES: &str = "quadrille::properties";
    /// State snapshot import/export.
    pub const STATE: &str = "quadrille::state";
    /// Input event dispatch through the feature chain.
    pub const INPUT: &str = "quadrille::input";
}

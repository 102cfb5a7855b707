//! Input handling: features, the feature chain, and event types.
//!
//! All interactive behavior lives in pluggable [`Feature`]s arranged in an
//! ordered pipeline, the [`FeatureChain`]. The embedding toolkit feeds
//! events to the [`Grid`](crate::grid::Grid) dispatch entry points; each
//! event visits the chain head to tail until one feature consumes it.
//!
//! # Core Types
//!
//! - `Feature`: one unit of interactive behavior (selection, resizing, ...)
//! - `FeatureChain`: the ordered pipeline events travel through
//! - `FeatureDirectory`: registered feature names to factories
//! - `PointerEvent`, `WheelEvent`, `KeyEvent`: what the embedder feeds in
//! - `DispatchResult`: whether a feature consumed the event
//!
//! # Wiring
//!
//! ```text
//! embedder event ──> Grid::handle_* ──> FeatureChain ──> Feature, Feature, ...
//!                                            │
//!                                            └──> cursor poll ──> Grid::cursor()
//! ```
//!
//! A grid's chain is declared as a list of names resolved through a
//! [`FeatureDirectory`] when the grid is built; an unknown name fails the
//! build before any event is dispatched.

mod chain;
mod directory;
mod events;
mod feature;

pub use chain::{DispatchResult, FeatureChain};
pub use cursor_icon::CursorIcon;
pub use directory::{FeatureDirectory, FeatureFactory};
pub use events::{KeyEvent, KeyboardModifiers, MouseButton, Point, PointerEvent, WheelEvent};
pub use feature::Feature;

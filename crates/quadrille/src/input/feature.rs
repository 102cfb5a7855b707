//! The input feature abstraction.
//!
//! A feature is one unit of interactive behavior: column moving, row
//! selection, cell editing and so on. Features are linked into a
//! [`FeatureChain`](super::FeatureChain) and visited head to tail per
//! event category until one consumes the event.

use cursor_icon::CursorIcon;

use crate::grid::GridCore;

use super::events::{KeyEvent, PointerEvent, WheelEvent};

/// One unit of interactive grid behavior.
///
/// Every handler receives the grid and the event, and returns `true` to
/// consume the event and stop the chain. The defaults decline everything,
/// so a feature implements only the categories it cares about.
///
/// # Example
///
/// ```
/// use quadrille::input::{Feature, PointerEvent};
/// use quadrille::grid::GridCore;
///
/// /// Collapses or expands tree rows on click.
/// struct TreeToggle;
///
/// impl Feature for TreeToggle {
///     fn name(&self) -> &'static str {
///         "tree-toggle"
///     }
///
///     fn pointer_down(&mut self, grid: &mut GridCore, event: &mut PointerEvent) -> bool {
///         let Some(cell) = event.cell else { return false };
///         if cell.column != quadrille::grid::TREE_COLUMN_INDEX {
///             return false;
///         }
///         // ... toggle the row at cell.row ...
///         let _ = grid;
///         true
///     }
/// }
/// ```
pub trait Feature {
    /// The feature's registered name, used for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Called once when the chain is attached to a grid, in chain order.
    ///
    /// A feature can seed grid properties or connect to grid signals here,
    /// before any event is dispatched.
    fn install(&mut self, _grid: &mut GridCore) {}

    // Optional handlers with default implementations. Return `true` to
    // consume the event.

    /// Pointer moved with no button held.
    fn pointer_move(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Pointer button pressed.
    fn pointer_down(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Pointer button released.
    fn pointer_up(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Pointer moved with a button held.
    fn pointer_drag(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Primary-button click (press and release on the same cell).
    fn primary_click(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Secondary-button click, conventionally a context menu request.
    fn context_click(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Primary-button double click.
    fn double_click(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Pointer left the grid area.
    fn pointer_exit(&mut self, _grid: &mut GridCore, _event: &mut PointerEvent) -> bool {
        false
    }

    /// Scroll wheel turned.
    fn wheel(&mut self, _grid: &mut GridCore, _event: &mut WheelEvent) -> bool {
        false
    }

    /// Key pressed.
    fn key_down(&mut self, _grid: &mut GridCore, _event: &mut KeyEvent) -> bool {
        false
    }

    /// Key released.
    fn key_up(&mut self, _grid: &mut GridCore, _event: &mut KeyEvent) -> bool {
        false
    }

    /// The pointer cursor this feature wants right now, if any.
    ///
    /// Polled head to tail after every dispatch; the first `Some` wins.
    fn cursor(&self, _grid: &GridCore) -> Option<CursorIcon> {
        None
    }
}

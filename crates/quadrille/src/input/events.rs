//! Input event types delivered to the feature chain.
//!
//! The grid is headless: the embedding toolkit translates its native input
//! into these types and feeds them to the [`Grid`] dispatch entry points.
//! Positions are in grid-local pixels; where the embedder has already hit
//! tested the position, the event also carries the [`CellKey`] under the
//! pointer.
//!
//! [`Grid`]: crate::grid::Grid
//! [`CellKey`]: crate::grid::CellKey

use crate::grid::CellKey;

/// A position in grid-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset from the grid's left edge.
    pub x: f64,
    /// Vertical offset from the grid's top edge.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Control + Shift modifiers.
    pub const CTRL_SHIFT: Self = Self {
        shift: true,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// A pointer event: press, release, move, drag, click or exit.
///
/// One type serves every pointer category; which category fired is carried
/// by the dispatch entry point, not the event. `cell` is the embedder's
/// hit-test result and is `None` over dead space such as the area past the
/// last column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in grid-local coordinates.
    pub position: Point,
    /// The cell under the pointer, if any.
    pub cell: Option<CellKey>,
    /// The button involved, for press/release/click categories.
    pub button: Option<MouseButton>,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerEvent {
    /// Create a pointer event at a position, with no cell, button or
    /// modifiers.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            cell: None,
            button: None,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// Attach the hit-tested cell.
    pub fn with_cell(mut self, cell: CellKey) -> Self {
        self.cell = Some(cell);
        self
    }

    /// Attach the button involved.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Attach held modifiers.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Mouse wheel (scroll) event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Position in grid-local coordinates.
    pub position: Point,
    /// Horizontal scroll delta (positive = right).
    pub delta_x: f64,
    /// Vertical scroll delta (positive = up/away from user).
    pub delta_y: f64,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl WheelEvent {
    /// Create a new wheel event.
    pub fn new(position: Point, delta_x: f64, delta_y: f64) -> Self {
        Self {
            position,
            delta_x,
            delta_y,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// Attach held modifiers.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Keyboard event.
///
/// Key names follow the web `KeyboardEvent.key` convention: printable keys
/// carry their character (`"a"`, `"5"`), others their name (`"ArrowDown"`,
/// `"Enter"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key involved.
    pub key: String,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub repeat: bool,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: KeyboardModifiers::NONE,
            repeat: false,
        }
    }

    /// Attach held modifiers.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark the event as a key repeat.
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

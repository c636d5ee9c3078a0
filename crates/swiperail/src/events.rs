//! Input events consumed by swipe rows.
//!
//! The host translates its windowing layer's pointer input into these
//! events and feeds them to the row under the pointer. Coordinates are
//! row-local (origin at the row's top-left corner).

use crate::types::Point;

/// Mouse buttons relevant to row interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left). The only button rows react to.
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Common data for all row events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in row-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in row-local coordinates.
    pub local_pos: Point,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in row-local coordinates.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

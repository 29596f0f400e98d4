use crate::Point;

/// Pointer events delivered by the host window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released, wherever the pointer is.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// The host lost the pointer (window blur, pointer grab stolen).
    PointerCancelled,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl Event {
    /// Pointer position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::MousePressed { position, .. }
            | Event::MouseReleased { position, .. }
            | Event::MouseMoved { position } => Some(*position),
            Event::PointerCancelled => None,
        }
    }
}

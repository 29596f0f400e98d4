//! tint_ui - pointer plumbing for the tint color picker
//!
//! This crate provides the host-facing pieces of the picker: pointer events,
//! geometry, callbacks, global pointer capture and the continuous drag
//! controller used by the saturation/brightness surface and the hue and
//! opacity tracks.

mod callback;
mod capture;
mod drag;
mod event;
mod layout;

pub use callback::Callback;
pub use capture::{CaptureGuard, PointerCapture};
pub use drag::{DragController, DragId, DragMapping, DragSession, DragValue, HUE_MAX};
pub use event::{Event, MouseButton};
pub use layout::{Bounds, Point};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::Callback;
    pub use crate::capture::PointerCapture;
    pub use crate::drag::{DragController, DragId, DragMapping, DragValue, HUE_MAX};
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{Bounds, Point};
}

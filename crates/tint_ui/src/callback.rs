//! Callback abstraction for drag and widget event handlers
//!
//! Instead of writing `Option<Box<dyn Fn(T) -> M>>` in every controller,
//! handlers are stored as `Callback<T, M>`: a pure mapping from an emitted
//! value to an application message. Callbacks never own mutable state; the
//! message is applied by whoever receives it.
//!
//! # Examples
//!
//! ```
//! use tint_ui::Callback;
//!
//! #[derive(Debug, PartialEq)]
//! enum Message {
//!     Opacity(f64),
//! }
//!
//! let callback = Callback::new(Message::Opacity);
//! assert_eq!(callback.call(42.0), Some(Message::Opacity(42.0)));
//! assert_eq!(Callback::<f64, Message>::none().call(1.0), None);
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional event handler.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (e.g., a drag value)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

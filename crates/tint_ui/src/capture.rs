//! Global pointer capture.
//!
//! While a drag session is running, move and release events must reach the
//! controller that owns the session even when the pointer has left its
//! region. A [`PointerCapture`] records which controller currently owns the
//! pointer; the host consults it when routing events. Ownership is held by a
//! [`CaptureGuard`] and released when the guard is dropped, so every way a
//! session can end (release, cancellation, controller drop) detaches it.

use std::cell::Cell;
use std::rc::Rc;

use crate::drag::DragId;

/// Shared record of which drag controller owns the pointer.
///
/// Cloning yields another handle to the same capture slot.
#[derive(Debug, Clone, Default)]
pub struct PointerCapture {
    owner: Rc<Cell<Option<DragId>>>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The controller currently holding the capture.
    pub fn owner(&self) -> Option<DragId> {
        self.owner.get()
    }

    /// Check whether any controller holds the capture.
    pub fn is_captured(&self) -> bool {
        self.owner.get().is_some()
    }

    /// Take the capture for `id`.
    ///
    /// Returns `None` while another guard is alive.
    pub fn acquire(&self, id: DragId) -> Option<CaptureGuard> {
        if let Some(current) = self.owner.get() {
            log::debug!("PointerCapture: {:?} refused, held by {:?}", id, current);
            return None;
        }
        self.owner.set(Some(id));
        log::trace!("PointerCapture: acquired by {:?}", id);
        Some(CaptureGuard {
            owner: Rc::clone(&self.owner),
            id,
        })
    }
}

/// Proof of pointer ownership; releases the capture on drop.
#[derive(Debug)]
pub struct CaptureGuard {
    owner: Rc<Cell<Option<DragId>>>,
    id: DragId,
}

impl CaptureGuard {
    pub fn id(&self) -> DragId {
        self.id
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if self.owner.get() == Some(self.id) {
            self.owner.set(None);
            log::trace!("PointerCapture: released by {:?}", self.id);
        }
    }
}

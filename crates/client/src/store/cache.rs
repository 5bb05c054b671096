//! The remembered committee fetch.

use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::{BoxFuture, Shared};
use huxley_core::committee::Committee;

use super::error::StoreResult;

/// A pending or resolved committee list. Cloning shares the same fetch.
pub type CommitteeHandle = Shared<BoxFuture<'static, StoreResult<Arc<[Committee]>>>>;

/// Holds at most one committee fetch until [`reset`](Self::reset).
///
/// The handle is remembered as soon as the fetch starts, so callers that
/// arrive while it is in flight wait on the same request.
#[derive(Default)]
pub struct CommitteeCache {
    slot: Mutex<Option<CommitteeHandle>>,
}

impl CommitteeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the remembered handle, calling `start` only if there is none.
    pub fn get_or_start<F>(&self, start: F) -> CommitteeHandle
    where
        F: FnOnce() -> CommitteeHandle,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert_with(start).clone()
    }

    /// Returns true once a fetch has been started.
    pub fn is_started(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Forgets the remembered fetch. Returns true if there was one.
    ///
    /// Callers already holding a handle keep it; the next request starts a
    /// new fetch.
    pub fn reset(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }
}

impl std::fmt::Debug for CommitteeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitteeCache")
            .field("started", &self.is_started())
            .finish()
    }
}

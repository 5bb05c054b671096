//! Read-through store for the conference committee list.
//!
//! The list does not change during a session, so it is fetched once and
//! every caller shares the result. Filtered views are derived per call.

mod cache;
mod dispatch;
mod error;

use std::sync::Arc;

use futures_util::FutureExt;
use huxley_core::committee::{filter_special, Committee, StoreAction};
use tracing::{debug, warn};

use crate::api::CommitteeSource;

pub use cache::{CommitteeCache, CommitteeHandle};
pub use dispatch::{ActionHandler, InvalidateOn, NoopActionHandler};
pub use error::{StoreError, StoreResult};

/// Single-flight access to the committee list.
pub struct CommitteeStore {
    source: Arc<dyn CommitteeSource>,
    cache: Arc<CommitteeCache>,
    handler: Box<dyn ActionHandler>,
}

impl CommitteeStore {
    /// Creates a store over `source`, remembering fetches in `cache`.
    ///
    /// Actions are ignored until a handler is supplied with
    /// [`with_handler`](Self::with_handler).
    pub fn new(source: Arc<dyn CommitteeSource>, cache: Arc<CommitteeCache>) -> Self {
        Self {
            source,
            cache,
            handler: Box::new(NoopActionHandler),
        }
    }

    /// Replaces the action handler.
    pub fn with_handler(mut self, handler: impl ActionHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    /// The cache this store reads through.
    pub fn cache(&self) -> &Arc<CommitteeCache> {
        &self.cache
    }

    /// Returns the committee list, starting the fetch on first use.
    ///
    /// The fetch runs on its own task as soon as it starts, whether or not
    /// the handle is awaited. Every later call returns a clone of the same
    /// handle, including a failed one, until the cache is reset.
    ///
    /// # Panics
    ///
    /// Panics if the first call is made outside a Tokio runtime.
    pub fn committees(&self) -> CommitteeHandle {
        self.cache.get_or_start(|| {
            debug!("Fetching committees");
            let source = Arc::clone(&self.source);
            let task = tokio::spawn(async move { source.fetch_committees().await });

            async move {
                match task.await {
                    Ok(Ok(committees)) => {
                        debug!(count = committees.len(), "Committees fetched");
                        Ok(Arc::from(committees))
                    }
                    Ok(Err(e)) => {
                        warn!(error = %e, "Failed to fetch committees");
                        Err(StoreError::Fetch(e.to_string()))
                    }
                    Err(e) => Err(StoreError::TaskFailed(e.to_string())),
                }
            }
            .boxed()
            .shared()
        })
    }

    /// Like [`committees`](Self::committees), also running `callback` with
    /// the list once it resolves successfully.
    pub fn committees_then<F>(&self, callback: F) -> CommitteeHandle
    where
        F: FnOnce(Arc<[Committee]>) + Send + 'static,
    {
        let handle = self.committees();
        then(handle.clone(), callback);
        handle
    }

    /// The special committees, in list order.
    ///
    /// Filtering happens once per call on a copy; the cached list is not
    /// touched.
    pub fn special_committees(&self) -> CommitteeHandle {
        let committees = self.committees();
        async move { committees.await.map(|all| Arc::from(filter_special(&all))) }
            .boxed()
            .shared()
    }

    /// Like [`special_committees`](Self::special_committees), also running
    /// `callback` with the filtered list once it resolves successfully.
    pub fn special_committees_then<F>(&self, callback: F) -> CommitteeHandle
    where
        F: FnOnce(Arc<[Committee]>) + Send + 'static,
    {
        let handle = self.special_committees();
        then(handle.clone(), callback);
        handle
    }

    /// Passes an action to the store's handler.
    pub fn dispatch(&self, action: &StoreAction) {
        self.handler.on_action(action, &self.cache);
    }
}

fn then<F>(handle: CommitteeHandle, callback: F)
where
    F: FnOnce(Arc<[Committee]>) + Send + 'static,
{
    tokio::spawn(async move {
        if let Ok(committees) = handle.await {
            callback(committees);
        }
    });
}

impl std::fmt::Debug for CommitteeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitteeStore")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

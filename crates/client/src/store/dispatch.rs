//! Action hook for the committee store.

use huxley_core::committee::StoreAction;

use super::cache::CommitteeCache;

/// Reacts to dispatched actions on behalf of a store.
///
/// The default does nothing; stores that need action-driven invalidation
/// are given a handler that resets `cache`.
pub trait ActionHandler: Send + Sync {
    fn on_action(&self, _action: &StoreAction, _cache: &CommitteeCache) {}
}

/// Ignores every action.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActionHandler;

impl ActionHandler for NoopActionHandler {}

/// Resets the cache whenever `action` is dispatched.
#[derive(Debug, Clone)]
pub struct InvalidateOn(pub StoreAction);

impl ActionHandler for InvalidateOn {
    fn on_action(&self, action: &StoreAction, cache: &CommitteeCache) {
        if *action == self.0 && cache.reset() {
            tracing::debug!(action = action.action_type(), "Committee cache invalidated");
        }
    }
}

//! Keeps read-only display regions in step with confirmed saves.

use std::sync::Arc;

use huxley_core::welcome::{DisplayBoard, DisplaySwap, FormEvent};
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

/// Applies every confirmed save to `board` until the event channel closes.
///
/// `render` is called once per swap, in board order, after the board has
/// been updated. Other form events are ignored.
pub async fn run_display_updates<F>(
    board: Arc<RwLock<DisplayBoard>>,
    mut events: broadcast::Receiver<FormEvent>,
    mut render: F,
) where
    F: FnMut(&DisplaySwap) + Send,
{
    loop {
        match events.recv().await {
            Ok(FormEvent::SaveConfirmed { record }) => {
                let swaps = board.write().await.apply(&record);
                debug!(swaps = swaps.len(), "Applied confirmed welcome values");
                swaps.iter().for_each(&mut render);
            }
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Display updates lagged behind form events");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

//! Deferred classification.
//!
//! Classify-and-save actions go through a simulated "analysis delay" before
//! the state mutation lands, the point where a production build would call
//! an external inference service. The delay is a real cancellable task, not
//! a bare timer: if the requesting view is torn down before the delay
//! elapses, the pending mutation is discarded instead of being applied to a
//! stale context. Dropping the [`AnalysisHandle`] cancels, so teardown
//! safety is structural rather than convention.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::classifier::classify;
use crate::state::AffectiveStateStore;
use crate::types::EmotionLabel;

/// Handle to a pending deferred classification.
///
/// Keep it alive for the mutation to land; drop or [`cancel`](Self::cancel)
/// it to discard the pending update.
pub struct AnalysisHandle {
    cancel_tx: oneshot::Sender<()>,
    join: JoinHandle<Option<EmotionLabel>>,
}

impl AnalysisHandle {
    /// Cancel the pending classification. The store is left untouched.
    pub fn cancel(self) {
        // Receiver side treats both an explicit signal and a dropped sender
        // as cancellation; ignore the send result.
        let _ = self.cancel_tx.send(());
    }

    /// Wait for the task to finish.
    ///
    /// Resolves to the applied label, or `None` if the task was cancelled.
    pub async fn finished(self) -> Option<EmotionLabel> {
        let Self { cancel_tx, join } = self;
        let label = join.await.ok().flatten();
        // Held until the task resolved so an in-flight await does not read
        // as a teardown.
        drop(cancel_tx);
        label
    }
}

/// Classify `text` after `delay` and apply the result to `store`.
///
/// Runs on the ambient tokio runtime. The returned handle is the
/// cancellation token: dropping it before the delay elapses discards the
/// pending state mutation.
pub fn classify_after_delay(
    store: Arc<AffectiveStateStore>,
    text: String,
    delay: Duration,
) -> AnalysisHandle {
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

    let join = tokio::spawn(async move {
        tokio::select! {
            // Fires on explicit cancel and on handle drop alike.
            _ = &mut cancel_rx => {
                tracing::debug!("Deferred classification cancelled; discarding pending update");
                None
            }
            _ = tokio::time::sleep(delay) => {
                let label = classify(&text);
                store.set_mode(label);
                tracing::debug!(label = %label, "Deferred classification applied");
                Some(label)
            }
        }
    });

    AnalysisHandle { cancel_tx, join }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_completed_analysis_applies_label() {
        let store = Arc::new(AffectiveStateStore::new());
        let handle = classify_after_delay(
            Arc::clone(&store),
            "I feel so happy and excited today".to_string(),
            Duration::from_millis(800),
        );

        let label = handle.finished().await;
        assert_eq!(label, Some(EmotionLabel::Happy));
        assert_eq!(store.current().label, EmotionLabel::Happy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_update() {
        let store = Arc::new(AffectiveStateStore::new());
        store.set_mode(EmotionLabel::Focused);

        let handle = classify_after_delay(
            Arc::clone(&store),
            "feeling sad today".to_string(),
            Duration::from_millis(800),
        );
        handle.cancel();

        // Let the spawned task observe the cancellation and the (virtual)
        // delay elapse.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(store.current().label, EmotionLabel::Focused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_discards_pending_update() {
        let store = Arc::new(AffectiveStateStore::new());

        let handle = classify_after_delay(
            Arc::clone(&store),
            "feeling sad today".to_string(),
            Duration::from_millis(800),
        );
        drop(handle);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(store.current().label, EmotionLabel::Neutral);
    }
}

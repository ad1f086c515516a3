//! Engine facade.
//!
//! [`AffectEngine`] wires the classifier, the state store, the content
//! tables, and the journal aggregator together behind one constructible
//! object. The host builds one per session, seeds it with the
//! authenticated user's stored mood, and hands its store to whichever
//! surfaces subscribe to theme changes.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::thread_rng;

use crate::analysis::{classify_after_delay, AnalysisHandle};
use crate::classifier::classify;
use crate::config::Config;
use crate::content;
use crate::error::Result;
use crate::journal;
use crate::state::AffectiveStateStore;
use crate::types::{AffectiveState, EmotionLabel, JournalEntry, MetricsSample};

/// The affective-state content-adaptation engine.
pub struct AffectEngine {
    config: Config,
    store: Arc<AffectiveStateStore>,
}

impl AffectEngine {
    /// Build an engine starting at `Neutral`.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_initial_mood(config, None)
    }

    /// Build an engine seeded from the host's stored mood for the current
    /// user, if any.
    ///
    /// Validates the mood content tables at startup so a content regression
    /// fails construction instead of surfacing as an empty panel later.
    pub fn with_initial_mood(config: Config, initial: Option<EmotionLabel>) -> Result<Self> {
        content::validate_tables()?;

        let store = Arc::new(AffectiveStateStore::with_initial(initial));
        tracing::info!(
            initial = %store.current().label,
            window_size = config.metrics.window_size,
            delay_ms = config.analysis.delay_ms,
            "Affect engine initialized"
        );

        Ok(Self { config, store })
    }

    /// The shared state store, for subscription registration.
    pub fn store(&self) -> &Arc<AffectiveStateStore> {
        &self.store
    }

    /// Current affective state.
    pub fn current(&self) -> AffectiveState {
        self.store.current()
    }

    /// Classify `text` and apply the result immediately.
    pub fn classify_now(&self, text: &str) -> EmotionLabel {
        let label = classify(text);
        self.store.set_mode(label);
        label
    }

    /// Classify `text` after the configured analysis delay.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// handle before the delay elapses discards the pending update.
    pub fn classify_deferred(&self, text: &str) -> AnalysisHandle {
        classify_after_delay(
            Arc::clone(&self.store),
            text.to_string(),
            Duration::from_millis(self.config.analysis.delay_ms),
        )
    }

    /// Build a journal entry from a submission and append it.
    ///
    /// The entry's insight is derived from the content tables at save time;
    /// its id is derived from the (text, timestamp) identity. Duplicate
    /// submissions are idempotent; blank text is a validation error.
    pub fn save_entry(
        &self,
        existing: Vec<JournalEntry>,
        text: &str,
        mood: EmotionLabel,
        recorded_at: DateTime<Utc>,
    ) -> Result<Vec<JournalEntry>> {
        let entry = JournalEntry::new(text, mood, recorded_at, content::insight_for(mood));
        journal::append(existing, entry)
    }

    /// Synthetic metrics series using the configured window and jitter.
    ///
    /// Uses an entropy-seeded RNG; tests that need exact output call
    /// [`journal::build_metrics_series`] with a seeded one.
    pub fn metrics_series(
        &self,
        entries: &[JournalEntry],
        base_samples: &[MetricsSample],
    ) -> Vec<MetricsSample> {
        journal::build_metrics_series(
            entries,
            base_samples,
            self.config.metrics.window_size,
            self.config.metrics.jitter,
            &mut thread_rng(),
        )
    }
}

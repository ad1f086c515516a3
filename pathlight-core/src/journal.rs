//! Journal aggregation.
//!
//! Transforms sequences of mood-tagged [`JournalEntry`] values into the
//! summaries the analytics views render: dominant mood, per-label
//! distribution, and a bounded synthetic metrics series for trend charts.
//! The engine owns no storage; the host passes entry sequences in and keeps
//! whatever comes back.

use std::collections::HashMap;

use rand::Rng;

use crate::error::Result;
use crate::types::{EmotionLabel, JournalEntry, MetricsSample};

/// Default number of samples kept in the synthetic metrics series.
pub const DEFAULT_WINDOW_SIZE: usize = 14;

/// Default jitter span applied to each metrics score, in points.
pub const DEFAULT_JITTER: f64 = 5.0;

// ============================================
// Insertion
// ============================================

/// Append a candidate entry with at-most-once semantics.
///
/// The candidate is validated first; a malformed entry (blank text) is
/// rejected before any dedup or insert logic runs. If an entry with the same
/// `(text, recorded_at)` identity already exists, the sequence is returned
/// unchanged: a duplicate submission is a no-op, not an error. Insertion
/// order is preserved.
pub fn append(
    existing: Vec<JournalEntry>,
    candidate: JournalEntry,
) -> Result<Vec<JournalEntry>> {
    candidate.validate()?;

    if existing.iter().any(|entry| entry.same_identity(&candidate)) {
        tracing::debug!(id = %candidate.id, "Duplicate journal entry ignored");
        return Ok(existing);
    }

    let mut entries = existing;
    entries.push(candidate);
    Ok(entries)
}

// ============================================
// Summaries
// ============================================

/// The most frequent mood across `entries`.
///
/// Ties break to the first label to reach the maximum count during a single
/// left-to-right scan, so the result is stable under insertion order. Empty
/// input resolves to `Neutral`.
pub fn dominant_mood(entries: &[JournalEntry]) -> EmotionLabel {
    let mut counts: HashMap<EmotionLabel, usize> = HashMap::new();
    let mut leader = EmotionLabel::Neutral;
    let mut leader_count = 0usize;

    for entry in entries {
        let count = counts.entry(entry.mood).or_insert(0);
        *count += 1;
        // Strictly greater: an equal count never displaces the label that
        // reached it first.
        if *count > leader_count {
            leader = entry.mood;
            leader_count = *count;
        }
    }

    leader
}

/// Per-label entry counts. Counts sum to `entries.len()`; labels with no
/// entries are omitted rather than reported as zero.
pub fn distribution(entries: &[JournalEntry]) -> HashMap<EmotionLabel, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }
    counts
}

// ============================================
// Synthetic metrics series
// ============================================

/// Base score for the synthetic metrics derived from each mood label.
fn base_score(label: EmotionLabel) -> f64 {
    match label {
        EmotionLabel::Energetic => 88.0,
        EmotionLabel::Happy => 85.0,
        EmotionLabel::Focused => 82.0,
        EmotionLabel::Creative => 80.0,
        EmotionLabel::Neutral => 60.0,
        EmotionLabel::Confused => 50.0,
        EmotionLabel::Tired => 45.0,
        EmotionLabel::Anxious => 40.0,
        EmotionLabel::Angry => 38.0,
        EmotionLabel::Sad => 35.0,
        EmotionLabel::BurntOut => 30.0,
    }
}

fn jittered(base: f64, jitter: f64, rng: &mut impl Rng) -> f64 {
    let offset = if jitter > 0.0 {
        rng.gen_range(-jitter..=jitter)
    } else {
        0.0
    };
    (base + offset).clamp(0.0, 100.0)
}

/// Build the bounded synthetic trend series for visualization.
///
/// One sample is derived per entry: the label's base score plus a jitter in
/// `[-jitter, +jitter]` applied independently to confidence, wellbeing, and
/// productivity, each clamped to [0, 100]. Derived samples are concatenated
/// after `base_samples` and the series is truncated to the most recent
/// `window_size` samples, oldest dropped first.
///
/// The random source is injected so deterministic tests can seed it; the
/// output is otherwise not reproducible across runs.
pub fn build_metrics_series(
    entries: &[JournalEntry],
    base_samples: &[MetricsSample],
    window_size: usize,
    jitter: f64,
    rng: &mut impl Rng,
) -> Vec<MetricsSample> {
    let mut series: Vec<MetricsSample> = base_samples.to_vec();

    for entry in entries {
        let base = base_score(entry.mood);
        series.push(MetricsSample {
            date: entry.recorded_at.format("%Y-%m-%d").to_string(),
            confidence: jittered(base, jitter, rng),
            wellbeing: jittered(base, jitter, rng),
            productivity: jittered(base, jitter, rng),
        });
    }

    if series.len() > window_size {
        let excess = series.len() - window_size;
        series.drain(..excess);
    }

    series
}

//! Integration tests for the affect engine
//!
//! These tests exercise the full flow the dashboard drives: free text in,
//! classification, state/theme propagation, content lookup, journal
//! aggregation, and the deferred-analysis path.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pathlight_core::content::{motivation_for, recommendations_for, tasks_for};
use pathlight_core::{
    classify, distribution, dominant_mood, AffectEngine, CompletionAdapter, Config, EmotionLabel,
    JournalEntry, PassThroughXp,
};

fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

// ============================================
// Classification scenarios
// ============================================

#[test]
fn test_classification_scenarios() {
    pathlight_core::logging::init_test();

    assert_eq!(
        classify("I feel so happy and excited today"),
        EmotionLabel::Happy
    );
    assert_eq!(
        classify("I am anxious about my deadline"),
        EmotionLabel::Anxious
    );
    assert_eq!(classify("The weather is cloudy"), EmotionLabel::Neutral);
}

// ============================================
// State propagation
// ============================================

#[test]
fn test_text_submission_drives_theme_and_content() {
    let engine = AffectEngine::new(Config::default()).unwrap();

    let themes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&themes);
    engine.store().subscribe(move |state| {
        sink.lock().unwrap().push(state.theme.clone());
    });

    let label = engine.classify_now("exhausted after the bootcamp week");
    assert_eq!(label, EmotionLabel::Tired);

    // Subscribers saw the theme change, and content surfaces resolve
    // against the same label.
    assert_eq!(*themes.lock().unwrap(), vec!["tired".to_string()]);
    assert!(!recommendations_for(label).is_empty());
    assert!(!tasks_for(label).is_empty());
    assert!(!motivation_for(label).is_empty());
}

#[test]
fn test_explicit_mode_switch_and_invalid_token() {
    let engine = AffectEngine::new(Config::default()).unwrap();

    engine.store().set_mode_token("creative");
    assert_eq!(engine.current().label, EmotionLabel::Creative);

    // Unknown tokens are ignored: no state change, no error.
    engine.store().set_mode_token("zen");
    assert_eq!(engine.current().label, EmotionLabel::Creative);
}

// ============================================
// Journal flow
// ============================================

#[test]
fn test_journal_save_dedup_and_summaries() {
    let engine = AffectEngine::new(Config::default()).unwrap();
    let at = ts(2025, 5, 10);

    // Submitting the same entry twice leaves the journal length at 1.
    let entries = engine
        .save_entry(Vec::new(), "Great day", EmotionLabel::Happy, at)
        .unwrap();
    let entries = engine
        .save_entry(entries, "Great day", EmotionLabel::Happy, at)
        .unwrap();
    assert_eq!(entries.len(), 1);

    // Grow the journal: [happy, happy, sad, focused, happy].
    let mut entries = entries;
    for (i, (text, mood)) in [
        ("kept the streak", EmotionLabel::Happy),
        ("rough quiz", EmotionLabel::Sad),
        ("deep work on rust", EmotionLabel::Focused),
        ("nailed the interview prep", EmotionLabel::Happy),
    ]
    .into_iter()
    .enumerate()
    {
        entries = engine
            .save_entry(entries, text, mood, ts(2025, 5, 11 + i as u32))
            .unwrap();
    }

    assert_eq!(dominant_mood(&entries), EmotionLabel::Happy);

    let dist = distribution(&entries);
    assert_eq!(dist.get(&EmotionLabel::Happy), Some(&3));
    assert_eq!(dist.get(&EmotionLabel::Sad), Some(&1));
    assert_eq!(dist.get(&EmotionLabel::Focused), Some(&1));
    assert_eq!(dist.values().sum::<usize>(), entries.len());
}

#[test]
fn test_malformed_entry_is_surfaced_to_host() {
    let engine = AffectEngine::new(Config::default()).unwrap();
    let result = engine.save_entry(Vec::new(), "  ", EmotionLabel::Neutral, ts(2025, 5, 10));
    assert!(matches!(
        result,
        Err(pathlight_core::Error::InvalidEntry { .. })
    ));
}

#[test]
fn test_metrics_series_end_to_end() {
    let entries: Vec<_> = (0..18)
        .map(|i| {
            JournalEntry::new(
                format!("entry {i}"),
                EmotionLabel::ALL[i as usize % EmotionLabel::ALL.len()],
                ts(2025, 4, i + 1),
                "",
            )
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(99);
    let series = pathlight_core::build_metrics_series(&entries, &[], 14, 5.0, &mut rng);

    assert_eq!(series.len(), 14);
    for sample in &series {
        for value in [sample.confidence, sample.wellbeing, sample.productivity] {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    // Seeded runs are exactly reproducible.
    let mut rng_again = StdRng::seed_from_u64(99);
    let series_again = pathlight_core::build_metrics_series(&entries, &[], 14, 5.0, &mut rng_again);
    assert_eq!(series, series_again);
}

// ============================================
// Rewards
// ============================================

#[test]
fn test_completed_task_rewards_pass_through() {
    let adapter = PassThroughXp;
    let task = &tasks_for(EmotionLabel::Focused)[0];
    assert_eq!(adapter.xp_for(EmotionLabel::Focused, task), task.xp);
}

// ============================================
// Deferred analysis
// ============================================

#[tokio::test(start_paused = true)]
async fn test_deferred_classification_applies_after_delay() {
    let engine = AffectEngine::new(Config::default()).unwrap();
    let handle = engine.classify_deferred("so grateful for my mentor");

    let label = handle.finished().await;
    assert_eq!(label, Some(EmotionLabel::Happy));
    assert_eq!(engine.current().theme, "happy");
}

#[tokio::test(start_paused = true)]
async fn test_teardown_before_delay_discards_update() {
    let engine = AffectEngine::new(Config::default()).unwrap();
    engine.store().set_mode(EmotionLabel::Focused);

    // View dismissed before the analysis delay elapses.
    let handle = engine.classify_deferred("feeling miserable");
    drop(handle);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(engine.current().label, EmotionLabel::Focused);
}

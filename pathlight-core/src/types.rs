//! Core domain types for the Pathlight affect engine
//!
//! These types form the in-process data model shared with the host
//! application. The host owns persistence and rendering; the engine only
//! transforms values.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **EmotionLabel** | Closed set of discrete mood labels; `neutral` is the universal fallback |
//! | **Theme token** | Presentation identifier, always the current label's canonical token |
//! | **JournalEntry** | Immutable mood-tagged free-text entry, identity = (text, recorded_at) |
//! | **AffectiveState** | The single "mood right now" consumed by UI and recommendations |
//! | **MetricsSample** | One point of the synthetic trend series (derived, not measured) |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

// ============================================
// Emotion labels
// ============================================

/// Discrete emotional-state labels.
///
/// The set is closed: every lookup table in the engine is total over it,
/// and `Neutral` is always a valid fallback target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Focused,
    Tired,
    Anxious,
    Energetic,
    Angry,
    Creative,
    Confused,
    BurntOut,
    Neutral,
}

impl EmotionLabel {
    /// Every label, in declaration order. Used by startup table validation.
    pub const ALL: [EmotionLabel; 11] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Focused,
        EmotionLabel::Tired,
        EmotionLabel::Anxious,
        EmotionLabel::Energetic,
        EmotionLabel::Angry,
        EmotionLabel::Creative,
        EmotionLabel::Confused,
        EmotionLabel::BurntOut,
        EmotionLabel::Neutral,
    ];

    /// Canonical token used in storage and as the UI theme token.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Focused => "focused",
            EmotionLabel::Tired => "tired",
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Energetic => "energetic",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Creative => "creative",
            EmotionLabel::Confused => "confused",
            EmotionLabel::BurntOut => "burnt_out",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Human-friendly name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Focused => "Focused",
            EmotionLabel::Tired => "Tired",
            EmotionLabel::Anxious => "Anxious",
            EmotionLabel::Energetic => "Energetic",
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Creative => "Creative",
            EmotionLabel::Confused => "Confused",
            EmotionLabel::BurntOut => "Burnt Out",
            EmotionLabel::Neutral => "Neutral",
        }
    }

    /// Lenient parse for host-supplied tokens: unknown input falls back to
    /// `Neutral` instead of failing.
    pub fn from_token(token: &str) -> EmotionLabel {
        token.parse().unwrap_or(EmotionLabel::Neutral)
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "happy" => Ok(EmotionLabel::Happy),
            "sad" => Ok(EmotionLabel::Sad),
            "focused" => Ok(EmotionLabel::Focused),
            "tired" => Ok(EmotionLabel::Tired),
            "anxious" => Ok(EmotionLabel::Anxious),
            "energetic" => Ok(EmotionLabel::Energetic),
            "angry" => Ok(EmotionLabel::Angry),
            "creative" => Ok(EmotionLabel::Creative),
            "burnt_out" => Ok(EmotionLabel::BurntOut),
            "confused" => Ok(EmotionLabel::Confused),
            "neutral" => Ok(EmotionLabel::Neutral),
            _ => Err(format!("unknown emotion label: {}", s)),
        }
    }
}

// ============================================
// Affective state
// ============================================

/// The current affective state shared with downstream surfaces.
///
/// `theme` always mirrors `label.as_str()`; the label is the single source
/// of truth and there is no independent theme state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectiveState {
    /// The current emotion label
    pub label: EmotionLabel,
    /// Theme token driving presentation
    pub theme: String,
}

impl AffectiveState {
    pub fn new(label: EmotionLabel) -> Self {
        Self {
            label,
            theme: label.as_str().to_string(),
        }
    }
}

impl Default for AffectiveState {
    fn default() -> Self {
        Self::new(EmotionLabel::Neutral)
    }
}

// ============================================
// Journal entries
// ============================================

/// A mood-tagged journal entry.
///
/// Entries are immutable once stored. Logical identity for deduplication is
/// the `(text, recorded_at)` pair; `id` is derived from that pair and is
/// therefore stable across re-submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable identifier derived from (text, recorded_at)
    pub id: String,
    /// When the entry was recorded (day precision in practice, finer supported)
    pub recorded_at: DateTime<Utc>,
    /// Mood the entry was tagged with
    pub mood: EmotionLabel,
    /// Free text written by the user
    pub text: String,
    /// Insight derived from the content tables at save time
    pub insight: String,
}

impl JournalEntry {
    /// Build an entry, deriving its stable id.
    pub fn new(
        text: impl Into<String>,
        mood: EmotionLabel,
        recorded_at: DateTime<Utc>,
        insight: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let id = Self::derived_id(&text, recorded_at);
        Self {
            id,
            recorded_at,
            mood,
            text,
            insight: insight.into(),
        }
    }

    /// Stable id: SHA-256 over the dedup identity pair, hex, truncated.
    pub fn derived_id(text: &str, recorded_at: DateTime<Utc>) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        hasher.update(recorded_at.to_rfc3339().as_bytes());
        let digest = hasher.finalize();
        hex::encode(digest)[..16].to_string()
    }

    /// Validate required fields before the entry enters the journal.
    ///
    /// Blank text is the malformed-entry case the aggregator rejects; it is
    /// the only condition in the engine that surfaces an explicit error.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::InvalidEntry {
                field: "text".to_string(),
                message: "journal entry text must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Whether `other` is the same logical entry.
    pub fn same_identity(&self, other: &JournalEntry) -> bool {
        self.text == other.text && self.recorded_at == other.recorded_at
    }
}

// ============================================
// Mood content
// ============================================

/// Category of a suggested task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Reflection,
    Learning,
    Movement,
    Rest,
    Planning,
    Social,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Reflection => "reflection",
            TaskKind::Learning => "learning",
            TaskKind::Movement => "movement",
            TaskKind::Rest => "rest",
            TaskKind::Planning => "planning",
            TaskKind::Social => "social",
        }
    }
}

/// A suggested task with its reward metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodTask {
    /// Short imperative title
    pub title: &'static str,
    /// Task category
    pub kind: TaskKind,
    /// Reward amount granted on completion (always positive)
    pub xp: u32,
    /// Rough duration estimate in minutes
    pub estimated_minutes: u32,
}

/// Curated content for one emotion label.
///
/// Static configuration data, loaded once and never mutated at runtime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoodContent {
    /// Label this entry belongs to
    pub label: EmotionLabel,
    /// Motivational line shown on the dashboard
    pub motivation: &'static str,
    /// Insight attached to journal entries saved with this mood
    pub insight: &'static str,
    /// Activity recommendations, in display order (never empty)
    pub recommendations: &'static [&'static str],
    /// Suggested tasks, in display order (never empty)
    pub tasks: &'static [MoodTask],
}

// ============================================
// Synthetic metrics
// ============================================

/// One sample of the synthetic trend series used for visualization.
///
/// Values are derived from mood labels plus bounded jitter; they are not
/// measured quantities. All three scores lie in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSample {
    /// Calendar date of the sample (YYYY-MM-DD)
    pub date: String,
    /// Confidence score
    pub confidence: f64,
    /// Wellbeing score
    pub wellbeing: f64,
    /// Productivity score
    pub productivity: f64,
}

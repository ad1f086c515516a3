//! # pathlight-core
//!
//! Affective-state content-adaptation engine for the Pathlight learning
//! dashboard.
//!
//! This library provides:
//! - Deterministic keyword classification of free text into mood labels
//! - A single current affective state with subscribe/notify semantics
//! - Static mood content tables (motivation, recommendations, tasks)
//! - Journal aggregation: dedup insert, dominant mood, distribution, and a
//!   synthetic metrics series for trend charts
//! - A pass-through completion/XP adapter as the gamification seam
//!
//! ## Architecture
//!
//! The host owns persistence and rendering; the engine only transforms
//! in-process values:
//!
//! ```text
//! free text ──▶ classifier ──▶ state store ──▶ subscribers (theme, UI)
//!                                  │
//!                          content tables ──▶ motivation / tasks / recs
//! journal save ──▶ aggregator ──▶ dominant mood / distribution / metrics
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pathlight_core::{AffectEngine, Config, EmotionLabel};
//!
//! let engine = AffectEngine::new(Config::default()).expect("content tables valid");
//! let label = engine.classify_now("I feel so happy and excited today");
//! assert_eq!(label, EmotionLabel::Happy);
//! assert_eq!(engine.current().theme, "happy");
//! ```

// Re-export commonly used items at the crate root
pub use analysis::AnalysisHandle;
pub use classifier::classify;
pub use config::Config;
pub use engine::AffectEngine;
pub use error::{Error, Result};
pub use journal::{append, build_metrics_series, distribution, dominant_mood};
pub use reward::{CompletionAdapter, PassThroughXp};
pub use state::{AffectiveStateStore, SubscriptionId};
pub use types::*;

// Public modules
pub mod analysis;
pub mod classifier;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod journal;
pub mod logging;
pub mod reward;
pub mod state;
pub mod types;

//! Static mood content tables.
//!
//! Maps every [`EmotionLabel`] to curated motivational text, activity
//! recommendations, and suggested tasks with reward metadata. The tables are
//! configuration data: loaded once, never mutated at runtime.
//!
//! Lookups are total. Labels without curated content resolve to the
//! `Neutral` entry; the match in [`content_for`] lists those labels
//! explicitly rather than using a wildcard, so adding a new label fails to
//! compile until someone decides what it maps to.

use crate::error::{Error, Result};
use crate::types::{EmotionLabel, MoodContent, MoodTask, TaskKind};

static HAPPY: MoodContent = MoodContent {
    label: EmotionLabel::Happy,
    motivation: "Ride the momentum. Good days compound.",
    insight: "You logged a bright day. Note what made it work so you can repeat it.",
    recommendations: &[
        "Tackle the course module you have been putting off",
        "Share a recent win with your study group",
        "Sketch the next milestone on your career roadmap",
    ],
    tasks: &[
        MoodTask {
            title: "Finish one stretch lesson",
            kind: TaskKind::Learning,
            xp: 40,
            estimated_minutes: 30,
        },
        MoodTask {
            title: "Write down three things that went well",
            kind: TaskKind::Reflection,
            xp: 15,
            estimated_minutes: 10,
        },
        MoodTask {
            title: "Reach out to a mentor or peer",
            kind: TaskKind::Social,
            xp: 20,
            estimated_minutes: 15,
        },
    ],
};

static SAD: MoodContent = MoodContent {
    label: EmotionLabel::Sad,
    motivation: "Low days pass. One small step still counts.",
    insight: "A heavy entry. Be gentle with yourself and keep the next task small.",
    recommendations: &[
        "Review notes from a topic you already know well",
        "Take a short walk before your next study block",
        "Message a friend from your cohort",
    ],
    tasks: &[
        MoodTask {
            title: "Re-read yesterday's notes",
            kind: TaskKind::Learning,
            xp: 15,
            estimated_minutes: 15,
        },
        MoodTask {
            title: "Ten-minute walk outside",
            kind: TaskKind::Movement,
            xp: 10,
            estimated_minutes: 10,
        },
        MoodTask {
            title: "Write one sentence about how you feel",
            kind: TaskKind::Reflection,
            xp: 10,
            estimated_minutes: 5,
        },
    ],
};

static FOCUSED: MoodContent = MoodContent {
    label: EmotionLabel::Focused,
    motivation: "You are locked in. Protect this block of time.",
    insight: "Deep-focus entry. Schedule your hardest material for windows like this.",
    recommendations: &[
        "Start the hardest pending assignment now",
        "Silence notifications for the next hour",
        "Batch similar exercises together",
    ],
    tasks: &[
        MoodTask {
            title: "One deep-work session on your main track",
            kind: TaskKind::Learning,
            xp: 50,
            estimated_minutes: 50,
        },
        MoodTask {
            title: "Plan tomorrow's first task before stopping",
            kind: TaskKind::Planning,
            xp: 15,
            estimated_minutes: 10,
        },
    ],
};

static TIRED: MoodContent = MoodContent {
    label: EmotionLabel::Tired,
    motivation: "Rest is part of the plan, not a deviation from it.",
    insight: "Energy was low. Check whether sleep or workload needs adjusting.",
    recommendations: &[
        "Switch to light review instead of new material",
        "Take a 20-minute break away from screens",
        "Plan an earlier night today",
    ],
    tasks: &[
        MoodTask {
            title: "Flashcard review only",
            kind: TaskKind::Learning,
            xp: 15,
            estimated_minutes: 15,
        },
        MoodTask {
            title: "Screen-free break",
            kind: TaskKind::Rest,
            xp: 10,
            estimated_minutes: 20,
        },
        MoodTask {
            title: "Stretch for five minutes",
            kind: TaskKind::Movement,
            xp: 10,
            estimated_minutes: 5,
        },
    ],
};

static ANXIOUS: MoodContent = MoodContent {
    label: EmotionLabel::Anxious,
    motivation: "Break it down. The next step is smaller than it looks.",
    insight: "Worry showed up in this entry. Turning it into a concrete list usually shrinks it.",
    recommendations: &[
        "List what is actually due this week",
        "Do a two-minute breathing exercise",
        "Split the scariest task into three smaller ones",
    ],
    tasks: &[
        MoodTask {
            title: "Write a priority list for the week",
            kind: TaskKind::Planning,
            xp: 20,
            estimated_minutes: 15,
        },
        MoodTask {
            title: "Breathing exercise",
            kind: TaskKind::Rest,
            xp: 10,
            estimated_minutes: 5,
        },
        MoodTask {
            title: "Finish the smallest open task",
            kind: TaskKind::Learning,
            xp: 25,
            estimated_minutes: 20,
        },
    ],
};

static ENERGETIC: MoodContent = MoodContent {
    label: EmotionLabel::Energetic,
    motivation: "High energy today. Spend it on what matters most.",
    insight: "Plenty of drive in this entry. Point it at your top-priority track.",
    recommendations: &[
        "Attempt the practice exam you postponed",
        "Pair a workout with a podcast from your field",
        "Clear your backlog of small tasks in one sweep",
    ],
    tasks: &[
        MoodTask {
            title: "Timed practice exam",
            kind: TaskKind::Learning,
            xp: 45,
            estimated_minutes: 45,
        },
        MoodTask {
            title: "Inbox-zero your task list",
            kind: TaskKind::Planning,
            xp: 20,
            estimated_minutes: 20,
        },
        MoodTask {
            title: "Short workout",
            kind: TaskKind::Movement,
            xp: 15,
            estimated_minutes: 20,
        },
    ],
};

static NEUTRAL: MoodContent = MoodContent {
    label: EmotionLabel::Neutral,
    motivation: "Steady days are where habits are built.",
    insight: "A steady entry. Consistency beats intensity over a semester.",
    recommendations: &[
        "Continue your current course where you left off",
        "Review this week's journal for patterns",
        "Update one section of your resume",
    ],
    tasks: &[
        MoodTask {
            title: "One regular study session",
            kind: TaskKind::Learning,
            xp: 30,
            estimated_minutes: 30,
        },
        MoodTask {
            title: "Skim your week in review",
            kind: TaskKind::Reflection,
            xp: 10,
            estimated_minutes: 10,
        },
    ],
};

/// Resolve the content entry for a label.
///
/// Labels without curated content map to the `Neutral` entry, never to an
/// empty result.
pub fn content_for(label: EmotionLabel) -> &'static MoodContent {
    match label {
        EmotionLabel::Happy => &HAPPY,
        EmotionLabel::Sad => &SAD,
        EmotionLabel::Focused => &FOCUSED,
        EmotionLabel::Tired => &TIRED,
        EmotionLabel::Anxious => &ANXIOUS,
        EmotionLabel::Energetic => &ENERGETIC,
        EmotionLabel::Neutral => &NEUTRAL,
        // No curated content yet; resolve to the neutral entry.
        EmotionLabel::Angry
        | EmotionLabel::Creative
        | EmotionLabel::Confused
        | EmotionLabel::BurntOut => &NEUTRAL,
    }
}

/// Motivational line for a label.
pub fn motivation_for(label: EmotionLabel) -> &'static str {
    content_for(label).motivation
}

/// Save-time insight attached to journal entries tagged with `label`.
pub fn insight_for(label: EmotionLabel) -> &'static str {
    content_for(label).insight
}

/// Activity recommendations for a label, in display order.
pub fn recommendations_for(label: EmotionLabel) -> &'static [&'static str] {
    content_for(label).recommendations
}

/// Suggested tasks for a label, in display order.
pub fn tasks_for(label: EmotionLabel) -> &'static [MoodTask] {
    content_for(label).tasks
}

/// Startup check: every label resolves to a non-empty entry.
///
/// The exhaustive match in [`content_for`] guarantees totality at compile
/// time; this catches content regressions (emptied lists, zero XP) that the
/// type system cannot.
pub fn validate_tables() -> Result<()> {
    for label in EmotionLabel::ALL {
        let entry = content_for(label);
        if entry.motivation.trim().is_empty() || entry.insight.trim().is_empty() {
            return Err(Error::Config(format!(
                "mood content for '{}' has empty text",
                label
            )));
        }
        if entry.recommendations.is_empty() {
            return Err(Error::Config(format!(
                "mood content for '{}' has no recommendations",
                label
            )));
        }
        if entry.tasks.is_empty() {
            return Err(Error::Config(format!(
                "mood content for '{}' has no tasks",
                label
            )));
        }
        if let Some(task) = entry.tasks.iter().find(|t| t.xp == 0) {
            return Err(Error::Config(format!(
                "task '{}' for '{}' has zero xp",
                task.title, label
            )));
        }
    }
    Ok(())
}

//! Scoring rule tables.

use super::types::UsageLevel;

/// Score every user starts from before deltas apply.
pub const BASE_SCORE: i32 = 100;

/// One-time bonus when no budget is over or high usage.
pub const PERFECT_RECORD_BONUS: i32 = 10;

/// Points applied per budget classified into a usage bucket.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRule {
    /// Bucket the rule applies to.
    pub level: UsageLevel,
    /// Points added per budget in the bucket (negative for penalties).
    pub delta: i32,
}

/// Per-bucket point deltas, ordered from worst bucket to best.
pub const SCORE_RULES: &[ScoreRule] = &[
    ScoreRule {
        level: UsageLevel::OverBudget,
        delta: -20,
    },
    ScoreRule {
        level: UsageLevel::High,
        delta: -10,
    },
    ScoreRule {
        level: UsageLevel::Medium,
        delta: -5,
    },
    ScoreRule {
        level: UsageLevel::Moderate,
        delta: 0,
    },
    ScoreRule {
        level: UsageLevel::Low,
        delta: 2,
    },
];

/// A display band for a score range.
#[derive(Debug, Clone, Copy)]
pub struct LabelBand {
    /// Lowest score (inclusive) the band covers.
    pub min_score: i32,
    /// Display label.
    pub label: &'static str,
    /// Display color.
    pub color: &'static str,
}

/// Score bands ordered best to worst; the first band whose `min_score` the
/// score reaches wins.
pub const LABEL_BANDS: &[LabelBand] = &[
    LabelBand {
        min_score: 80,
        label: "Excellent",
        color: "green",
    },
    LabelBand {
        min_score: 60,
        label: "Good",
        color: "blue",
    },
    LabelBand {
        min_score: 40,
        label: "Fair",
        color: "yellow",
    },
    LabelBand {
        min_score: 20,
        label: "Poor",
        color: "orange",
    },
    LabelBand {
        min_score: 0,
        label: "Critical",
        color: "red",
    },
];

/// Looks up the per-budget delta for a usage bucket.
#[must_use]
pub fn delta_for(level: UsageLevel) -> i32 {
    SCORE_RULES
        .iter()
        .find(|rule| rule.level == level)
        .map_or(0, |rule| rule.delta)
}

/// Looks up the display band for a clamped score.
#[must_use]
pub fn band_for(score: i32) -> &'static LabelBand {
    LABEL_BANDS
        .iter()
        .find(|band| score >= band.min_score)
        .unwrap_or(&LABEL_BANDS[LABEL_BANDS.len() - 1])
}

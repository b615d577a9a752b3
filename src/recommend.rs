//! Threshold-driven recommendation blocks and insight cards.
//!
//! Both rule sets consume the same `stats::Averages` aggregate and are
//! kept as two separately named tables: recommendations look at the
//! last seven check-ins, insight cards at the all-time averages. The
//! thresholds intentionally differ between the two.

use crate::models::MoodEntry;
use crate::stats::Averages;

/// How many of the most recent check-ins feed the recommendation rules.
pub const RECENT_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Mood,
    Stress,
    Sleep,
    Energy,
}

impl Metric {
    fn of(&self, averages: &Averages) -> f64 {
        match self {
            Metric::Mood => averages.mood,
            Metric::Stress => averages.stress,
            Metric::Sleep => averages.sleep,
            Metric::Energy => averages.energy,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Check {
    Below(f64),
    Above(f64),
    AtLeast(f64),
}

impl Check {
    fn matches(&self, value: f64) -> bool {
        match *self {
            Check::Below(threshold) => value < threshold,
            Check::Above(threshold) => value > threshold,
            Check::AtLeast(threshold) => value >= threshold,
        }
    }
}

/// A suggested-activities block for the wellness view.
#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub category: &'static str,
    pub priority: Priority,
    pub title: &'static str,
    pub description: &'static str,
    pub activities: [&'static str; 4],
}

struct RecommendationRule {
    metric: Metric,
    check: Check,
    block: Recommendation,
}

/// Applied to the mean of the last seven check-ins. Rules fire
/// independently, in source order; none are mutually exclusive.
const RECOMMENDATION_RULES: [RecommendationRule; 4] = [
    RecommendationRule {
        metric: Metric::Mood,
        check: Check::Below(5.0),
        block: Recommendation {
            category: "mental",
            priority: Priority::High,
            title: "Mood Boosting Activities",
            description: "Try these evidence-based activities to improve your mood",
            activities: [
                "Gratitude journaling",
                "Connect with friends",
                "Watch funny videos",
                "Listen to uplifting music",
            ],
        },
    },
    RecommendationRule {
        metric: Metric::Stress,
        check: Check::Above(6.0),
        block: Recommendation {
            category: "stress",
            priority: Priority::High,
            title: "Stress Management",
            description: "Reduce stress with these proven techniques",
            activities: [
                "Deep breathing exercises",
                "5-minute meditation",
                "Progressive muscle relaxation",
                "Take a nature walk",
            ],
        },
    },
    RecommendationRule {
        metric: Metric::Sleep,
        check: Check::Below(5.0),
        block: Recommendation {
            category: "sleep",
            priority: Priority::Medium,
            title: "Sleep Hygiene",
            description: "Improve your sleep quality with these tips",
            activities: [
                "Consistent bedtime routine",
                "Limit screen time before bed",
                "Create a dark, cool environment",
                "Avoid caffeine after 2 PM",
            ],
        },
    },
    RecommendationRule {
        metric: Metric::Energy,
        check: Check::Below(5.0),
        block: Recommendation {
            category: "energy",
            priority: Priority::Medium,
            title: "Energy Boosters",
            description: "Natural ways to increase your energy levels",
            activities: [
                "Light exercise or stretching",
                "Stay hydrated",
                "Eat protein-rich snacks",
                "Take short breaks outdoors",
            ],
        },
    },
];

/// Personalized activity blocks derived from the most recent seven
/// check-ins (or fewer). No entries, no recommendations.
pub fn recommendations(entries: &[MoodEntry]) -> Vec<Recommendation> {
    if entries.is_empty() {
        return Vec::new();
    }

    let tail = &entries[entries.len().saturating_sub(RECENT_WINDOW)..];
    let averages = Averages::over(tail);

    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| rule.check.matches(rule.metric.of(&averages)))
        .map(|rule| rule.block)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Positive,
    Concern,
    Warning,
}

/// A human-readable insight card for the insights view.
#[derive(Debug, Clone, Copy)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub message: &'static str,
}

struct InsightRule {
    metric: Metric,
    check: Check,
    card: Insight,
}

/// Applied to the all-time averages.
const INSIGHT_RULES: [InsightRule; 5] = [
    InsightRule {
        metric: Metric::Mood,
        check: Check::AtLeast(7.0),
        card: Insight {
            kind: InsightKind::Positive,
            title: "Great Mental Health",
            message: "Your mood has been consistently positive! Keep up the great work.",
        },
    },
    InsightRule {
        metric: Metric::Mood,
        check: Check::Below(4.0),
        card: Insight {
            kind: InsightKind::Concern,
            title: "Low Mood Pattern",
            message: "Your mood has been lower than usual. Consider reaching out for support.",
        },
    },
    InsightRule {
        metric: Metric::Stress,
        check: Check::Above(7.0),
        card: Insight {
            kind: InsightKind::Warning,
            title: "High Stress Levels",
            message: "Your stress levels are elevated. Try incorporating relaxation techniques.",
        },
    },
    InsightRule {
        metric: Metric::Sleep,
        check: Check::Below(4.0),
        card: Insight {
            kind: InsightKind::Warning,
            title: "Poor Sleep Quality",
            message: "Sleep quality affects mood significantly. Consider improving sleep hygiene.",
        },
    },
    InsightRule {
        metric: Metric::Energy,
        check: Check::Above(7.0),
        card: Insight {
            kind: InsightKind::Positive,
            title: "High Energy Levels",
            message: "You've been maintaining great energy levels! This supports overall wellbeing.",
        },
    },
];

/// Insight cards derived from the full history. No entries, no cards.
pub fn insights(entries: &[MoodEntry]) -> Vec<Insight> {
    if entries.is_empty() {
        return Vec::new();
    }

    let averages = Averages::over(entries);

    INSIGHT_RULES
        .iter()
        .filter(|rule| rule.check.matches(rule.metric.of(&averages)))
        .map(|rule| rule.card)
        .collect()
}

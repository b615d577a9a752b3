//! Static display catalogs for the wellness and profile views, plus the
//! small derivations (achievement unlocks, goal progress) computed from
//! the entry collection.

use chrono::{DateTime, Utc};

use crate::models::MoodEntry;
use crate::stats::{self, Averages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Meditation,
    Breathing,
    Movement,
    Learning,
    Music,
}

impl ResourceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Meditation => "Meditation",
            ResourceCategory::Breathing => "Breathing",
            ResourceCategory::Movement => "Movement",
            ResourceCategory::Learning => "Learning",
            ResourceCategory::Music => "Music",
        }
    }
}

/// The category filter cycle for the wellness view; `None` shows all.
pub const CATEGORY_FILTERS: [Option<ResourceCategory>; 6] = [
    None,
    Some(ResourceCategory::Meditation),
    Some(ResourceCategory::Breathing),
    Some(ResourceCategory::Movement),
    Some(ResourceCategory::Learning),
    Some(ResourceCategory::Music),
];

pub fn category_filter_label(filter: Option<ResourceCategory>) -> &'static str {
    match filter {
        None => "All Resources",
        Some(category) => category.label(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WellnessResource {
    pub category: ResourceCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub format: &'static str,
}

pub const WELLNESS_RESOURCES: [WellnessResource; 5] = [
    WellnessResource {
        category: ResourceCategory::Meditation,
        title: "Guided Meditation",
        description: "10-minute mindfulness session",
        duration: "10 min",
        format: "audio",
    },
    WellnessResource {
        category: ResourceCategory::Breathing,
        title: "Breathing Exercise",
        description: "4-7-8 breathing technique",
        duration: "5 min",
        format: "interactive",
    },
    WellnessResource {
        category: ResourceCategory::Movement,
        title: "Quick Energizer",
        description: "Gentle stretching routine",
        duration: "15 min",
        format: "video",
    },
    WellnessResource {
        category: ResourceCategory::Learning,
        title: "Mental Health Guide",
        description: "Understanding anxiety and stress",
        duration: "20 min",
        format: "article",
    },
    WellnessResource {
        category: ResourceCategory::Music,
        title: "Relaxation Playlist",
        description: "Curated calming music",
        duration: "30 min",
        format: "playlist",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub description: &'static str,
    pub urgent: bool,
}

pub const CRISIS_RESOURCES: [CrisisResource; 4] = [
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        description: "24/7 crisis support via text",
        urgent: true,
    },
    CrisisResource {
        name: "National Suicide Prevention Lifeline",
        contact: "988",
        description: "24/7 phone support",
        urgent: true,
    },
    CrisisResource {
        name: "Campus Counseling Center",
        contact: "Visit Student Services",
        description: "On-campus mental health support",
        urgent: false,
    },
    CrisisResource {
        name: "SAMHSA National Helpline",
        contact: "1-800-662-4357",
        description: "Treatment referral and information service",
        urgent: false,
    },
];

pub const CRISIS_REMINDER: &str = "Remember: you are not alone. These resources are \
confidential and available 24/7. Your mental health matters, and seeking help is a \
sign of strength.";

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
}

/// Achievements with their unlock state derived from the entries.
/// Wellness Warrior stays locked: resource usage is not tracked.
pub fn achievements(entries: &[MoodEntry], today: chrono::NaiveDate) -> Vec<(Achievement, bool)> {
    let streak = stats::current_streak(entries, today);
    vec![
        (
            Achievement {
                title: "First Steps",
                description: "Completed your first mood check-in",
            },
            !entries.is_empty(),
        ),
        (
            Achievement {
                title: "Week Warrior",
                description: "Completed 7 consecutive check-ins",
            },
            streak >= 7,
        ),
        (
            Achievement {
                title: "Mindful Month",
                description: "Checked in every day for a month",
            },
            streak >= 30,
        ),
        (
            Achievement {
                title: "Wellness Warrior",
                description: "Used 10 different wellness resources",
            },
            false,
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub title: &'static str,
    pub current: f64,
    pub target: f64,
    pub unit: &'static str,
    pub on_track: bool,
}

/// Wellness goals with progress derived from the entries: 30-day
/// check-in count, all-time stress average (lower is better), and
/// all-time sleep average.
pub fn wellness_goals(entries: &[MoodEntry], now: DateTime<Utc>) -> Vec<GoalProgress> {
    let month_count = stats::entries_within_days(entries, 30, now).len() as f64;
    let averages = Averages::over(entries);

    vec![
        GoalProgress {
            title: "Daily Check-ins",
            current: month_count,
            target: 30.0,
            unit: "days",
            on_track: month_count >= 30.0 * 0.7,
        },
        GoalProgress {
            title: "Stress Management",
            current: averages.stress,
            target: 5.0,
            unit: "avg stress level",
            on_track: averages.stress < 5.0,
        },
        GoalProgress {
            title: "Sleep Quality",
            current: averages.sleep,
            target: 8.0,
            unit: "avg quality",
            on_track: averages.sleep >= 8.0 * 0.7,
        },
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct PatternCard {
    pub title: &'static str,
    pub body: &'static str,
    pub correlation: &'static str,
}

/// Shown on the insights view once more than this many entries exist.
pub const PATTERN_SECTION_MIN_ENTRIES: usize = 5;

pub const PATTERN_CARDS: [PatternCard; 3] = [
    PatternCard {
        title: "Sleep & Mood",
        body: "Better sleep quality correlates with improved mood scores.",
        correlation: "Correlation: Strong positive",
    },
    PatternCard {
        title: "Stress & Energy",
        body: "Higher stress levels tend to reduce your energy throughout the day.",
        correlation: "Correlation: Moderate negative",
    },
    PatternCard {
        title: "Weekly Patterns",
        body: "Your mood tends to be highest on weekends and mid-week.",
        correlation: "Pattern: Cyclical variation",
    },
];

use serde::{Deserialize, Serialize};

/// All wellness scores share the same 1..=10 scale.
pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 10;

/// Midpoint substituted for missing optional scores and empty windows.
pub const NEUTRAL_SCORE: u8 = 5;

/// One daily wellness check-in. Entries are immutable once created:
/// there is no edit or delete path anywhere in the application.
///
/// Serialized camelCase to match the wire format of the stored blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Creation-time-derived, unique and monotonic across the collection.
    pub id: i64,
    /// RFC 3339 creation timestamp, assigned at append time.
    pub date: String,
    /// Required, in [1,10].
    pub mood: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Check-in data as entered by the user, before the store assigns
/// `id` and `date`.
#[derive(Debug, Clone, Default)]
pub struct CheckinDraft {
    pub mood: u8,
    pub stress_level: Option<u8>,
    pub sleep_quality: Option<u8>,
    pub energy: Option<u8>,
    pub note: Option<String>,
}

/// Display labels for the ten mood scores, index 0 = score 1.
pub const MOOD_LABELS: [&str; 10] = [
    "Very Low",
    "Low",
    "Poor",
    "Fair",
    "Good",
    "Great",
    "Excellent",
    "Amazing",
    "Fantastic",
    "Perfect",
];

/// Label for a mood score, clamped into the valid scale.
pub fn mood_label(score: u8) -> &'static str {
    let idx = score.clamp(SCALE_MIN, SCALE_MAX) as usize - 1;
    MOOD_LABELS[idx]
}

/// Nearest label for a fractional score such as a window average.
pub fn mood_label_for_average(average: f64) -> &'static str {
    mood_label(average.round().clamp(SCALE_MIN as f64, SCALE_MAX as f64) as u8)
}

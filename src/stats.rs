//! Pure rolling statistics over the entry collection.
//!
//! Everything here is a linear pass over `&[MoodEntry]`; "now" is always
//! an explicit argument so windowing stays deterministic under test.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::HashSet;

use crate::models::{MoodEntry, NEUTRAL_SCORE};

/// Qualitative mood direction over the 30-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "Improving Trend",
            Trend::Declining => "Declining Trend",
            Trend::Stable => "Stable Trend",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Trend::Improving => "Your mood has been trending upward recently!",
            Trend::Declining => {
                "Your mood has been trending downward. Consider seeking support."
            }
            Trend::Stable => "Your mood has been relatively stable over the past week.",
        }
    }
}

/// Parse an entry's stored RFC 3339 timestamp.
pub fn parse_entry_date(entry: &MoodEntry) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&entry.date)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Entries whose date falls within the last `days` days relative to
/// `now` (inclusive lower bound). Entries with unparseable dates are
/// excluded; insertion order is preserved.
pub fn entries_within_days(
    entries: &[MoodEntry],
    days: i64,
    now: DateTime<Utc>,
) -> Vec<&MoodEntry> {
    let cutoff = now - Duration::days(days);
    entries
        .iter()
        .filter(|e| parse_entry_date(e).is_some_and(|d| d >= cutoff))
        .collect()
}

/// Mean mood/stress/sleep/energy over a set of entries, missing
/// optional scores defaulting to the neutral midpoint. The empty case
/// yields all-neutral averages, which makes every downstream threshold
/// rule a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub mood: f64,
    pub stress: f64,
    pub sleep: f64,
    pub energy: f64,
}

impl Averages {
    pub fn neutral() -> Self {
        let mid = NEUTRAL_SCORE as f64;
        Self {
            mood: mid,
            stress: mid,
            sleep: mid,
            energy: mid,
        }
    }

    pub fn over<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a MoodEntry>,
    {
        let mut count = 0usize;
        let (mut mood, mut stress, mut sleep, mut energy) = (0f64, 0f64, 0f64, 0f64);

        for entry in entries {
            count += 1;
            mood += entry.mood as f64;
            stress += entry.stress_level.unwrap_or(NEUTRAL_SCORE) as f64;
            sleep += entry.sleep_quality.unwrap_or(NEUTRAL_SCORE) as f64;
            energy += entry.energy.unwrap_or(NEUTRAL_SCORE) as f64;
        }

        if count == 0 {
            return Self::neutral();
        }

        let n = count as f64;
        Self {
            mood: mood / n,
            stress: stress / n,
            sleep: sleep / n,
            energy: energy / n,
        }
    }
}

/// Arithmetic mean of `mood` over a set of entries; the neutral
/// midpoint when empty, never NaN.
pub fn mean_mood<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a MoodEntry>,
{
    let (mut sum, mut count) = (0f64, 0usize);
    for entry in entries {
        sum += entry.mood as f64;
        count += 1;
    }
    if count == 0 {
        NEUTRAL_SCORE as f64
    } else {
        sum / count as f64
    }
}

/// Classify the mood direction by comparing the mean of the most recent
/// (up to) seven entries in the 30-day window against the mean of the
/// (up to) seven before them. Fewer than two entries in the window, or
/// an empty preceding sub-window, forces `Stable`.
pub fn mood_trend(entries: &[MoodEntry], now: DateTime<Utc>) -> Trend {
    let window = entries_within_days(entries, 30, now);
    if window.len() < 2 {
        return Trend::Stable;
    }

    let split = window.len().saturating_sub(7);
    let recent = &window[split..];
    let previous = &window[split.saturating_sub(7)..split];
    if previous.is_empty() {
        return Trend::Stable;
    }

    let recent_mean = mean_mood(recent.iter().copied());
    let previous_mean = mean_mood(previous.iter().copied());

    if recent_mean > previous_mean + 0.5 {
        Trend::Improving
    } else if recent_mean < previous_mean - 0.5 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Highest mood score across all entries; `None` when empty so views
/// can render a placeholder.
pub fn best_mood(entries: &[MoodEntry]) -> Option<u8> {
    entries.iter().map(|e| e.mood).max()
}

/// Number of consecutive calendar days with at least one entry, ending
/// today or, when today has no entry yet, ending yesterday.
pub fn current_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = entries
        .iter()
        .filter_map(parse_entry_date)
        .map(|d| d.date_naive())
        .collect();

    let mut day = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// The most recent entry recorded on the given calendar day, if any.
pub fn todays_entry(entries: &[MoodEntry], today: NaiveDate) -> Option<&MoodEntry> {
    entries
        .iter()
        .rev()
        .find(|e| parse_entry_date(e).is_some_and(|d| d.date_naive() == today))
}

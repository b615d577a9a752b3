use chrono::{DateTime, Duration, TimeZone, Utc};

use mindspace_tui::models::MoodEntry;
use mindspace_tui::stats::{
    Averages, Trend, best_mood, current_streak, entries_within_days, mean_mood, mood_trend,
    todays_entry,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn entry_days_ago(now: DateTime<Utc>, days: i64, mood: u8) -> MoodEntry {
    let date = now - Duration::days(days);
    MoodEntry {
        id: date.timestamp_millis(),
        date: date.to_rfc3339(),
        mood,
        stress_level: None,
        sleep_quality: None,
        energy: None,
        note: None,
    }
}

#[test]
fn seven_day_window_selects_recent_entries() {
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 20, 4),
        entry_days_ago(now, 8, 5),
        entry_days_ago(now, 6, 6),
        entry_days_ago(now, 1, 7),
        entry_days_ago(now, 0, 8),
    ];

    let window = entries_within_days(&entries, 7, now);
    let moods: Vec<u8> = window.iter().map(|e| e.mood).collect();
    assert_eq!(moods, vec![6, 7, 8]);

    let month = entries_within_days(&entries, 30, now);
    assert_eq!(month.len(), 5);
}

#[test]
fn empty_window_average_is_neutral() {
    let average = mean_mood(&[]);
    assert_eq!(average, 5.0);
    assert!(!average.is_nan());

    let averages = Averages::over(&[]);
    assert_eq!(averages.mood, 5.0);
    assert_eq!(averages.stress, 5.0);
    assert_eq!(averages.sleep, 5.0);
    assert_eq!(averages.energy, 5.0);
}

#[test]
fn averages_stay_within_scale_bounds() {
    let now = fixed_now();
    let entries: Vec<MoodEntry> = (0..10)
        .map(|i| entry_days_ago(now, i, (i % 10 + 1) as u8))
        .collect();

    let average = mean_mood(&entries);
    assert!((1.0..=10.0).contains(&average));
}

#[test]
fn missing_optional_scores_default_to_neutral() {
    let now = fixed_now();
    let mut entry = entry_days_ago(now, 0, 8);
    entry.stress_level = Some(9);

    let averages = Averages::over(std::slice::from_ref(&entry));
    assert_eq!(averages.mood, 8.0);
    assert_eq!(averages.stress, 9.0);
    assert_eq!(averages.sleep, 5.0);
    assert_eq!(averages.energy, 5.0);
}

#[test]
fn trend_improving_when_recent_mean_exceeds_previous() {
    let now = fixed_now();
    let mut entries = Vec::new();
    // Previous seven at mean 6, recent seven at mean 8
    for i in 0..7 {
        entries.push(entry_days_ago(now, 20 - i, 6));
    }
    for i in 0..7 {
        entries.push(entry_days_ago(now, 6 - i, 8));
    }

    assert_eq!(mood_trend(&entries, now), Trend::Improving);
}

#[test]
fn trend_declining_when_recent_mean_drops() {
    let now = fixed_now();
    let mut entries = Vec::new();
    for i in 0..7 {
        entries.push(entry_days_ago(now, 20 - i, 7));
    }
    for i in 0..7 {
        entries.push(entry_days_ago(now, 6 - i, 5));
    }

    assert_eq!(mood_trend(&entries, now), Trend::Declining);
}

#[test]
fn trend_stable_for_small_differences() {
    let now = fixed_now();
    let mut entries = Vec::new();
    // Previous mean 43/7 ~ 6.14, recent mean 6: inside the 0.5 band
    let previous_moods = [6, 6, 6, 6, 7, 6, 6];
    for (i, mood) in previous_moods.into_iter().enumerate() {
        entries.push(entry_days_ago(now, 20 - i as i64, mood));
    }
    for i in 0..7 {
        entries.push(entry_days_ago(now, 6 - i, 6));
    }

    assert_eq!(mood_trend(&entries, now), Trend::Stable);
}

#[test]
fn trend_stable_with_sparse_data() {
    let now = fixed_now();

    // Fewer than two entries in the window
    assert_eq!(mood_trend(&[], now), Trend::Stable);
    let single = vec![entry_days_ago(now, 1, 9)];
    assert_eq!(mood_trend(&single, now), Trend::Stable);

    // No preceding sub-window to compare against
    let recent_only: Vec<MoodEntry> = (0..5).map(|i| entry_days_ago(now, i, 9)).collect();
    assert_eq!(mood_trend(&recent_only, now), Trend::Stable);

    // Entries older than 30 days never count toward the trend
    let mut stale = vec![entry_days_ago(now, 40, 1), entry_days_ago(now, 45, 1)];
    stale.push(entry_days_ago(now, 1, 9));
    assert_eq!(mood_trend(&stale, now), Trend::Stable);
}

#[test]
fn best_day_is_the_maximum_mood() {
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 2, 3),
        entry_days_ago(now, 1, 9),
        entry_days_ago(now, 0, 5),
    ];

    assert_eq!(best_mood(&entries), Some(9));
    assert_eq!(best_mood(&[]), None);
}

#[test]
fn streak_counts_consecutive_days() {
    let now = fixed_now();
    let today = now.date_naive();

    let entries = vec![
        entry_days_ago(now, 2, 6),
        entry_days_ago(now, 1, 6),
        entry_days_ago(now, 0, 6),
    ];
    assert_eq!(current_streak(&entries, today), 3);

    // A gap resets the streak
    let gapped = vec![
        entry_days_ago(now, 3, 6),
        entry_days_ago(now, 2, 6),
        entry_days_ago(now, 0, 6),
    ];
    assert_eq!(current_streak(&gapped, today), 1);

    // No entry today yet: the streak ending yesterday still counts
    let pending_today = vec![entry_days_ago(now, 2, 6), entry_days_ago(now, 1, 6)];
    assert_eq!(current_streak(&pending_today, today), 2);

    assert_eq!(current_streak(&[], today), 0);
}

#[test]
fn streak_ignores_duplicate_entries_per_day() {
    let now = fixed_now();
    let today = now.date_naive();

    let entries = vec![
        entry_days_ago(now, 1, 4),
        entry_days_ago(now, 0, 5),
        entry_days_ago(now, 0, 8),
    ];
    assert_eq!(current_streak(&entries, today), 2);
}

#[test]
fn todays_entry_picks_the_latest_from_today() {
    let now = fixed_now();
    let today = now.date_naive();

    let entries = vec![
        entry_days_ago(now, 1, 3),
        entry_days_ago(now, 0, 5),
        entry_days_ago(now, 0, 8),
    ];

    let found = todays_entry(&entries, today).expect("entry recorded today");
    assert_eq!(found.mood, 8);

    let yesterday_only = vec![entry_days_ago(now, 1, 3)];
    assert!(todays_entry(&yesterday_only, today).is_none());
}

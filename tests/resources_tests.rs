use chrono::{DateTime, Duration, TimeZone, Utc};

use mindspace_tui::models::MoodEntry;
use mindspace_tui::resources::{
    CATEGORY_FILTERS, WELLNESS_RESOURCES, achievements, category_filter_label, wellness_goals,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn entry_days_ago(now: DateTime<Utc>, days: i64, mood: u8, stress: u8, sleep: u8) -> MoodEntry {
    let date = now - Duration::days(days);
    MoodEntry {
        id: date.timestamp_millis(),
        date: date.to_rfc3339(),
        mood,
        stress_level: Some(stress),
        sleep_quality: Some(sleep),
        energy: None,
        note: None,
    }
}

#[test]
fn achievements_unlock_from_entry_history() {
    let now = fixed_now();
    let today = now.date_naive();

    let unlocked: Vec<bool> = achievements(&[], today)
        .into_iter()
        .map(|(_, unlocked)| unlocked)
        .collect();
    assert_eq!(unlocked, vec![false, false, false, false]);

    // A single check-in unlocks First Steps only
    let one = vec![entry_days_ago(now, 0, 6, 5, 5)];
    let unlocked: Vec<bool> = achievements(&one, today)
        .into_iter()
        .map(|(_, unlocked)| unlocked)
        .collect();
    assert_eq!(unlocked, vec![true, false, false, false]);

    // Seven consecutive days unlock Week Warrior; Wellness Warrior
    // stays locked regardless
    let week: Vec<MoodEntry> = (0..7).map(|i| entry_days_ago(now, i, 6, 5, 5)).collect();
    let week_unlocks = achievements(&week, today);
    assert!(week_unlocks[1].1, "Week Warrior should unlock");
    assert!(!week_unlocks[2].1, "Mindful Month needs 30 days");
    assert!(!week_unlocks[3].1, "Wellness Warrior is never derived");

    let month: Vec<MoodEntry> = (0..30).map(|i| entry_days_ago(now, i, 6, 5, 5)).collect();
    assert!(achievements(&month, today)[2].1, "Mindful Month should unlock");
}

#[test]
fn goal_progress_is_derived_from_entries() {
    let now = fixed_now();

    // 21 check-ins this month, low stress, good sleep
    let entries: Vec<MoodEntry> = (0..21).map(|i| entry_days_ago(now, i, 7, 3, 8)).collect();
    let goals = wellness_goals(&entries, now);

    assert_eq!(goals[0].title, "Daily Check-ins");
    assert_eq!(goals[0].current, 21.0);
    assert!(goals[0].on_track, "21/30 days is on track");

    assert_eq!(goals[1].title, "Stress Management");
    assert!(goals[1].on_track, "stress 3 is under the target of 5");

    assert_eq!(goals[2].title, "Sleep Quality");
    assert!(goals[2].on_track, "sleep 8 meets the target");

    // High stress flips the stress goal off track
    let stressed: Vec<MoodEntry> = (0..5).map(|i| entry_days_ago(now, i, 5, 9, 4)).collect();
    let goals = wellness_goals(&stressed, now);
    assert!(!goals[1].on_track);
}

#[test]
fn every_resource_category_appears_in_the_filter_cycle() {
    assert_eq!(category_filter_label(CATEGORY_FILTERS[0]), "All Resources");

    for resource in WELLNESS_RESOURCES {
        assert!(
            CATEGORY_FILTERS.contains(&Some(resource.category)),
            "category {:?} missing from the filter cycle",
            resource.category
        );
    }
}

use mindspace_tui::models::MoodEntry;
use mindspace_tui::recommend::{InsightKind, Priority, insights, recommendations};

fn entry(mood: u8, stress: Option<u8>, sleep: Option<u8>, energy: Option<u8>) -> MoodEntry {
    MoodEntry {
        id: 0,
        date: "2025-06-15T12:00:00+00:00".to_string(),
        mood,
        stress_level: stress,
        sleep_quality: sleep,
        energy,
        note: None,
    }
}

fn entries_of(count: usize, mood: u8) -> Vec<MoodEntry> {
    (0..count).map(|_| entry(mood, None, None, None)).collect()
}

#[test]
fn low_mood_yields_exactly_the_mood_boosting_block() {
    let entries = entries_of(7, 3);

    let recs = recommendations(&entries);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Mood Boosting Activities");
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[0].category, "mental");
    assert_eq!(recs[0].activities.len(), 4);
}

#[test]
fn high_stress_yields_the_stress_management_block() {
    let entries: Vec<MoodEntry> = (0..7)
        .map(|_| entry(6, Some(9), None, None))
        .collect();

    let recs = recommendations(&entries);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Stress Management");
    assert_eq!(recs[0].priority, Priority::High);
}

#[test]
fn comfortable_scores_yield_no_recommendations() {
    let entries: Vec<MoodEntry> = (0..7)
        .map(|_| entry(6, Some(5), Some(6), Some(6)))
        .collect();

    assert!(recommendations(&entries).is_empty());
    assert!(recommendations(&[]).is_empty());
}

#[test]
fn multiple_thresholds_fire_independently() {
    // Low mood, high stress, poor sleep, low energy all at once
    let entries: Vec<MoodEntry> = (0..7)
        .map(|_| entry(2, Some(8), Some(2), Some(2)))
        .collect();

    let recs = recommendations(&entries);
    let titles: Vec<&str> = recs.iter().map(|r| r.title).collect();
    assert_eq!(
        titles,
        vec![
            "Mood Boosting Activities",
            "Stress Management",
            "Sleep Hygiene",
            "Energy Boosters"
        ]
    );
}

#[test]
fn only_the_last_seven_checkins_are_considered() {
    // A rough first week followed by a good recent week
    let mut entries = entries_of(7, 2);
    entries.extend(entries_of(7, 7));

    assert!(recommendations(&entries).is_empty());

    // And the reverse: the recent window drives the result
    let mut entries = entries_of(7, 8);
    entries.extend(entries_of(7, 3));
    let recs = recommendations(&entries);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Mood Boosting Activities");
}

#[test]
fn fewer_than_seven_entries_still_recommend() {
    let entries = entries_of(2, 3);

    let recs = recommendations(&entries);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Mood Boosting Activities");
}

#[test]
fn positive_history_yields_positive_insights() {
    let entries: Vec<MoodEntry> = (0..10)
        .map(|_| entry(8, Some(4), Some(7), Some(8)))
        .collect();

    let cards = insights(&entries);
    let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Great Mental Health", "High Energy Levels"]);
    assert!(cards.iter().all(|c| c.kind == InsightKind::Positive));
}

#[test]
fn struggling_history_yields_concern_and_warnings() {
    let entries: Vec<MoodEntry> = (0..10)
        .map(|_| entry(3, Some(8), Some(3), Some(5)))
        .collect();

    let cards = insights(&entries);
    let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
    assert_eq!(
        titles,
        vec!["Low Mood Pattern", "High Stress Levels", "Poor Sleep Quality"]
    );
    assert_eq!(cards[0].kind, InsightKind::Concern);
    assert_eq!(cards[1].kind, InsightKind::Warning);
}

#[test]
fn middling_history_yields_no_insights() {
    let entries: Vec<MoodEntry> = (0..10)
        .map(|_| entry(5, Some(5), Some(5), Some(5)))
        .collect();

    assert!(insights(&entries).is_empty());
    assert!(insights(&[]).is_empty());
}

#[test]
fn insight_thresholds_sit_at_the_documented_boundaries() {
    // Mean mood exactly 7 counts as positive (>= 7)
    let entries = entries_of(4, 7);
    let titles: Vec<&str> = insights(&entries).iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Great Mental Health"]);

    // Mean stress exactly 7 does not warn (> 7 required)
    let entries: Vec<MoodEntry> = (0..4).map(|_| entry(5, Some(7), None, None)).collect();
    assert!(insights(&entries).is_empty());
}

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::models::{CheckinDraft, mood_label, mood_label_for_average};
use crate::recommend;
use crate::stats::{self, Averages};
use crate::store::{EntryStore, StoreError};

#[derive(Parser)]
#[command(name = "mindspace")]
#[command(about = "Terminal mood journal and wellness dashboard")]
#[command(version)]
pub struct Cli {
    /// Use development mode (uses separate dev config/data)
    #[arg(long)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive TUI (default if no subcommand)
    Tui,
    /// Record a wellness check-in without opening the TUI
    Checkin {
        /// Mood score (1-10)
        mood: u8,
        /// Stress level (1-10)
        #[arg(long)]
        stress: Option<u8>,
        /// Sleep quality (1-10)
        #[arg(long)]
        sleep: Option<u8>,
        /// Energy level (1-10)
        #[arg(long)]
        energy: Option<u8>,
        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },
    /// Print rolling statistics over the recorded check-ins
    Stats,
    /// Write all entries as JSON to a file or stdout
    Export {
        /// Destination file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle the checkin command
pub fn handle_checkin(
    mood: u8,
    stress: Option<u8>,
    sleep: Option<u8>,
    energy: Option<u8>,
    note: Option<String>,
    store: &mut EntryStore,
) -> Result<(), CliError> {
    let draft = CheckinDraft {
        mood,
        stress_level: stress,
        sleep_quality: sleep,
        energy,
        note,
    };

    let entry = store.append(draft)?;
    println!(
        "Check-in recorded (ID: {}, mood: {} - {})",
        entry.id,
        entry.mood,
        mood_label(entry.mood)
    );

    Ok(())
}

/// Handle the stats command
pub fn handle_stats(store: &EntryStore) -> Result<(), CliError> {
    let entries = store.entries();
    if entries.is_empty() {
        println!("No check-ins recorded yet.");
        return Ok(());
    }

    let now = chrono::Utc::now();
    let today = now.date_naive();
    let averages = Averages::over(entries);
    let trend = stats::mood_trend(entries, now);

    println!("Total check-ins:  {}", entries.len());
    println!(
        "Last 7 days:      {}",
        stats::entries_within_days(entries, 7, now).len()
    );
    println!(
        "Last 30 days:     {}",
        stats::entries_within_days(entries, 30, now).len()
    );
    println!(
        "Average mood:     {:.1} ({})",
        averages.mood,
        mood_label_for_average(averages.mood)
    );
    println!("Average stress:   {:.1}", averages.stress);
    println!("Average sleep:    {:.1}", averages.sleep);
    println!("Average energy:   {:.1}", averages.energy);
    println!("Trend:            {}", trend.label());
    if let Some(best) = stats::best_mood(entries) {
        println!("Best day:         {} ({})", best, mood_label(best));
    }
    println!(
        "Current streak:   {} days",
        stats::current_streak(entries, today)
    );

    let recommendations = recommend::recommendations(entries);
    if !recommendations.is_empty() {
        println!();
        println!("Suggestions based on your last {} check-ins:", recommend::RECENT_WINDOW);
        for rec in recommendations {
            println!("  [{}] {}: {}", rec.priority.label(), rec.title, rec.description);
        }
    }

    Ok(())
}

/// Handle the export command
pub fn handle_export(output: Option<String>, store: &EntryStore) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(store.entries())?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("Exported {} entries to {}", store.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::models::{MoodEntry, mood_label, mood_label_for_average};
use crate::stats;
use crate::tui::app::App;
use crate::tui::widgets::color::parse_color;

pub fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.config.get_active_theme();
    let fg = parse_color(&theme.fg);
    let bg = parse_color(&theme.bg);
    let positive = parse_color(&theme.positive);
    let dim = parse_color(&theme.tab_bg);

    let base = Style::default().fg(fg);
    let title_style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(positive).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(dim);

    let entries = app.store.entries();
    let now = chrono::Utc::now();
    let today = now.date_naive();

    let week = stats::entries_within_days(entries, 7, now);
    let weekly_average = stats::mean_mood(week.iter().copied());
    let streak = stats::current_streak(entries, today);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Welcome back!", title_style)));
    match stats::todays_entry(entries, today) {
        Some(entry) => {
            lines.push(Line::from(vec![
                Span::styled("  Feeling ", base),
                Span::styled(mood_label(entry.mood), value_style),
                Span::styled(" today. Great job checking in!", base),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  Ready for your daily check-in?",
                base,
            )));
            lines.push(Line::from(Span::styled(
                "  Take a moment to reflect on how you're feeling (Check-in tab).",
                dim_style,
            )));
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("Weekly Average: ", title_style),
        Span::styled(
            format!("{} ({:.1})", mood_label_for_average(weekly_average), weekly_average),
            value_style,
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Current Streak: ", title_style),
        Span::styled(format!("{} days", streak), value_style),
        Span::styled(if streak > 0 { "  Keep it up!" } else { "" }, dim_style),
    ]));
    lines.push(Line::default());

    let best = match stats::best_mood(entries) {
        Some(score) => mood_label(score).to_string(),
        None => "-".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Total Check-ins: ", base),
        Span::styled(entries.len().to_string(), value_style),
        Span::styled("   This Week: ", base),
        Span::styled(week.len().to_string(), value_style),
        Span::styled("   Best Day: ", base),
        Span::styled(best, value_style),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Recent Check-ins", title_style)));
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No check-ins yet. Start your wellness journey today!",
            dim_style,
        )));
    } else {
        for entry in entries.iter().rev().take(5) {
            lines.push(recent_entry_line(entry, base, value_style, dim_style));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Dashboard")
                .style(Style::default().fg(fg).bg(bg)),
        )
        .style(Style::default().fg(fg).bg(bg))
        .scroll((app.ui.view_scroll, 0));

    f.render_widget(paragraph, area);
}

fn recent_entry_line(
    entry: &MoodEntry,
    base: Style,
    value_style: Style,
    dim_style: Style,
) -> Line<'static> {
    let date = stats::parse_entry_date(entry)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| entry.date.clone());

    let mut spans = vec![
        Span::styled(format!("  {}  ", date), base),
        Span::styled(format!("{:<10}", mood_label(entry.mood)), value_style),
    ];

    if let Some(note) = &entry.note {
        let preview: String = note.chars().take(40).collect();
        let suffix = if note.chars().count() > 40 { "…" } else { "" };
        spans.push(Span::styled(
            format!("  \"{}{}\"", preview, suffix),
            dim_style.add_modifier(Modifier::ITALIC),
        ));
    }

    Line::from(spans)
}

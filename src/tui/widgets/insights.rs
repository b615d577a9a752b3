use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::recommend::{self, InsightKind};
use crate::resources::{PATTERN_CARDS, PATTERN_SECTION_MIN_ENTRIES};
use crate::stats::{self, Trend};
use crate::tui::app::App;
use crate::tui::widgets::color::parse_color;

pub fn render_insights(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.config.get_active_theme();
    let fg = parse_color(&theme.fg);
    let bg = parse_color(&theme.bg);
    let positive = parse_color(&theme.positive);
    let warning = parse_color(&theme.warning);
    let concern = parse_color(&theme.concern);
    let dim = parse_color(&theme.tab_bg);

    let base = Style::default().fg(fg);
    let title_style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(dim);

    let entries = app.store.entries();
    let now = chrono::Utc::now();
    let month = stats::entries_within_days(entries, 30, now);
    let trend = stats::mood_trend(entries, now);

    let trend_color = match trend {
        Trend::Improving => positive,
        Trend::Declining => concern,
        Trend::Stable => fg,
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Mood Trend Analysis", title_style)));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", trend.label()),
            Style::default().fg(trend_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", trend.summary()), base),
    ]));

    // Compact strip of the last seven check-ins in the 30-day window
    let last_seven = &month[month.len().saturating_sub(7)..];
    if !last_seven.is_empty() {
        let mut spans = vec![Span::styled("  ", base)];
        for entry in last_seven {
            let weekday = stats::parse_entry_date(entry)
                .map(|d| d.format("%a").to_string())
                .unwrap_or_else(|| "?".to_string());
            spans.push(Span::styled(format!("{} ", weekday), dim_style));
            spans.push(Span::styled(
                format!("{}  ", entry.mood),
                Style::default().fg(trend_color).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Quick Stats", title_style)));
    let average_text = if entries.is_empty() {
        "N/A".to_string()
    } else {
        format!("{:.1}", stats::mean_mood(entries))
    };
    lines.push(Line::from(vec![
        Span::styled("  Total Check-ins: ", base),
        Span::styled(entries.len().to_string(), title_style),
        Span::styled("   This Month: ", base),
        Span::styled(month.len().to_string(), title_style),
        Span::styled("   Average Mood: ", base),
        Span::styled(average_text, title_style),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Insights", title_style)));
    let insights = recommend::insights(entries);
    if insights.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Start tracking your mood to see personalized insights!",
            dim_style,
        )));
    } else {
        for insight in insights {
            let kind_color = match insight.kind {
                InsightKind::Positive => positive,
                InsightKind::Warning => warning,
                InsightKind::Concern => concern,
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", insight.title),
                Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("    {}", insight.message),
                base,
            )));
        }
    }

    if entries.len() > PATTERN_SECTION_MIN_ENTRIES {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Pattern Analysis", title_style)));
        for card in PATTERN_CARDS {
            lines.push(Line::from(Span::styled(
                format!("  {}", card.title),
                Style::default().fg(positive).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(format!("    {}", card.body), base)));
            lines.push(Line::from(Span::styled(
                format!("    {}", card.correlation),
                dim_style,
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Wellness Insights")
                .style(Style::default().fg(fg).bg(bg)),
        )
        .style(Style::default().fg(fg).bg(bg))
        .wrap(Wrap { trim: false })
        .scroll((app.ui.view_scroll, 0));

    f.render_widget(paragraph, area);
}

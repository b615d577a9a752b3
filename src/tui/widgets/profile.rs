use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::config::privacy_description;
use crate::resources::{achievements, wellness_goals};
use crate::tui::app::App;
use crate::tui::widgets::color::parse_color;

pub fn render_profile(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.config.get_active_theme();
    let fg = parse_color(&theme.fg);
    let bg = parse_color(&theme.bg);
    let positive = parse_color(&theme.positive);
    let warning = parse_color(&theme.warning);
    let dim = parse_color(&theme.tab_bg);

    let base = Style::default().fg(fg);
    let title_style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(dim);

    let entries = app.store.entries();
    let now = chrono::Utc::now();
    let today = now.date_naive();
    let prefs = &app.config.preferences;

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Preferences", title_style)));
    lines.push(toggle_line(
        "Push Notifications",
        "Get notified about check-in reminders",
        prefs.notifications,
        "n",
        base,
        positive,
        dim_style,
    ));
    lines.push(toggle_line(
        "Daily Reminders",
        "Remind me to check in daily",
        prefs.daily_reminder,
        "r",
        base,
        positive,
        dim_style,
    ));
    lines.push(Line::from(vec![
        Span::styled("  Data Privacy: ", base),
        Span::styled(
            privacy_description(&prefs.privacy),
            Style::default().fg(positive),
        ),
        Span::styled("  (p to change)", dim_style),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Achievements", title_style)));
    for (achievement, unlocked) in achievements(entries, today) {
        let (marker, style) = if unlocked {
            ("[unlocked]", Style::default().fg(warning).add_modifier(Modifier::BOLD))
        } else {
            ("[locked]  ", dim_style)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), style),
            Span::styled(
                achievement.title,
                if unlocked { style } else { dim_style },
            ),
            Span::styled(
                format!("  {}", achievement.description),
                if unlocked { base } else { dim_style },
            ),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Wellness Goals", title_style)));
    for goal in wellness_goals(entries, now) {
        let goal_color = if goal.on_track { positive } else { warning };
        let progress = (goal.current / goal.target).clamp(0.0, 1.0);
        let filled = (progress * 20.0).round() as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(20 - filled);
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", goal.title), base),
            Span::styled(bar, Style::default().fg(goal_color)),
            Span::styled(
                format!(" {:.1}/{} {}", goal.current, goal.target, goal.unit),
                Style::default().fg(goal_color),
            ),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Your Data", title_style)));
    lines.push(Line::from(Span::styled(
        "  Entries stay local. Run 'mindspace export' to download your wellness \
         data as JSON.",
        dim_style,
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Profile")
                .style(Style::default().fg(fg).bg(bg)),
        )
        .style(Style::default().fg(fg).bg(bg))
        .wrap(Wrap { trim: false })
        .scroll((app.ui.view_scroll, 0));

    f.render_widget(paragraph, area);
}

fn toggle_line(
    title: &'static str,
    description: &'static str,
    enabled: bool,
    key: &'static str,
    base: Style,
    positive: ratatui::style::Color,
    dim_style: Style,
) -> Line<'static> {
    let marker = if enabled { "[on] " } else { "[off]" };
    let marker_style = if enabled {
        Style::default().fg(positive).add_modifier(Modifier::BOLD)
    } else {
        dim_style
    };
    Line::from(vec![
        Span::styled(format!("  {} ", marker), marker_style),
        Span::styled(title, base),
        Span::styled(format!("  {} ({} to toggle)", description, key), dim_style),
    ])
}

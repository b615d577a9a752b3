use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::recommend::{self, Priority};
use crate::resources::{
    CRISIS_REMINDER, CRISIS_RESOURCES, WELLNESS_RESOURCES, category_filter_label,
};
use crate::tui::app::App;
use crate::tui::widgets::color::parse_color;
use crate::utils::format_key_binding_for_display;

pub fn render_wellness(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.config.get_active_theme();
    let fg = parse_color(&theme.fg);
    let bg = parse_color(&theme.bg);
    let positive = parse_color(&theme.positive);
    let warning = parse_color(&theme.warning);
    let concern = parse_color(&theme.concern);
    let dim = parse_color(&theme.tab_bg);
    let highlight = parse_color(&theme.highlight_bg);

    let base = Style::default().fg(fg);
    let title_style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(dim);

    let entries = app.store.entries();
    let mut lines: Vec<Line> = Vec::new();

    // Personalized recommendations from the last seven check-ins
    let recommendations = recommend::recommendations(entries);
    if !recommendations.is_empty() {
        lines.push(Line::from(Span::styled("Personalized for You", title_style)));
        for rec in &recommendations {
            let priority_color = match rec.priority {
                Priority::High => concern,
                Priority::Medium => warning,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}", rec.title),
                    Style::default().fg(highlight).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{} priority]", rec.priority.label()),
                    Style::default().fg(priority_color),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", rec.description),
                base,
            )));
            for activity in rec.activities {
                lines.push(Line::from(Span::styled(format!("    - {}", activity), base)));
            }
        }
        lines.push(Line::default());
    }

    // Resource catalog with the active category filter
    let filter = app.category_filter();
    lines.push(Line::from(vec![
        Span::styled("Resources: ", title_style),
        Span::styled(
            category_filter_label(filter),
            Style::default().fg(highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  ({} to change)",
                format_key_binding_for_display(&app.config.key_bindings.category)
            ),
            dim_style,
        ),
    ]));

    for resource in WELLNESS_RESOURCES
        .iter()
        .filter(|r| filter.is_none_or(|c| r.category == c))
    {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", resource.title), title_style),
            Span::styled(
                format!("  [{} | {}]", resource.duration, resource.format),
                dim_style,
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", resource.description),
            base,
        )));
    }
    lines.push(Line::default());

    // Crisis support
    lines.push(Line::from(Span::styled(
        "Crisis Support Resources",
        Style::default().fg(concern).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  If you're experiencing a mental health crisis or having thoughts of \
         self-harm, please reach out for immediate help.",
        base,
    )));
    for resource in CRISIS_RESOURCES {
        let mut spans = vec![Span::styled(
            format!("  {}", resource.name),
            if resource.urgent {
                Style::default().fg(concern).add_modifier(Modifier::BOLD)
            } else {
                title_style
            },
        )];
        if resource.urgent {
            spans.push(Span::styled(
                " [URGENT]",
                Style::default().fg(concern).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(vec![
            Span::styled(format!("    {}", resource.contact), Style::default().fg(positive)),
            Span::styled(format!("  {}", resource.description), dim_style),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(format!("  {}", CRISIS_REMINDER), dim_style)));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Wellness Resources")
                .style(Style::default().fg(fg).bg(bg)),
        )
        .style(Style::default().fg(fg).bg(bg))
        .wrap(Wrap { trim: false })
        .scroll((app.ui.view_scroll, 0));

    f.render_widget(paragraph, area);
}

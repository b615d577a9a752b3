use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::Config;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

/// One-line status bar: a transient highlighted message when present,
/// otherwise as many key hints as fit the width.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    message: Option<&String>,
    key_hints: &[String],
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    let max_width = area.width as usize;

    let (content, style) = if let Some(msg) = message {
        let msg_fg = get_contrast_text_color(highlight_bg);
        (
            truncate_with_ellipsis(msg, max_width),
            Style::default()
                .fg(msg_fg)
                .bg(highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            fit_hints(key_hints, max_width),
            Style::default().fg(fg_color).bg(bg_color),
        )
    };

    let paragraph = Paragraph::new(content).style(style);
    f.render_widget(paragraph, area);
}

/// Join hints with bullet separators, dropping trailing hints (with an
/// ellipsis marker) once the width runs out.
fn fit_hints(hints: &[String], max_width: usize) -> String {
    const SEPARATOR: &str = " • ";
    const ELLIPSIS: &str = "…";

    let mut text = String::new();
    for (i, hint) in hints.iter().enumerate() {
        let candidate_len = if i == 0 {
            hint.chars().count()
        } else {
            text.chars().count() + SEPARATOR.chars().count() + hint.chars().count()
        };

        if candidate_len > max_width {
            if text.chars().count() + 1 <= max_width {
                text.push_str(ELLIPSIS);
            }
            break;
        }

        if i > 0 {
            text.push_str(SEPARATOR);
        }
        text.push_str(hint);
    }

    if text.is_empty() {
        if let Some(first) = hints.first() {
            text = truncate_with_ellipsis(first, max_width);
        }
    }
    text
}

fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_width.saturating_sub(1)).collect();
    out.push('…');
    out
}

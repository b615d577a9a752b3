use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::models::{SCALE_MAX, SCALE_MIN, mood_label};
use crate::tui::app::{App, CheckinField, Mode};
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

/// Sub-areas of the check-in view: mood selector, slider row, note.
/// Shared with the event loop so editor scrolling can use the real
/// viewport height.
pub fn checkin_areas(area: Rect) -> (Rect, Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Mood selector
            Constraint::Length(3), // Stress / sleep / energy sliders
            Constraint::Min(4),    // Note editor
        ])
        .split(area);
    (vertical[0], vertical[1], vertical[2])
}

pub fn render_checkin(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.config.get_active_theme();
    let fg = parse_color(&theme.fg);
    let bg = parse_color(&theme.bg);
    let highlight_bg = parse_color(&theme.highlight_bg);
    let highlight_fg = get_contrast_text_color(highlight_bg);

    let editing = app.ui.mode == Mode::Checkin;
    let base_style = Style::default().fg(fg).bg(bg);

    // Border style marking the field that has focus
    let field_border = |field: CheckinField| -> Style {
        if editing && app.form.current_field == field {
            Style::default().fg(highlight_bg).bg(bg)
        } else {
            base_style
        }
    };

    let (mood_area, sliders_area, note_area) = checkin_areas(area);

    // Mood selector: the ten scores on one line, the label underneath
    let mut score_spans: Vec<Span> = Vec::new();
    for score in SCALE_MIN..=SCALE_MAX {
        let selected = app.form.mood == Some(score);
        let style = if selected {
            Style::default()
                .fg(highlight_fg)
                .bg(highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            base_style
        };
        score_spans.push(Span::styled(format!(" {:>2} ", score), style));
    }

    let label_line = match app.form.mood {
        Some(score) => Line::from(Span::styled(
            format!("  {}", mood_label(score)),
            Style::default().fg(highlight_bg).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            if editing {
                "  Pick a score with Left/Right or 1-9, 0"
            } else {
                "  Press Enter to start your daily check-in"
            },
            base_style,
        )),
    };

    let mood_paragraph = Paragraph::new(vec![Line::from(score_spans), label_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("How are you feeling overall?")
                .style(field_border(CheckinField::Mood)),
        )
        .style(base_style);
    f.render_widget(mood_paragraph, mood_area);

    // Slider row: three gauges side by side
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(sliders_area);

    let sliders = [
        ("Stress Level", app.form.stress, CheckinField::Stress),
        ("Sleep Quality", app.form.sleep, CheckinField::Sleep),
        ("Energy Level", app.form.energy, CheckinField::Energy),
    ];

    for (i, (title, value, field)) in sliders.into_iter().enumerate() {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .style(field_border(field)),
            )
            .gauge_style(Style::default().fg(highlight_bg).bg(bg))
            .ratio(value as f64 / SCALE_MAX as f64)
            .label(format!("{}/10", value));
        f.render_widget(gauge, columns[i]);
    }

    // Note editor
    let viewport_height = note_area.height.saturating_sub(2) as usize;
    let content_width = note_area.width.saturating_sub(2) as usize;
    let note_lines: Vec<Line> = if !editing && app.form.note.is_empty() {
        vec![Line::from(Span::styled(
            "How was your day? Any specific thoughts or feelings you'd like to record?",
            Style::default().fg(parse_color(&theme.tab_bg)),
        ))]
    } else {
        app.form
            .note
            .visible_lines(viewport_height, content_width)
            .into_iter()
            .map(Line::from)
            .collect()
    };

    let note_paragraph = Paragraph::new(note_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Additional Notes (Optional)")
                .style(field_border(CheckinField::Note)),
        )
        .style(base_style);
    f.render_widget(note_paragraph, note_area);

    // Terminal cursor inside the note while it has focus
    if editing && app.form.current_field == CheckinField::Note {
        if let Some((x, y)) = app.form.note.cursor_screen_pos(note_area) {
            f.set_cursor_position(ratatui::layout::Position::new(x, y));
        }
    }
}

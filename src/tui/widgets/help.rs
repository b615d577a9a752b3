use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::tui::widgets::color::parse_color;
use crate::utils::format_key_binding_for_display;

pub fn render_help(f: &mut Frame, area: Rect, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    let popup_area = popup_area(area, 60, 70);

    // Clear the background so content below does not bleed through
    f.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text(config))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Key Bindings")
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

/// Centered rect taking a percentage of the available area, following
/// the ratatui popup example.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn build_help_text(config: &Config) -> String {
    let kb = &config.key_bindings;
    let mut text = String::new();

    text.push_str("Navigation:\n");
    text.push_str(&format!(
        "  {} / {}: Switch tabs\n",
        format_key_binding_for_display(&kb.tab_left),
        format_key_binding_for_display(&kb.tab_right)
    ));
    text.push_str(&format!(
        "  {}-{}: Jump to tab\n",
        format_key_binding_for_display(&kb.tab_1),
        format_key_binding_for_display(&kb.tab_5)
    ));
    text.push_str(&format!(
        "  {} / {}: Scroll view\n",
        format_key_binding_for_display(&kb.scroll_up),
        format_key_binding_for_display(&kb.scroll_down)
    ));
    text.push('\n');

    text.push_str("Check-in:\n");
    text.push_str("  Enter or e (Check-in tab): Start a check-in\n");
    text.push_str("  Tab / Shift+Tab: Next / previous field\n");
    text.push_str("  Left / Right: Adjust score\n");
    text.push_str("  1-9, 0: Set score directly (0 = 10)\n");
    text.push_str(&format!(
        "  {}: Submit check-in\n",
        format_key_binding_for_display(&kb.submit)
    ));
    text.push_str("  Ctrl+v: Paste into the note\n");
    text.push_str("  Esc: Cancel\n");
    text.push('\n');

    text.push_str("Wellness & Profile:\n");
    text.push_str(&format!(
        "  {}: Cycle resource category (Wellness tab)\n",
        format_key_binding_for_display(&kb.category)
    ));
    text.push_str("  r: Toggle daily reminder (Profile tab)\n");
    text.push_str("  n: Toggle notifications (Profile tab)\n");
    text.push_str("  p: Cycle privacy mode (Profile tab)\n");
    text.push('\n');

    text.push_str("General:\n");
    text.push_str(&format!(
        "  {}: Quit\n",
        format_key_binding_for_display(&kb.quit)
    ));
    text.push_str(&format!(
        "  {}: Show/hide help\n",
        format_key_binding_for_display(&kb.help)
    ));

    text
}

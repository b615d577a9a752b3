use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::tui::app::{Mode, Tab};
use crate::tui::widgets::{
    checkin::render_checkin, color::parse_color, dashboard::render_dashboard, help::render_help,
    insights::render_insights, profile::render_profile, status_bar::render_status_bar,
    tabs::render_tabs, wellness::render_wellness,
};
use crate::tui::{App, Layout};
use crate::utils::format_key_binding_for_display;

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    // Outer border with the app title centered in the top edge
    let active_theme = app.config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("MindSpace")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(outer_block, f.area());

    render_tabs(f, layout.tabs_area, app.ui.current_tab, &app.config);

    match app.ui.current_tab {
        Tab::Dashboard => render_dashboard(f, layout.main_area, app),
        Tab::Checkin => render_checkin(f, layout.main_area, app),
        Tab::Insights => render_insights(f, layout.main_area, app),
        Tab::Wellness => render_wellness(f, layout.main_area, app),
        Tab::Profile => render_profile(f, layout.main_area, app),
    }

    // Help popup overlays the normal content
    if app.ui.mode == Mode::Help {
        render_help(f, f.area(), &app.config);
    }

    let key_hints = get_key_hints(app);
    render_status_bar(
        f,
        layout.status_area,
        app.status.message.as_ref(),
        &key_hints,
        &app.config,
    );
}

fn get_key_hints(app: &App) -> Vec<String> {
    let kb = &app.config.key_bindings;

    match app.ui.mode {
        Mode::Help => {
            vec![format!(
                "Esc or {}: Exit help",
                format_key_binding_for_display(&kb.help)
            )]
        }
        Mode::Checkin => {
            vec![
                "Tab/Enter: Next field".to_string(),
                "Shift+Tab: Previous field".to_string(),
                "Left/Right: Adjust".to_string(),
                format!("{}: Submit", format_key_binding_for_display(&kb.submit)),
                "Esc: Cancel".to_string(),
            ]
        }
        Mode::View => {
            let mut hints = Vec::new();

            match app.ui.current_tab {
                Tab::Checkin => hints.push("Enter: Start check-in".to_string()),
                Tab::Wellness => hints.push(format!(
                    "{}: Category",
                    format_key_binding_for_display(&kb.category)
                )),
                Tab::Profile => {
                    hints.push("r: Reminders".to_string());
                    hints.push("n: Notifications".to_string());
                    hints.push("p: Privacy".to_string());
                }
                _ => {}
            }

            hints.push(format!("{}: Quit", format_key_binding_for_display(&kb.quit)));
            hints.push(format!(
                "{}/{}: Switch tabs",
                format_key_binding_for_display(&kb.tab_left),
                format_key_binding_for_display(&kb.tab_right)
            ));
            hints.push(format!(
                "{}/{}: Scroll",
                format_key_binding_for_display(&kb.scroll_up),
                format_key_binding_for_display(&kb.scroll_down)
            ));
            hints.push(format!("{}: Help", format_key_binding_for_display(&kb.help)));

            hints
        }
    }
}

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    size as terminal_size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use std::io;

use crate::tui::app::{App, CheckinField, Mode, Tab};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;
use crate::tui::widgets::checkin::checkin_areas;
use crate::utils::{has_primary_modifier, parse_key_binding};

/// Guard that restores the terminal state even on panic. A TUI that
/// leaves the terminal in raw mode or the alternate screen makes the
/// user's shell unusable.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    /// Restore terminal state on normal exit; drop then becomes a no-op.
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Cleanup path: errors are ignored on purpose
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check the terminal size before entering the alternate screen so
    // the error message lands in the normal terminal
    let (width, height) = terminal_size()?;
    let min_width_with_border = Layout::MIN_WIDTH + 2;
    let min_height_with_border = Layout::MIN_HEIGHT + 2;

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, minimum required: {}x{}. \
             Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        app.check_status_message_timeout();

        // Keep the note editor's scroll in step with its viewport
        if app.ui.mode == Mode::Checkin && app.form.current_field == CheckinField::Note {
            let size = terminal.size()?;
            let layout = Layout::calculate(Rect::new(0, 0, size.width, size.height));
            let (_, _, note_area) = checkin_areas(layout.main_area);
            let viewport_height = note_area.height.saturating_sub(2) as usize;
            app.form.note.update_scroll(viewport_height);
        }

        let size = terminal.size()?;
        let terminal_rect = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| {
            let layout = Layout::calculate(terminal_rect);
            crate::tui::render::render(f, &mut app, &layout);
        })?;

        // Only process Press events to avoid double-handling on Windows
        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Press {
                        if handle_key_event(&mut app, key_event) {
                            break;
                        }
                    }
                }
                Event::Resize(_, _) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }
    }

    guard.restore()?;

    Ok(())
}

/// True when the key event matches the configured binding string.
fn matches_binding(binding: &str, key: KeyEvent) -> bool {
    match parse_key_binding(binding) {
        Ok(parsed) => {
            parsed.key_code == key.code
                && parsed.requires_ctrl == has_primary_modifier(key.modifiers)
        }
        Err(_) => false,
    }
}

/// Returns true when the application should quit.
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match app.ui.mode {
        Mode::Help => handle_help_mode(app, key),
        Mode::Checkin => handle_checkin_mode(app, key),
        Mode::View => return handle_view_mode(app, key),
    }
    false
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc || matches_binding(&app.config.key_bindings.help, key) {
        app.ui.mode = Mode::View;
    }
}

fn handle_view_mode(app: &mut App, key: KeyEvent) -> bool {
    let kb = app.config.key_bindings.clone();

    if matches_binding(&kb.quit, key) {
        return true;
    }
    if matches_binding(&kb.help, key) {
        app.ui.mode = Mode::Help;
        return false;
    }

    if matches_binding(&kb.tab_left, key) {
        app.prev_tab();
        return false;
    }
    if matches_binding(&kb.tab_right, key) {
        app.next_tab();
        return false;
    }

    let tab_jumps = [
        (&kb.tab_1, Tab::Dashboard),
        (&kb.tab_2, Tab::Checkin),
        (&kb.tab_3, Tab::Insights),
        (&kb.tab_4, Tab::Wellness),
        (&kb.tab_5, Tab::Profile),
    ];
    for (binding, tab) in tab_jumps {
        if matches_binding(binding, key) {
            app.goto_tab(tab);
            return false;
        }
    }

    if matches_binding(&kb.scroll_up, key) || key.code == KeyCode::Up {
        app.scroll_up();
        return false;
    }
    if matches_binding(&kb.scroll_down, key) || key.code == KeyCode::Down {
        app.scroll_down();
        return false;
    }

    // Tab-specific actions
    match app.ui.current_tab {
        Tab::Checkin => {
            if key.code == KeyCode::Enter || key.code == KeyCode::Char('e') {
                app.enter_checkin_mode();
            }
        }
        Tab::Wellness => {
            if matches_binding(&kb.category, key) {
                app.cycle_category();
            }
        }
        Tab::Profile => match key.code {
            KeyCode::Char('r') => app.toggle_daily_reminder(),
            KeyCode::Char('n') => app.toggle_notifications(),
            KeyCode::Char('p') => app.cycle_privacy(),
            _ => {}
        },
        _ => {}
    }

    false
}

fn handle_checkin_mode(app: &mut App, key: KeyEvent) {
    if matches_binding(&app.config.key_bindings.submit, key) {
        app.submit_checkin();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.exit_checkin_mode();
            return;
        }
        KeyCode::Tab => {
            app.form.current_field = app.form.current_field.next();
            return;
        }
        KeyCode::BackTab => {
            app.form.current_field = app.form.current_field.previous();
            return;
        }
        _ => {}
    }

    if app.form.current_field == CheckinField::Note {
        handle_note_key(app, key);
    } else {
        handle_score_key(app, key);
    }
}

/// Keys on the mood selector and the three sliders.
fn handle_score_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Down => {
            app.form.current_field = app.form.current_field.next();
        }
        KeyCode::Up => {
            app.form.current_field = app.form.current_field.previous();
        }
        KeyCode::Left | KeyCode::Char('h') => app.adjust_current_score(-1),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_current_score(1),
        KeyCode::Char(c @ '1'..='9') => {
            app.set_current_score(c as u8 - b'0');
        }
        // 0 selects the top score
        KeyCode::Char('0') => app.set_current_score(10),
        _ => {}
    }
}

fn handle_note_key(app: &mut App, key: KeyEvent) {
    // Clipboard paste into the note
    if key.code == KeyCode::Char('v') && has_primary_modifier(key.modifiers) {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            if let Ok(text) = clipboard.get_text() {
                app.form.note.insert_str(&text);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.form.note.insert_newline(),
        KeyCode::Backspace => app.form.note.delete_char(),
        KeyCode::Left => app.form.note.move_cursor_left(),
        KeyCode::Right => app.form.note.move_cursor_right(),
        KeyCode::Up => app.form.note.move_cursor_up(),
        KeyCode::Down => app.form.note.move_cursor_down(),
        KeyCode::Home => app.form.note.move_cursor_home(),
        KeyCode::End => app.form.note.move_cursor_end(),
        KeyCode::Char(c) => {
            if !has_primary_modifier(key.modifiers) {
                app.form.note.insert_char(c);
            }
        }
        _ => {}
    }
}

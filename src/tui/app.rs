use std::time::{Duration, Instant};

use crate::models::{CheckinDraft, NEUTRAL_SCORE, SCALE_MAX, SCALE_MIN};
use crate::resources::{CATEGORY_FILTERS, ResourceCategory};
use crate::tui::widgets::editor::Editor;
use crate::utils::Profile;
use crate::{Config, EntryStore};

/// How long a transient status message stays visible.
const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Checkin,
    Insights,
    Wellness,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Checkin,
        Tab::Insights,
        Tab::Wellness,
        Tab::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Checkin => "Check-in",
            Tab::Insights => "Insights",
            Tab::Wellness => "Wellness",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing views; keys navigate tabs and scroll.
    View,
    /// The check-in form has focus; keys edit the form.
    Checkin,
    /// Help popup overlay.
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinField {
    Mood,
    Stress,
    Sleep,
    Energy,
    Note,
}

impl CheckinField {
    const ORDER: [CheckinField; 5] = [
        CheckinField::Mood,
        CheckinField::Stress,
        CheckinField::Sleep,
        CheckinField::Energy,
        CheckinField::Note,
    ];

    pub fn next(&self) -> CheckinField {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> CheckinField {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the check-in form. Sliders start at the neutral midpoint
/// like the original form; the mood score has no default because
/// submission requires an explicit choice.
#[derive(Debug, Clone)]
pub struct CheckinForm {
    pub current_field: CheckinField,
    pub mood: Option<u8>,
    pub stress: u8,
    pub sleep: u8,
    pub energy: u8,
    pub note: Editor,
}

impl CheckinForm {
    pub fn new() -> Self {
        Self {
            current_field: CheckinField::Mood,
            mood: None,
            stress: NEUTRAL_SCORE,
            sleep: NEUTRAL_SCORE,
            energy: NEUTRAL_SCORE,
            note: Editor::new(),
        }
    }
}

impl Default for CheckinForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub current_tab: Tab,
    pub mode: Mode,
    /// Vertical scroll of the current view's content.
    pub view_scroll: u16,
    /// Index into CATEGORY_FILTERS for the wellness view.
    pub category_index: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Dashboard,
            mode: Mode::View,
            view_scroll: 0,
            category_index: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: Option<String>,
    pub message_time: Option<Instant>,
}

pub struct App {
    pub config: Config,
    pub store: EntryStore,
    pub profile: Profile,

    pub ui: UiState,
    pub status: StatusState,
    pub form: CheckinForm,
}

impl App {
    pub fn new(config: Config, store: EntryStore, profile: Profile) -> Self {
        Self {
            config,
            store,
            profile,
            ui: UiState::default(),
            status: StatusState::default(),
            form: CheckinForm::new(),
        }
    }

    pub fn goto_tab(&mut self, tab: Tab) {
        if self.ui.current_tab != tab {
            self.ui.current_tab = tab;
            self.ui.view_scroll = 0;
        }
    }

    pub fn next_tab(&mut self) {
        let idx = self.ui.current_tab.index();
        self.goto_tab(Tab::ALL[(idx + 1) % Tab::ALL.len()]);
    }

    pub fn prev_tab(&mut self) {
        let idx = self.ui.current_tab.index();
        self.goto_tab(Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]);
    }

    pub fn scroll_up(&mut self) {
        self.ui.view_scroll = self.ui.view_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.ui.view_scroll = self.ui.view_scroll.saturating_add(1);
    }

    /// Active category filter on the wellness view; `None` shows all.
    pub fn category_filter(&self) -> Option<ResourceCategory> {
        CATEGORY_FILTERS[self.ui.category_index % CATEGORY_FILTERS.len()]
    }

    pub fn cycle_category(&mut self) {
        self.ui.category_index = (self.ui.category_index + 1) % CATEGORY_FILTERS.len();
    }

    pub fn enter_checkin_mode(&mut self) {
        self.ui.current_tab = Tab::Checkin;
        self.ui.mode = Mode::Checkin;
    }

    pub fn exit_checkin_mode(&mut self) {
        self.ui.mode = Mode::View;
    }

    /// Submit the check-in form. Blocked until a mood score has been
    /// selected; everything else has a usable default.
    pub fn submit_checkin(&mut self) {
        let Some(mood) = self.form.mood else {
            self.set_status_message("Select a mood score before submitting".to_string());
            return;
        };

        let note = self.form.note.to_string();
        let draft = CheckinDraft {
            mood,
            stress_level: Some(self.form.stress),
            sleep_quality: Some(self.form.sleep),
            energy: Some(self.form.energy),
            note: if note.trim().is_empty() { None } else { Some(note) },
        };

        match self.store.append(draft) {
            Ok(_) => {
                self.form = CheckinForm::new();
                self.ui.mode = Mode::View;
                self.set_status_message(
                    "Check-in recorded. Keep taking care of yourself!".to_string(),
                );
            }
            Err(e) => {
                self.set_status_message(format!("Failed to save check-in: {}", e));
            }
        }
    }

    /// Adjust the slider or mood selector on the current form field.
    pub fn adjust_current_score(&mut self, delta: i8) {
        let step = |value: u8| -> u8 {
            let next = value as i16 + delta as i16;
            next.clamp(SCALE_MIN as i16, SCALE_MAX as i16) as u8
        };

        match self.form.current_field {
            CheckinField::Mood => {
                // First adjustment starts the selector at the midpoint
                match self.form.mood {
                    Some(current) => self.form.mood = Some(step(current)),
                    None => self.form.mood = Some(NEUTRAL_SCORE),
                }
            }
            CheckinField::Stress => self.form.stress = step(self.form.stress),
            CheckinField::Sleep => self.form.sleep = step(self.form.sleep),
            CheckinField::Energy => self.form.energy = step(self.form.energy),
            CheckinField::Note => {}
        }
    }

    /// Set the current form field's score directly (digit keys).
    pub fn set_current_score(&mut self, value: u8) {
        let value = value.clamp(SCALE_MIN, SCALE_MAX);
        match self.form.current_field {
            CheckinField::Mood => self.form.mood = Some(value),
            CheckinField::Stress => self.form.stress = value,
            CheckinField::Sleep => self.form.sleep = value,
            CheckinField::Energy => self.form.energy = value,
            CheckinField::Note => {}
        }
    }

    pub fn toggle_daily_reminder(&mut self) {
        self.config.preferences.daily_reminder = !self.config.preferences.daily_reminder;
        self.save_preferences();
    }

    pub fn toggle_notifications(&mut self) {
        self.config.preferences.notifications = !self.config.preferences.notifications;
        self.save_preferences();
    }

    pub fn cycle_privacy(&mut self) {
        self.config.cycle_privacy();
        self.save_preferences();
    }

    fn save_preferences(&mut self) {
        if let Err(e) = self.config.save_with_profile(self.profile) {
            self.set_status_message(format!("Failed to save preferences: {}", e));
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status.message = Some(message);
        self.status.message_time = Some(Instant::now());
    }

    /// Clear the status message after its timeout elapses.
    pub fn check_status_message_timeout(&mut self) {
        if let Some(time) = self.status.message_time {
            if time.elapsed() >= STATUS_MESSAGE_TIMEOUT {
                self.status.message = None;
                self.status.message_time = None;
            }
        }
    }
}

//! Application state and core logic

use crate::api::PredictionClient;
use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, LeafField, SplashState, SubmissionState, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// HTTP client for the prediction service
    pub client: PredictionClient,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(config: &TuiConfig) -> Self {
        let mut state = AppState::default();

        state.leaves = if config.leaves_enabled() {
            LeafField::new(config.leaf_count.unwrap_or(LeafField::DEFAULT_COUNT))
        } else {
            LeafField::disabled()
        };

        let splash_state = if config.splash_enabled() {
            state.current_view = View::Splash;
            Some(SplashState::new())
        } else {
            None
        };

        Self {
            state,
            client: PredictionClient::new(),
            quit: false,
            copy_message: None,
            splash_state,
            terminal_size: None,
        }
    }

    /// Update splash animation state.
    /// Returns true if the animation completed and the form took over.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Form;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Any key skips the splash
        if self.in_splash() {
            if let Some(ref mut splash) = self.splash_state {
                splash.skip();
            }
            self.update_splash(self.terminal_size.map(|(h, _)| h).unwrap_or(24));
            return Ok(());
        }

        self.copy_message = None;

        match self.state.current_view {
            View::Info => self.handle_info_key(key),
            View::Form => self.handle_form_key(key).await?,
            View::Splash => {}
        }
        Ok(())
    }

    fn handle_info_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter => {
                self.state.current_view = View::Form;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Copy shortcut first so the char doesn't land in a field
        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('y') {
            self.copy_prediction()?;
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => self.state.current_view = View::Info,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => self.submit().await,
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, if it passes, run one exchange against the
    /// prediction service. The event loop awaits the request inline; the
    /// controller suppresses any overlapping trigger.
    async fn submit(&mut self) {
        let values = self.state.form.values();
        let outcome = self.state.submission.submit(&values, &self.client).await;

        match outcome {
            SubmitOutcome::Invalid(result) => {
                self.state.form.apply_errors(&result);
                self.state.status_message = Some("Please fix the highlighted fields".to_string());
            }
            SubmitOutcome::Suppressed => {}
            SubmitOutcome::Completed => {
                self.state.form.clear_errors();
                self.state.status_message = None;
            }
        }
    }

    /// Copy the recommended crop to the system clipboard
    fn copy_prediction(&mut self) -> Result<()> {
        if let SubmissionState::Success { predicted_crop } = self.state.submission.state() {
            let crop = predicted_crop.clone();
            self.copy_to_clipboard(&crop)?;
            self.copy_message = Some(format!("Copied \"{crop}\" to clipboard"));
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

//! Application state definitions

use crate::state::form::CropForm;
use crate::state::leaves::LeafField;
use crate::state::submission::SubmissionController;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    /// Measurement input form
    #[default]
    Form,
    /// "Why crop selection matters" educational panel
    Info,
}

/// Aggregate application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    /// The measurement form being edited
    pub form: CropForm,
    /// Owner of the submission state machine
    pub submission: SubmissionController,
    /// Transient status line, shown in the status bar
    pub status_message: Option<String>,
    /// Background animation particles
    pub leaves: LeafField,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            form: CropForm::new(),
            submission: SubmissionController::new(),
            status_message: None,
            leaves: LeafField::new(LeafField::DEFAULT_COUNT),
        }
    }
}

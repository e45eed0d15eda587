use std::collections::VecDeque;
use std::sync::Arc;

use sketchdeck::application::{Notice, WorkflowPhase, WorkflowProgress};
use sketchdeck::domain::{DeckForm, DeckTheme, SlideLevel};
use sketchdeck::infra::image::PreviewImage;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Diagram,
    Deck,
}

impl AppView {
    pub fn title(self) -> &'static str {
        match self {
            Self::Diagram => "Diagram",
            Self::Deck => "Slide deck",
        }
    }
}

/// Shell-level UI state.
#[derive(Debug, Default)]
pub struct UiState {
    pub current_view: AppView,
    /// Pending dialogs; the front one is shown until dismissed.
    pub notices: VecDeque<Notice>,
}

#[derive(Debug, Default)]
pub struct DiagramSession {
    pub description: String,
    pub phase: WorkflowPhase,
    pub progress: Option<WorkflowProgress>,
    /// Latest decoded image. Replaced wholesale on each successful run.
    pub preview: Option<Arc<PreviewImage>>,
    /// Bumped whenever `preview` changes so the view knows to re-upload.
    pub preview_revision: u64,
    pub last_markup: Option<String>,
    pub show_markup: bool,
}

impl DiagramSession {
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }
}

#[derive(Debug, Default)]
pub struct DeckSession {
    pub form: DeckForm,
    pub phase: WorkflowPhase,
    pub progress: Option<WorkflowProgress>,
}

impl DeckSession {
    /// Form preset from remembered settings. An out-of-range level falls back to the default.
    pub fn with_defaults(theme: DeckTheme, slide_level: u8) -> Self {
        Self {
            form: DeckForm {
                theme,
                slide_level: SlideLevel::new(slide_level).unwrap_or_default().get(),
                ..DeckForm::default()
            },
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }
}

/// All app state in one struct.
#[derive(Debug, Default)]
pub struct AppState {
    pub ui: UiState,
    pub diagram: DiagramSession,
    pub deck: DeckSession,
}

//! Root egui app struct.

use std::sync::Arc;
use std::sync::mpsc;

use eframe::egui;

use sketchdeck::application::{DeckWorkflow, DiagramWorkflow};
use sketchdeck::infra::app_config::AppConfig;

use super::messages::{DeckMsg, DiagramMsg};
use super::state::{AppState, DeckSession};

/// Root egui application for Sketchdeck.
pub struct SketchdeckApp {
    pub state: AppState,
    pub config: AppConfig,

    pub diagram_workflow: Arc<DiagramWorkflow>,
    pub deck_workflow: Arc<DeckWorkflow>,

    pub diagram_tx: mpsc::Sender<DiagramMsg>,
    pub diagram_rx: mpsc::Receiver<DiagramMsg>,

    pub deck_tx: mpsc::Sender<DeckMsg>,
    pub deck_rx: mpsc::Receiver<DeckMsg>,

    /// Handle workers use to wake the UI; absent in tests.
    pub repaint: Option<egui::Context>,
    /// Preview texture and the `preview_revision` it was uploaded from.
    pub preview_texture: Option<(u64, egui::TextureHandle)>,

    pub skip_persist: bool,
}

impl SketchdeckApp {
    pub fn from_parts(
        config: AppConfig,
        diagram_workflow: DiagramWorkflow,
        deck_workflow: DeckWorkflow,
    ) -> Self {
        let (diagram_tx, diagram_rx) = mpsc::channel();
        let (deck_tx, deck_rx) = mpsc::channel();

        let state = AppState {
            deck: DeckSession::with_defaults(config.last_deck_theme, config.last_slide_level),
            ..AppState::default()
        };

        Self {
            state,
            config,
            diagram_workflow: Arc::new(diagram_workflow),
            deck_workflow: Arc::new(deck_workflow),
            diagram_tx,
            diagram_rx,
            deck_tx,
            deck_rx,
            repaint: None,
            preview_texture: None,
            skip_persist: false,
        }
    }

    pub fn new_egui(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let diagram = DiagramWorkflow::from_config(&config);
        let deck = DeckWorkflow::from_config(&config);
        let mut app = Self::from_parts(config, diagram, deck);
        app.repaint = Some(cc.egui_ctx.clone());
        app
    }

    pub fn is_busy(&self) -> bool {
        self.state.diagram.is_busy() || self.state.deck.is_busy()
    }
}

#[cfg(test)]
impl SketchdeckApp {
    pub fn new_for_test(diagram_workflow: DiagramWorkflow, deck_workflow: DeckWorkflow) -> Self {
        let mut app = Self::from_parts(AppConfig::default(), diagram_workflow, deck_workflow);
        app.skip_persist = true;
        app
    }
}

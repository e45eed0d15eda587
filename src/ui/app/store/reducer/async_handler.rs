use std::sync::Arc;

use sketchdeck::application::{DiagramResult, Notice, WorkflowPhase, WorkflowProgress};

use super::super::action::AsyncAction;
use super::super::command::Command;
use crate::ui::app::state::{AppState, DeckSession, DiagramSession, UiState};
use crate::ui::app::{DeckMsg, DiagramMsg};

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::Diagram(msg) => on_diagram_message(&mut state.ui, &mut state.diagram, msg),
        AsyncAction::Deck(msg) => on_deck_message(&mut state.ui, &mut state.deck, msg),
    }
}

fn on_diagram_message(ui: &mut UiState, session: &mut DiagramSession, msg: DiagramMsg) -> Vec<Command> {
    match msg {
        DiagramMsg::Progress(progress) => {
            if session.is_busy() {
                session.phase = progress.phase;
                session.progress = Some(progress);
            }
        }
        DiagramMsg::Done(result) => {
            session.phase = WorkflowPhase::Idle;
            match *result {
                Ok(outcome) => {
                    session.last_markup = Some(outcome.markup);
                    if let DiagramResult::Preview(image) = outcome.result {
                        session.preview = Some(Arc::new(image));
                        session.preview_revision += 1;
                    }
                    session.progress =
                        Some(WorkflowProgress::new(WorkflowPhase::Idle, 100, "Diagram ready"));
                }
                Err(err) => {
                    log::warn!("diagram run failed: {err}");
                    session.progress = None;
                    ui.notices.push_back(Notice::failure(&err));
                }
            }
        }
    }
    Vec::new()
}

fn on_deck_message(ui: &mut UiState, session: &mut DeckSession, msg: DeckMsg) -> Vec<Command> {
    match msg {
        DeckMsg::Progress(progress) => {
            if session.is_busy() {
                session.phase = progress.phase;
                session.progress = Some(progress);
            }
        }
        DeckMsg::Done(result) => {
            session.phase = WorkflowPhase::Idle;
            ui.notices.push_back(match result {
                Ok(outcome) => Notice::deck_converted(&outcome.output),
                Err(err) => Notice::failure(&err),
            });
        }
    }
    Vec::new()
}

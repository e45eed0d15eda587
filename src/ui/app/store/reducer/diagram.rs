use sketchdeck::application::validation::validate_diagram;
use sketchdeck::application::{DiagramTarget, Notice, WorkflowPhase, WorkflowProgress};

use super::super::action::DiagramAction;
use super::super::command::Command;
use crate::ui::app::state::{DiagramSession, UiState};

pub fn reduce(ui: &mut UiState, session: &mut DiagramSession, action: DiagramAction) -> Vec<Command> {
    match action {
        DiagramAction::UpdateDescription(text) => {
            session.description = text;
            Vec::new()
        }
        DiagramAction::RunRequested { frame } => {
            if session.is_busy() {
                log::debug!("diagram run already in flight ({}); ignoring", session.phase);
                return Vec::new();
            }

            session.phase = WorkflowPhase::Validating;
            match validate_diagram(&session.description) {
                Ok(request) => {
                    session.phase = WorkflowPhase::AwaitingExternalResult;
                    session.progress = Some(WorkflowProgress::new(
                        WorkflowPhase::AwaitingExternalResult,
                        0,
                        "Starting...",
                    ));
                    vec![Command::GenerateDiagram {
                        request,
                        target: DiagramTarget::Preview { frame },
                    }]
                }
                Err(err) => {
                    session.phase = WorkflowPhase::Idle;
                    session.progress = None;
                    ui.notices.push_back(Notice::failure(&err));
                    Vec::new()
                }
            }
        }
        DiagramAction::ToggleMarkup => {
            session.show_markup = !session.show_markup;
            Vec::new()
        }
        DiagramAction::CopyMarkup => session
            .last_markup
            .clone()
            .map(Command::CopyToClipboard)
            .into_iter()
            .collect(),
    }
}

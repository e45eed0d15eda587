use std::path::Path;

use sketchdeck::application::validation::{load_markdown, suggest_output_path, validate_deck};
use sketchdeck::application::{Notice, WorkflowPhase, WorkflowProgress};
use sketchdeck::domain::{DeckInputMode, SAMPLE_MARKDOWN};

use super::super::action::DeckAction;
use super::super::command::Command;
use crate::ui::app::state::{DeckSession, UiState};

pub fn reduce(ui: &mut UiState, session: &mut DeckSession, action: DeckAction) -> Vec<Command> {
    let form = &mut session.form;
    match action {
        DeckAction::SetMode(mode) => {
            form.mode = mode;
            Vec::new()
        }
        DeckAction::UpdateInputPath(path) => {
            form.input_path = path;
            Vec::new()
        }
        DeckAction::UpdateOutputPath(path) => {
            form.output_path = path;
            Vec::new()
        }
        DeckAction::UpdateMarkdown(text) => {
            form.markdown = text;
            Vec::new()
        }
        DeckAction::SetTheme(theme) => {
            form.theme = theme;
            remember(session)
        }
        DeckAction::SetSlideLevel(level) => {
            form.slide_level = level;
            remember(session)
        }
        DeckAction::SetIncremental(incremental) => {
            form.incremental = incremental;
            Vec::new()
        }
        DeckAction::BrowseInput => vec![Command::PickInputFile],
        DeckAction::BrowseOutput => {
            let suggested = if form.output_path.trim().is_empty() {
                let input = form.input_path.trim();
                (!input.is_empty()).then(|| suggest_output_path(Path::new(input)))
            } else {
                Some(form.output_path.trim().into())
            };
            vec![Command::PickOutputFile { suggested }]
        }
        DeckAction::InputPicked(path) => {
            if form.output_path.trim().is_empty() {
                form.output_path = suggest_output_path(&path).to_string_lossy().into_owned();
            }
            form.input_path = path.to_string_lossy().into_owned();
            form.mode = DeckInputMode::File;
            Vec::new()
        }
        DeckAction::OutputPicked(path) => {
            form.output_path = path.to_string_lossy().into_owned();
            Vec::new()
        }
        DeckAction::InsertSample => {
            form.markdown = SAMPLE_MARKDOWN.to_string();
            form.mode = DeckInputMode::Editor;
            Vec::new()
        }
        DeckAction::LoadInputIntoEditor => {
            match load_markdown(&form.input_path) {
                Ok(text) => {
                    form.markdown = text;
                    form.mode = DeckInputMode::Editor;
                }
                Err(err) => ui.notices.push_back(Notice::failure(&err)),
            }
            Vec::new()
        }
        DeckAction::RunRequested => {
            if session.is_busy() {
                log::debug!("deck conversion already in flight ({}); ignoring", session.phase);
                return Vec::new();
            }

            session.phase = WorkflowPhase::Validating;
            match validate_deck(&session.form) {
                Ok(request) => {
                    session.phase = WorkflowPhase::AwaitingExternalResult;
                    session.progress = Some(WorkflowProgress::new(
                        WorkflowPhase::Validating,
                        0,
                        "Starting...",
                    ));
                    vec![Command::ConvertDeck { request }]
                }
                Err(err) => {
                    session.phase = WorkflowPhase::Idle;
                    session.progress = None;
                    ui.notices.push_back(Notice::failure(&err));
                    Vec::new()
                }
            }
        }
    }
}

fn remember(session: &DeckSession) -> Vec<Command> {
    vec![Command::RememberDeckSettings {
        theme: session.form.theme,
        slide_level: session.form.slide_level,
    }]
}

use std::path::PathBuf;
use std::sync::Arc;

use sketchdeck::domain::{DeckRequest, WorkflowError};

use super::super::super::SketchdeckApp;
use crate::ui::app::{Action, AsyncAction, DeckAction, DeckMsg};

pub fn start_conversion(app: &mut SketchdeckApp, request: DeckRequest) {
    let workflow = Arc::clone(&app.deck_workflow);
    let tx = app.deck_tx.clone();
    let repaint = app.repaint.clone();

    let spawned = std::thread::Builder::new()
        .name("deck-worker".into())
        .spawn(move || {
            let send = |msg: DeckMsg| {
                let _ = tx.send(msg);
                if let Some(ctx) = &repaint {
                    ctx.request_repaint();
                }
            };

            let result = workflow.run(&request, |progress| send(DeckMsg::Progress(progress)));
            send(DeckMsg::Done(result));
        });

    if let Err(err) = spawned {
        log::error!("failed to start deck worker: {err}");
        app.dispatch(Action::Async(AsyncAction::Deck(DeckMsg::Done(Err(
            WorkflowError::Io(err),
        )))));
    }
}

pub fn pick_input_file(app: &mut SketchdeckApp) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title("Select Markdown file")
        .add_filter("Markdown", &["md", "markdown", "txt"])
        .pick_file()
    {
        app.dispatch(Action::Deck(DeckAction::InputPicked(path)));
    }
}

pub fn pick_output_file(app: &mut SketchdeckApp, suggested: Option<PathBuf>) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Save presentation as")
        .add_filter("PowerPoint", &["pptx"]);
    if let Some(suggested) = suggested {
        if let Some(dir) = suggested.parent().filter(|dir| dir.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = suggested.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }
    }

    if let Some(path) = dialog.save_file() {
        app.dispatch(Action::Deck(DeckAction::OutputPicked(path)));
    }
}

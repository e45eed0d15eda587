use std::sync::Arc;

use sketchdeck::application::DiagramTarget;
use sketchdeck::domain::{DiagramRequest, WorkflowError};

use super::super::super::SketchdeckApp;
use crate::ui::app::{Action, AsyncAction, DiagramMsg};

pub fn start_generation(app: &mut SketchdeckApp, request: DiagramRequest, target: DiagramTarget) {
    let workflow = Arc::clone(&app.diagram_workflow);
    let tx = app.diagram_tx.clone();
    let repaint = app.repaint.clone();

    let spawned = std::thread::Builder::new()
        .name("diagram-worker".into())
        .spawn(move || {
            let send = |msg: DiagramMsg| {
                let _ = tx.send(msg);
                if let Some(ctx) = &repaint {
                    ctx.request_repaint();
                }
            };

            let result = sketchdeck::block_on(workflow.run(&request, target, |progress| {
                send(DiagramMsg::Progress(progress))
            }));
            send(DiagramMsg::Done(Box::new(result)));
        });

    if let Err(err) = spawned {
        log::error!("failed to start diagram worker: {err}");
        app.dispatch(Action::Async(AsyncAction::Diagram(DiagramMsg::Done(
            Box::new(Err(WorkflowError::Io(err))),
        ))));
    }
}

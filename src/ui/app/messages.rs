use sketchdeck::application::{DeckOutcome, DiagramOutcome, WorkflowProgress};
use sketchdeck::domain::WorkflowError;

/// Messages coming back from a diagram worker.
#[derive(Debug)]
pub enum DiagramMsg {
    Progress(WorkflowProgress),
    Done(Box<Result<DiagramOutcome, WorkflowError>>),
}

/// Messages coming back from a deck worker.
#[derive(Debug)]
pub enum DeckMsg {
    Progress(WorkflowProgress),
    Done(Result<DeckOutcome, WorkflowError>),
}

//! Application layer (use-cases, policies).
//!
//! Orchestrates the diagram and deck workflows over the infra adapters
//! without depending on the UI framework.

pub mod deck;
pub mod diagram;
pub mod notify;
pub mod validation;
pub mod workflow;

pub use deck::{DeckOutcome, DeckWorkflow};
pub use diagram::{DiagramOutcome, DiagramResult, DiagramTarget, DiagramWorkflow};
pub use notify::{Notice, NoticeLevel};
pub use workflow::{WorkflowPhase, WorkflowProgress};

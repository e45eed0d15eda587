//! Error taxonomy shared by both workflows.
//!
//! Every failure ends the current run and is shown to the user as-is; nothing
//! here is retried.

use thiserror::Error;

/// Failures of a diagram or deck run.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Missing or malformed user input. Nothing external was called.
    #[error("{0}")]
    Validation(String),

    /// The hosted text-generation API failed or returned something unusable.
    #[error("Error calling the text generation API: {0}")]
    Generation(String),

    /// An external executable ran and exited unsuccessfully.
    #[error("{tool} failed ({status}): {stderr}")]
    Tool {
        tool: String,
        status: String,
        stderr: String,
    },

    /// An external executable could not be located or launched.
    #[error("{tool} not found. {hint}")]
    ToolNotFound { tool: String, hint: String },

    /// The produced image could not be read or decoded.
    #[error("Error displaying image: {0}")]
    Display(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkflowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Dialog title for this failure. Tool failures are titled after the tool.
    pub fn title(&self) -> String {
        match self {
            Self::Validation(_) => "Invalid input".into(),
            Self::Generation(_) => "Generation error".into(),
            Self::Tool { tool, .. } => format!("{tool} error"),
            Self::ToolNotFound { .. } => "Missing tool".into(),
            Self::Display(_) => "Display error".into(),
            Self::Io(_) => "Error".into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T, E = WorkflowError> = std::result::Result<T, E>;

//! User-facing result messages.

use std::path::{Path, PathBuf};

use crate::domain::WorkflowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A dialog to show once a run has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
    /// When set, the dialog offers to open this file.
    pub offer_open: Option<PathBuf>,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            body: body.into(),
            offer_open: None,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            body: body.into(),
            offer_open: None,
        }
    }

    pub fn deck_converted(output: &Path) -> Self {
        Self {
            offer_open: Some(output.to_path_buf()),
            ..Self::info(
                "Success",
                format!("Successfully converted to {}", output.display()),
            )
        }
    }

    pub fn failure(err: &WorkflowError) -> Self {
        Self::error(err.title(), err.to_string())
    }

    pub fn open_failed(path: &Path, err: &std::io::Error) -> Self {
        Self::error(
            "Error",
            format!("Could not open {}: {err}", path.display()),
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

//! Validated requests and the raw form state they are built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::WorkflowError;

/// A diagram description that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramRequest {
    pub description: String,
}

/// Presentation theme passed through to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckTheme {
    #[default]
    Default,
    Serif,
    Simple,
    Night,
    Moon,
}

impl DeckTheme {
    pub const ALL: [DeckTheme; 5] = [
        DeckTheme::Default,
        DeckTheme::Serif,
        DeckTheme::Simple,
        DeckTheme::Night,
        DeckTheme::Moon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Serif => "serif",
            Self::Simple => "simple",
            Self::Night => "night",
            Self::Moon => "moon",
        }
    }
}

impl fmt::Display for DeckTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeckTheme {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "" => Ok(Self::Default),
            "serif" => Ok(Self::Serif),
            "simple" => Ok(Self::Simple),
            "night" => Ok(Self::Night),
            "moon" => Ok(Self::Moon),
            other => Err(WorkflowError::validation(format!(
                "Unknown theme '{other}'. Choose one of: default, serif, simple, night, moon"
            ))),
        }
    }
}

/// Heading depth the converter treats as a slide boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlideLevel(u8);

impl SlideLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn new(level: u8) -> Result<Self, WorkflowError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(WorkflowError::validation(format!(
                "Slide level must be between {} and {}, got {level}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for SlideLevel {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for SlideLevel {
    type Error = WorkflowError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SlideLevel> for u8 {
    fn from(level: SlideLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckOptions {
    pub theme: DeckTheme,
    pub slide_level: SlideLevel,
    pub incremental: bool,
}

/// Where the Markdown for a deck comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// An existing file on disk, handed to the converter directly.
    File(PathBuf),
    /// Editor text; written to a temporary file before conversion.
    Inline(String),
}

/// A deck conversion that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRequest {
    pub source: DeckSource,
    pub output: PathBuf,
    pub options: DeckOptions,
}

/// Which input the deck form is currently using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckInputMode {
    #[default]
    File,
    Editor,
}

/// Raw, unvalidated deck form fields as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckForm {
    pub mode: DeckInputMode,
    pub input_path: String,
    pub markdown: String,
    pub output_path: String,
    pub theme: DeckTheme,
    pub slide_level: u8,
    pub incremental: bool,
}

impl Default for DeckForm {
    fn default() -> Self {
        Self {
            mode: DeckInputMode::default(),
            input_path: String::new(),
            markdown: String::new(),
            output_path: String::new(),
            theme: DeckTheme::default(),
            slide_level: SlideLevel::default().get(),
            incremental: false,
        }
    }
}

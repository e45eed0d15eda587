use std::path::PathBuf;

use sketchdeck::application::DiagramTarget;
use sketchdeck::domain::{DeckRequest, DeckTheme, DiagramRequest};

#[derive(Debug, Clone)]
pub enum Command {
    GenerateDiagram {
        request: DiagramRequest,
        target: DiagramTarget,
    },
    ConvertDeck {
        request: DeckRequest,
    },
    PickInputFile,
    PickOutputFile {
        suggested: Option<PathBuf>,
    },
    OpenPath(PathBuf),
    CopyToClipboard(String),
    RememberDeckSettings {
        theme: DeckTheme,
        slide_level: u8,
    },
}

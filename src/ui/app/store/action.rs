use std::path::PathBuf;

use sketchdeck::domain::{DeckInputMode, DeckTheme};

use crate::ui::app::state::AppView;
use crate::ui::app::{DeckMsg, DiagramMsg};

#[derive(Debug)]
pub enum Action {
    Navigation(NavigationAction),
    Diagram(DiagramAction),
    Deck(DeckAction),
    Notice(NoticeAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum NavigationAction {
    SwitchTo(AppView),
}

#[derive(Debug)]
pub enum DiagramAction {
    UpdateDescription(String),
    /// `frame` is the display area the preview should fit, in pixels.
    RunRequested { frame: (u32, u32) },
    ToggleMarkup,
    CopyMarkup,
}

#[derive(Debug)]
pub enum DeckAction {
    SetMode(DeckInputMode),
    UpdateInputPath(String),
    UpdateOutputPath(String),
    UpdateMarkdown(String),
    SetTheme(DeckTheme),
    SetSlideLevel(u8),
    SetIncremental(bool),
    BrowseInput,
    BrowseOutput,
    InputPicked(PathBuf),
    OutputPicked(PathBuf),
    InsertSample,
    LoadInputIntoEditor,
    RunRequested,
}

#[derive(Debug)]
pub enum NoticeAction {
    Dismiss,
    /// "Yes" on a notice that offers to open a file.
    OpenConfirmed,
}

#[derive(Debug)]
pub enum AsyncAction {
    Diagram(DiagramMsg),
    Deck(DeckMsg),
}

use std::path::PathBuf;

use sketchdeck::application::{
    DeckOutcome, DiagramOutcome, DiagramResult, DiagramTarget, NoticeLevel, WorkflowPhase,
    WorkflowProgress,
};
use sketchdeck::domain::{
    DeckInputMode, DeckSource, DeckTheme, SAMPLE_MARKDOWN, WorkflowError,
};
use sketchdeck::infra::image::PreviewImage;

use super::reduce;
use crate::ui::app::state::{AppState, AppView};
use crate::ui::app::store::action::{
    Action, AsyncAction, DeckAction, DiagramAction, NavigationAction, NoticeAction,
};
use crate::ui::app::store::command::Command;
use crate::ui::app::{DeckMsg, DiagramMsg};

fn diagram(state: &mut AppState, action: DiagramAction) -> Vec<Command> {
    reduce(state, Action::Diagram(action))
}

fn deck(state: &mut AppState, action: DeckAction) -> Vec<Command> {
    reduce(state, Action::Deck(action))
}

fn run_diagram(state: &mut AppState) -> Vec<Command> {
    diagram(state, DiagramAction::RunRequested { frame: (800, 600) })
}

fn tool_failure(stderr: &str) -> WorkflowError {
    WorkflowError::Tool {
        tool: "Pandoc".into(),
        status: "exit status: 1".into(),
        stderr: stderr.into(),
    }
}

#[test]
fn switching_views() {
    let mut state = AppState::default();
    assert_eq!(state.ui.current_view, AppView::Diagram);
    let commands = reduce(
        &mut state,
        Action::Navigation(NavigationAction::SwitchTo(AppView::Deck)),
    );
    assert!(commands.is_empty());
    assert_eq!(state.ui.current_view, AppView::Deck);
}

#[test]
fn blank_description_shows_error_and_starts_nothing() {
    let mut state = AppState::default();
    diagram(&mut state, DiagramAction::UpdateDescription("   ".into()));

    let commands = run_diagram(&mut state);

    assert!(commands.is_empty());
    assert_eq!(state.diagram.phase, WorkflowPhase::Idle);
    let notice = state.ui.notices.front().expect("validation notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(
        notice.body,
        "Please enter a description for the diagram you want to create."
    );
}

#[test]
fn valid_description_starts_generation_with_preview_target() {
    let mut state = AppState::default();
    diagram(&mut state, DiagramAction::UpdateDescription(" a queue ".into()));

    let commands = run_diagram(&mut state);

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        Command::GenerateDiagram { request, target } => {
            assert_eq!(request.description, "a queue");
            assert_eq!(target, &DiagramTarget::Preview { frame: (800, 600) });
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert!(state.diagram.is_busy());
    assert!(state.ui.notices.is_empty());
}

#[test]
fn second_diagram_request_while_busy_is_ignored() {
    let mut state = AppState::default();
    diagram(&mut state, DiagramAction::UpdateDescription("a queue".into()));
    assert_eq!(run_diagram(&mut state).len(), 1);

    assert!(run_diagram(&mut state).is_empty());
    assert!(state.ui.notices.is_empty());
}

#[test]
fn diagram_and_deck_runs_are_independent() {
    let mut state = AppState::default();
    diagram(&mut state, DiagramAction::UpdateDescription("a queue".into()));
    run_diagram(&mut state);

    deck(&mut state, DeckAction::SetMode(DeckInputMode::Editor));
    deck(&mut state, DeckAction::UpdateMarkdown("# Hi".into()));
    deck(&mut state, DeckAction::UpdateOutputPath("out.pptx".into()));
    let commands = deck(&mut state, DeckAction::RunRequested);

    assert!(matches!(commands.as_slice(), [Command::ConvertDeck { .. }]));
}

#[test]
fn diagram_success_stores_preview_and_markup() {
    let mut state = AppState::default();
    diagram(&mut state, DiagramAction::UpdateDescription("a queue".into()));
    run_diagram(&mut state);

    reduce(
        &mut state,
        Action::Async(AsyncAction::Diagram(DiagramMsg::Progress(
            WorkflowProgress::new(WorkflowPhase::Presenting, 90, "Displaying diagram..."),
        ))),
    );
    assert_eq!(state.diagram.phase, WorkflowPhase::Presenting);

    let outcome = DiagramOutcome {
        markup: "graph TD\nA-->B".into(),
        result: DiagramResult::Preview(PreviewImage {
            native_size: [4, 4],
            size: [4, 4],
            rgba: vec![0; 64],
        }),
    };
    reduce(
        &mut state,
        Action::Async(AsyncAction::Diagram(DiagramMsg::Done(Box::new(Ok(outcome))))),
    );

    assert_eq!(state.diagram.phase, WorkflowPhase::Idle);
    assert_eq!(state.diagram.last_markup.as_deref(), Some("graph TD\nA-->B"));
    assert_eq!(state.diagram.preview_revision, 1);
    assert!(state.diagram.preview.is_some());
    assert!(state.ui.notices.is_empty());
}

#[test]
fn diagram_failure_returns_to_idle_with_error() {
    let mut state = AppState::default();
    diagram(&mut state, DiagramAction::UpdateDescription("a queue".into()));
    run_diagram(&mut state);

    reduce(
        &mut state,
        Action::Async(AsyncAction::Diagram(DiagramMsg::Done(Box::new(Err(
            WorkflowError::Generation("HTTP 500".into()),
        ))))),
    );

    assert_eq!(state.diagram.phase, WorkflowPhase::Idle);
    assert!(state.diagram.progress.is_none());
    let notice = state.ui.notices.front().unwrap();
    assert_eq!(notice.title, "Generation error");
    assert!(notice.body.contains("HTTP 500"));
}

#[test]
fn late_progress_after_done_is_dropped() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Async(AsyncAction::Deck(DeckMsg::Progress(WorkflowProgress::new(
            WorkflowPhase::AwaitingExternalResult,
            50,
            "Converting...",
        )))),
    );
    assert_eq!(state.deck.phase, WorkflowPhase::Idle);
    assert!(state.deck.progress.is_none());
}

#[test]
fn copy_markup_needs_markup() {
    let mut state = AppState::default();
    assert!(diagram(&mut state, DiagramAction::CopyMarkup).is_empty());

    state.diagram.last_markup = Some("graph LR\nA-->B".into());
    let commands = diagram(&mut state, DiagramAction::CopyMarkup);
    assert!(matches!(
        commands.as_slice(),
        [Command::CopyToClipboard(text)] if text == "graph LR\nA-->B"
    ));
}

#[test]
fn deck_without_output_is_rejected() {
    let mut state = AppState::default();
    deck(&mut state, DeckAction::SetMode(DeckInputMode::Editor));
    deck(&mut state, DeckAction::UpdateMarkdown("# Hi".into()));

    let commands = deck(&mut state, DeckAction::RunRequested);

    assert!(commands.is_empty());
    assert!(!state.deck.is_busy());
    assert_eq!(
        state.ui.notices.front().unwrap().body,
        "Please specify an output file"
    );
}

#[test]
fn deck_editor_request_carries_options() {
    let mut state = AppState::default();
    deck(&mut state, DeckAction::SetMode(DeckInputMode::Editor));
    deck(&mut state, DeckAction::UpdateMarkdown("# Hi".into()));
    deck(&mut state, DeckAction::UpdateOutputPath("out.pptx".into()));
    deck(&mut state, DeckAction::SetTheme(DeckTheme::Moon));
    deck(&mut state, DeckAction::SetSlideLevel(1));
    deck(&mut state, DeckAction::SetIncremental(true));

    let commands = deck(&mut state, DeckAction::RunRequested);

    let [Command::ConvertDeck { request }] = commands.as_slice() else {
        panic!("expected a conversion, got {commands:?}");
    };
    assert_eq!(request.source, DeckSource::Inline("# Hi".into()));
    assert_eq!(request.options.theme, DeckTheme::Moon);
    assert_eq!(request.options.slide_level.get(), 1);
    assert!(request.options.incremental);
    assert!(state.deck.is_busy());

    assert!(deck(&mut state, DeckAction::RunRequested).is_empty());
}

#[test]
fn theme_and_level_changes_are_remembered() {
    let mut state = AppState::default();
    let commands = deck(&mut state, DeckAction::SetTheme(DeckTheme::Night));
    assert!(matches!(
        commands.as_slice(),
        [Command::RememberDeckSettings {
            theme: DeckTheme::Night,
            slide_level: 2
        }]
    ));
}

#[test]
fn picking_input_suggests_output_once() {
    let mut state = AppState::default();
    deck(
        &mut state,
        DeckAction::InputPicked(PathBuf::from("/talks/intro.md")),
    );
    assert_eq!(state.deck.form.input_path, "/talks/intro.md");
    assert_eq!(state.deck.form.output_path, "/talks/intro.pptx");
    assert_eq!(state.deck.form.mode, DeckInputMode::File);

    deck(
        &mut state,
        DeckAction::InputPicked(PathBuf::from("/talks/other.md")),
    );
    assert_eq!(state.deck.form.output_path, "/talks/intro.pptx");
}

#[test]
fn browse_output_suggests_from_input() {
    let mut state = AppState::default();
    deck(&mut state, DeckAction::UpdateInputPath("/talks/intro.md".into()));
    let commands = deck(&mut state, DeckAction::BrowseOutput);
    assert!(matches!(
        commands.as_slice(),
        [Command::PickOutputFile { suggested: Some(path) }] if path == &PathBuf::from("/talks/intro.pptx")
    ));
}

#[test]
fn insert_sample_switches_to_editor() {
    let mut state = AppState::default();
    deck(&mut state, DeckAction::InsertSample);
    assert_eq!(state.deck.form.mode, DeckInputMode::Editor);
    assert_eq!(state.deck.form.markdown, SAMPLE_MARKDOWN);
}

#[test]
fn load_into_editor_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "## From disk").unwrap();

    let mut state = AppState::default();
    deck(
        &mut state,
        DeckAction::UpdateInputPath(path.to_string_lossy().into_owned()),
    );
    deck(&mut state, DeckAction::LoadInputIntoEditor);

    assert_eq!(state.deck.form.markdown, "## From disk");
    assert_eq!(state.deck.form.mode, DeckInputMode::Editor);
}

#[test]
fn load_into_editor_without_file_warns() {
    let mut state = AppState::default();
    deck(&mut state, DeckAction::LoadInputIntoEditor);
    assert_eq!(
        state.ui.notices.front().unwrap().body,
        "Please select a valid input file first"
    );
    assert_eq!(state.deck.form.mode, DeckInputMode::File);
}

#[test]
fn deck_success_offers_open_and_yes_opens() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Async(AsyncAction::Deck(DeckMsg::Done(Ok(DeckOutcome {
            output: PathBuf::from("/talks/intro.pptx"),
        })))),
    );
    assert_eq!(
        state.ui.notices.front().unwrap().offer_open,
        Some(PathBuf::from("/talks/intro.pptx"))
    );

    let commands = reduce(&mut state, Action::Notice(NoticeAction::OpenConfirmed));
    assert!(matches!(
        commands.as_slice(),
        [Command::OpenPath(path)] if path == &PathBuf::from("/talks/intro.pptx")
    ));
    assert!(state.ui.notices.is_empty());
}

#[test]
fn declining_open_just_dismisses() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Async(AsyncAction::Deck(DeckMsg::Done(Ok(DeckOutcome {
            output: PathBuf::from("/talks/intro.pptx"),
        })))),
    );
    let commands = reduce(&mut state, Action::Notice(NoticeAction::Dismiss));
    assert!(commands.is_empty());
    assert!(state.ui.notices.is_empty());
}

#[test]
fn concurrent_failures_queue_notices() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Async(AsyncAction::Deck(DeckMsg::Done(Err(tool_failure(
            "pandoc: bad input",
        ))))),
    );
    reduce(
        &mut state,
        Action::Async(AsyncAction::Diagram(DiagramMsg::Done(Box::new(Err(
            WorkflowError::Display("truncated PNG".into()),
        ))))),
    );
    assert_eq!(state.ui.notices.len(), 2);

    reduce(&mut state, Action::Notice(NoticeAction::Dismiss));
    assert_eq!(state.ui.notices.front().unwrap().title, "Display error");
}

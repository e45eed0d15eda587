use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tempfile::TempPath;

use sketchdeck::application::{DeckWorkflow, DiagramWorkflow, WorkflowPhase};
use sketchdeck::domain::{DeckInputMode, DeckRequest, DeckTheme, Result, WorkflowError};
use sketchdeck::infra::converter::DeckConverter;
use sketchdeck::infra::llm::TextGenerator;
use sketchdeck::infra::renderer::{DiagramRenderer, RenderedImage};

use crate::ui::app::SketchdeckApp;
use crate::ui::app::store::action::{Action, DeckAction, DiagramAction};
use crate::ui::app::store::runtime::system;

struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, _description: &str) -> Result<String> {
        Ok("graph TD\nA-->B".into())
    }
}

struct PngRenderer {
    dir: PathBuf,
}

impl DiagramRenderer for PngRenderer {
    fn render(&self, _markup: &str) -> Result<RenderedImage> {
        let path = self.dir.join("rendered.png");
        image::RgbaImage::from_pixel(20, 10, image::Rgba([255, 255, 255, 255]))
            .save(&path)
            .map_err(|e| WorkflowError::Display(e.to_string()))?;
        Ok(RenderedImage::from_temp_path(TempPath::from_path(path)))
    }
}

/// Writes a placeholder file at the requested output.
struct TouchConverter;

impl DeckConverter for TouchConverter {
    fn convert(&self, request: &DeckRequest) -> Result<PathBuf> {
        std::fs::write(&request.output, b"pptx")?;
        Ok(request.output.clone())
    }
}

struct FailingConverter;

impl DeckConverter for FailingConverter {
    fn convert(&self, _request: &DeckRequest) -> Result<PathBuf> {
        Err(WorkflowError::Tool {
            tool: "Pandoc".into(),
            status: "exit status: 64".into(),
            stderr: "Unknown writer".into(),
        })
    }
}

fn test_app(dir: &Path, converter: Arc<dyn DeckConverter>) -> SketchdeckApp {
    SketchdeckApp::new_for_test(
        DiagramWorkflow::new(
            Arc::new(EchoGenerator),
            Arc::new(PngRenderer {
                dir: dir.to_path_buf(),
            }),
        ),
        DeckWorkflow::new(converter),
    )
}

fn wait_until(app: &mut SketchdeckApp, mut done: impl FnMut(&SketchdeckApp) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        app.poll_diagram_messages();
        app.poll_deck_messages();
        if done(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("worker did not finish in time");
}

#[test]
fn diagram_worker_delivers_preview() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app(dir.path(), Arc::new(TouchConverter));

    app.dispatch(Action::Diagram(DiagramAction::UpdateDescription(
        "two boxes".into(),
    )));
    app.dispatch(Action::Diagram(DiagramAction::RunRequested { frame: (10, 10) }));
    assert!(app.state.diagram.is_busy());

    wait_until(&mut app, |app| !app.state.diagram.is_busy());

    let preview = app.state.diagram.preview.as_ref().expect("preview");
    assert_eq!(preview.native_size, [20, 10]);
    assert_eq!(preview.size, [10, 5]);
    assert!(!dir.path().join("rendered.png").exists());
    assert!(app.state.ui.notices.is_empty());
}

#[test]
fn deck_worker_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deck.pptx");
    let mut app = test_app(dir.path(), Arc::new(TouchConverter));

    app.dispatch(Action::Deck(DeckAction::SetMode(DeckInputMode::Editor)));
    app.dispatch(Action::Deck(DeckAction::UpdateMarkdown("# Hello".into())));
    app.dispatch(Action::Deck(DeckAction::UpdateOutputPath(
        output.to_string_lossy().into_owned(),
    )));
    app.dispatch(Action::Deck(DeckAction::RunRequested));

    wait_until(&mut app, |app| !app.state.deck.is_busy());

    assert!(output.exists());
    let notice = app.state.ui.notices.front().unwrap();
    assert_eq!(notice.offer_open.as_deref(), Some(output.as_path()));
    assert_eq!(
        app.state.deck.progress.as_ref().map(|p| p.status.as_str()),
        Some("Conversion completed")
    );
}

#[test]
fn deck_worker_failure_surfaces_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app(dir.path(), Arc::new(FailingConverter));

    app.dispatch(Action::Deck(DeckAction::SetMode(DeckInputMode::Editor)));
    app.dispatch(Action::Deck(DeckAction::UpdateMarkdown("# Hello".into())));
    app.dispatch(Action::Deck(DeckAction::UpdateOutputPath("out.pptx".into())));
    app.dispatch(Action::Deck(DeckAction::RunRequested));

    wait_until(&mut app, |app| !app.state.deck.is_busy());

    assert_eq!(app.state.deck.phase, WorkflowPhase::Idle);
    let notice = app.state.ui.notices.front().unwrap();
    assert!(notice.body.contains("Unknown writer"));
    assert!(notice.offer_open.is_none());
}

#[test]
fn opening_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app(dir.path(), Arc::new(TouchConverter));

    system::open_path(&mut app, dir.path().join("gone.pptx"));

    let notice = app.state.ui.notices.front().unwrap();
    assert!(notice.body.starts_with("Could not open"));
}

#[test]
fn remembered_settings_update_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app(dir.path(), Arc::new(TouchConverter));

    system::remember_deck_settings(&mut app, DeckTheme::Serif, 3);

    assert_eq!(app.config.last_deck_theme, DeckTheme::Serif);
    assert_eq!(app.config.last_slide_level, 3);
}

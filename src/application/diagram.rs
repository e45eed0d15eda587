//! Prompt -> markup -> rendered image.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{DiagramRequest, Result, WorkflowError};
use crate::infra::app_config::AppConfig;
use crate::infra::image::PreviewImage;
use crate::infra::llm::{AnthropicClient, TextGenerator};
use crate::infra::renderer::{DiagramRenderer, MermaidCli, RenderedImage};

use super::workflow::{WorkflowPhase, WorkflowProgress};

/// What to do with the rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramTarget {
    /// Decode and scale to fit a display area of this size.
    Preview { frame: (u32, u32) },
    /// Copy to a file the caller keeps.
    File(PathBuf),
}

#[derive(Debug)]
pub enum DiagramResult {
    Preview(PreviewImage),
    Saved(PathBuf),
}

#[derive(Debug)]
pub struct DiagramOutcome {
    pub markup: String,
    pub result: DiagramResult,
}

pub struct DiagramWorkflow {
    generator: Arc<dyn TextGenerator>,
    renderer: Arc<dyn DiagramRenderer>,
}

impl DiagramWorkflow {
    pub fn new(generator: Arc<dyn TextGenerator>, renderer: Arc<dyn DiagramRenderer>) -> Self {
        Self {
            generator,
            renderer,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(AnthropicClient::from_config(config)),
            Arc::new(MermaidCli::from_config(config)),
        )
    }

    /// Generate markup for `request`, render it, and deliver it to `target`.
    ///
    /// The temporary markup and image files are gone when this returns,
    /// whatever the outcome.
    pub async fn run<P>(
        &self,
        request: &DiagramRequest,
        target: DiagramTarget,
        progress: P,
    ) -> Result<DiagramOutcome>
    where
        P: Fn(WorkflowProgress),
    {
        progress(WorkflowProgress::new(
            WorkflowPhase::AwaitingExternalResult,
            10,
            "Generating diagram, please wait...",
        ));
        let markup = self.generator.generate(&request.description).await?;
        log::debug!("received {} bytes of diagram markup", markup.len());

        progress(WorkflowProgress::new(
            WorkflowPhase::AwaitingExternalResult,
            50,
            "Rendering diagram...",
        ));
        let renderer = Arc::clone(&self.renderer);
        let to_render = markup.clone();
        let result = tokio::task::spawn_blocking(move || {
            let rendered = renderer.render(&to_render)?;
            deliver(rendered, target)
        })
        .await
        .map_err(|err| {
            WorkflowError::Io(std::io::Error::other(format!("render task failed: {err}")))
        })??;

        progress(WorkflowProgress::new(WorkflowPhase::Presenting, 90, "Displaying diagram..."));
        Ok(DiagramOutcome { markup, result })
    }
}

fn deliver(rendered: RenderedImage, target: DiagramTarget) -> Result<DiagramResult> {
    match target {
        DiagramTarget::Preview { frame } => rendered.present(frame).map(DiagramResult::Preview),
        DiagramTarget::File(dest) => rendered.persist_to(&dest).map(DiagramResult::Saved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempPath;

    struct FixedGenerator {
        reply: Result<String, String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _description: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(WorkflowError::Generation)
        }
    }

    /// Writes a real PNG to a temp path and remembers where.
    struct PngRenderer {
        dir: PathBuf,
        rendered: Mutex<Vec<PathBuf>>,
    }

    impl DiagramRenderer for PngRenderer {
        fn render(&self, markup: &str) -> Result<RenderedImage> {
            assert_eq!(markup, "graph TD\nA-->B");
            let path = self.dir.join("out.png");
            image::RgbaImage::from_pixel(64, 32, image::Rgba([0, 0, 0, 255]))
                .save(&path)
                .map_err(|e| WorkflowError::Display(e.to_string()))?;
            self.rendered.lock().unwrap().push(path.clone());
            Ok(RenderedImage::from_temp_path(TempPath::from_path(path)))
        }
    }

    struct FailingRenderer;

    impl DiagramRenderer for FailingRenderer {
        fn render(&self, _markup: &str) -> Result<RenderedImage> {
            Err(WorkflowError::Tool {
                tool: "Mermaid CLI".into(),
                status: "exit status: 1".into(),
                stderr: "Parse error on line 1".into(),
            })
        }
    }

    fn request() -> DiagramRequest {
        DiagramRequest {
            description: "two boxes".into(),
        }
    }

    #[tokio::test]
    async fn preview_is_decoded_and_temp_image_removed() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Arc::new(PngRenderer {
            dir: dir.path().to_path_buf(),
            rendered: Mutex::new(Vec::new()),
        });
        let generator = Arc::new(FixedGenerator {
            reply: Ok("graph TD\nA-->B".into()),
            calls: AtomicUsize::new(0),
        });
        let workflow = DiagramWorkflow::new(generator.clone(), renderer.clone());

        let phases = Mutex::new(Vec::new());
        let outcome = workflow
            .run(&request(), DiagramTarget::Preview { frame: (32, 32) }, |p| {
                phases.lock().unwrap().push(p.phase)
            })
            .await
            .unwrap();

        assert_eq!(outcome.markup, "graph TD\nA-->B");
        match outcome.result {
            DiagramResult::Preview(preview) => {
                assert_eq!(preview.native_size, [64, 32]);
                assert_eq!(preview.size, [32, 16]);
            }
            other => panic!("expected preview, got {other:?}"),
        }
        for path in renderer.rendered.lock().unwrap().iter() {
            assert!(!path.exists(), "{} left behind", path.display());
        }
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            phases.into_inner().unwrap().last(),
            Some(&WorkflowPhase::Presenting)
        );
    }

    #[tokio::test]
    async fn generation_failure_skips_rendering() {
        let workflow = DiagramWorkflow::new(
            Arc::new(FixedGenerator {
                reply: Err("HTTP 401".into()),
                calls: AtomicUsize::new(0),
            }),
            Arc::new(FailingRenderer),
        );
        let err = workflow
            .run(&request(), DiagramTarget::Preview { frame: (0, 0) }, |_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Generation(ref m) if m == "HTTP 401"));
    }

    #[tokio::test]
    async fn renderer_failure_is_reported_verbatim() {
        let workflow = DiagramWorkflow::new(
            Arc::new(FixedGenerator {
                reply: Ok("graph TD\nA-->B".into()),
                calls: AtomicUsize::new(0),
            }),
            Arc::new(FailingRenderer),
        );
        let err = workflow
            .run(&request(), DiagramTarget::Preview { frame: (0, 0) }, |_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Tool { ref stderr, .. } if stderr == "Parse error on line 1"));
    }

    #[tokio::test]
    async fn file_target_keeps_copy_and_drops_temp() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Arc::new(PngRenderer {
            dir: dir.path().to_path_buf(),
            rendered: Mutex::new(Vec::new()),
        });
        let workflow = DiagramWorkflow::new(
            Arc::new(FixedGenerator {
                reply: Ok("graph TD\nA-->B".into()),
                calls: AtomicUsize::new(0),
            }),
            renderer.clone(),
        );
        let dest = dir.path().join("kept.png");

        let outcome = workflow
            .run(&request(), DiagramTarget::File(dest.clone()), |_| {})
            .await
            .unwrap();

        assert!(matches!(outcome.result, DiagramResult::Saved(ref p) if p == &dest));
        assert!(dest.exists());
        assert!(!dir.path().join("out.png").exists());
    }
}

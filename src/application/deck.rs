//! Markdown -> slide deck.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{DeckRequest, Result};
use crate::infra::app_config::AppConfig;
use crate::infra::converter::{DeckConverter, Pandoc};

use super::workflow::{WorkflowPhase, WorkflowProgress};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOutcome {
    pub output: PathBuf,
}

pub struct DeckWorkflow {
    converter: Arc<dyn DeckConverter>,
}

impl DeckWorkflow {
    pub fn new(converter: Arc<dyn DeckConverter>) -> Self {
        Self { converter }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(Pandoc::from_config(config)))
    }

    /// Convert synchronously. Blocks until the converter exits.
    pub fn run<P>(&self, request: &DeckRequest, progress: P) -> Result<DeckOutcome>
    where
        P: Fn(WorkflowProgress),
    {
        progress(WorkflowProgress::new(
            WorkflowPhase::Validating,
            10,
            "Preparing conversion...",
        ));
        progress(WorkflowProgress::new(
            WorkflowPhase::AwaitingExternalResult,
            30,
            "Converting...",
        ));
        log::info!(
            "converting deck to {} (theme {}, slide level {}, incremental {})",
            request.output.display(),
            request.options.theme,
            request.options.slide_level.get(),
            request.options.incremental
        );
        progress(WorkflowProgress::new(
            WorkflowPhase::AwaitingExternalResult,
            50,
            "Converting...",
        ));

        match self.converter.convert(request) {
            Ok(output) => {
                progress(WorkflowProgress::new(
                    WorkflowPhase::AwaitingExternalResult,
                    90,
                    "Converting...",
                ));
                progress(WorkflowProgress::new(
                    WorkflowPhase::Notifying,
                    100,
                    "Conversion completed",
                ));
                Ok(DeckOutcome { output })
            }
            Err(err) => {
                log::warn!("deck conversion failed: {err}");
                progress(WorkflowProgress::new(
                    WorkflowPhase::Notifying,
                    0,
                    "Conversion failed",
                ));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeckOptions, DeckSource, WorkflowError};
    use std::sync::Mutex;

    struct RecordingConverter {
        fail_with: Option<String>,
        seen: Mutex<Vec<DeckRequest>>,
    }

    impl DeckConverter for RecordingConverter {
        fn convert(&self, request: &DeckRequest) -> Result<PathBuf> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.fail_with {
                Some(stderr) => Err(WorkflowError::Tool {
                    tool: "Pandoc".into(),
                    status: "exit status: 1".into(),
                    stderr: stderr.clone(),
                }),
                None => Ok(request.output.clone()),
            }
        }
    }

    fn request() -> DeckRequest {
        DeckRequest {
            source: DeckSource::Inline("# Deck".into()),
            output: PathBuf::from("/tmp/deck.pptx"),
            options: DeckOptions::default(),
        }
    }

    #[test]
    fn success_reports_monotonic_progress() {
        let converter = Arc::new(RecordingConverter {
            fail_with: None,
            seen: Mutex::new(Vec::new()),
        });
        let workflow = DeckWorkflow::new(converter.clone());
        let updates = Mutex::new(Vec::new());

        let outcome = workflow
            .run(&request(), |p| updates.lock().unwrap().push(p.percent))
            .unwrap();

        assert_eq!(outcome.output, PathBuf::from("/tmp/deck.pptx"));
        assert_eq!(updates.into_inner().unwrap(), vec![10, 30, 50, 90, 100]);
        assert_eq!(converter.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn failure_keeps_stderr() {
        let workflow = DeckWorkflow::new(Arc::new(RecordingConverter {
            fail_with: Some("pandoc: unknown writer".into()),
            seen: Mutex::new(Vec::new()),
        }));
        let last = Mutex::new(None);
        let err = workflow
            .run(&request(), |p| *last.lock().unwrap() = Some(p.status))
            .unwrap_err();
        assert!(err.to_string().contains("pandoc: unknown writer"));
        assert_eq!(last.into_inner().unwrap().as_deref(), Some("Conversion failed"));
    }
}

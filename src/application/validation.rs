//! Input checks run before any external collaborator is touched.

use std::path::{Path, PathBuf};

use crate::domain::{
    DeckForm, DeckInputMode, DeckOptions, DeckRequest, DeckSource, DiagramRequest, Result,
    SlideLevel, WorkflowError,
};

pub fn validate_diagram(description: &str) -> Result<DiagramRequest> {
    let description = description.trim();
    if description.is_empty() {
        return Err(WorkflowError::validation(
            "Please enter a description for the diagram you want to create.",
        ));
    }
    Ok(DiagramRequest {
        description: description.to_string(),
    })
}

pub fn validate_deck(form: &DeckForm) -> Result<DeckRequest> {
    let output = form.output_path.trim();
    if output.is_empty() {
        return Err(WorkflowError::validation("Please specify an output file"));
    }

    let source = match form.mode {
        DeckInputMode::File => {
            let input = form.input_path.trim();
            if input.is_empty() || !Path::new(input).is_file() {
                return Err(WorkflowError::validation("Please specify a valid input file"));
            }
            DeckSource::File(PathBuf::from(input))
        }
        DeckInputMode::Editor => {
            if form.markdown.trim().is_empty() {
                return Err(WorkflowError::validation("Markdown content is empty"));
            }
            DeckSource::Inline(form.markdown.clone())
        }
    };

    Ok(DeckRequest {
        source,
        output: PathBuf::from(output),
        options: DeckOptions {
            theme: form.theme,
            slide_level: SlideLevel::new(form.slide_level)?,
            incremental: form.incremental,
        },
    })
}

/// `<dir>/<stem>.pptx` next to the chosen Markdown file.
pub fn suggest_output_path(input: &Path) -> PathBuf {
    input.with_extension("pptx")
}

/// Read a Markdown file for the editor.
pub fn load_markdown(path: &str) -> Result<String> {
    let path = path.trim();
    if path.is_empty() || !Path::new(path).is_file() {
        return Err(WorkflowError::validation(
            "Please select a valid input file first",
        ));
    }
    std::fs::read_to_string(path)
        .map_err(|err| WorkflowError::validation(format!("Could not load file: {err}")))
}

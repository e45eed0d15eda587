//! Markdown -> PowerPoint through pandoc.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::domain::{DeckOptions, DeckRequest, DeckSource, DeckTheme, Result};
use crate::infra::app_config::AppConfig;
use crate::infra::process::{ToolCommand, run_tool};

pub const PANDOC_INSTALL_HINT: &str =
    "Please install pandoc from https://pandoc.org/installing.html";

/// Produces a slide deck at `request.output`.
pub trait DeckConverter: Send + Sync {
    fn convert(&self, request: &DeckRequest) -> Result<PathBuf>;
}

/// `<input.md> -o <output.pptx> -t pptx --slide-level <N> [-V theme=<name>] [-i]`
pub fn pandoc_args(input: &Path, output: &Path, options: &DeckOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        input.as_os_str().to_os_string(),
        "-o".into(),
        output.as_os_str().to_os_string(),
        "-t".into(),
        "pptx".into(),
        "--slide-level".into(),
        options.slide_level.get().to_string().into(),
    ];

    if options.theme != DeckTheme::Default {
        args.push("-V".into());
        args.push(format!("theme={}", options.theme).into());
    }

    if options.incremental {
        args.push("-i".into());
    }

    args
}

enum StagedInput<'a> {
    Existing(&'a Path),
    Temp(NamedTempFile),
}

impl StagedInput<'_> {
    fn path(&self) -> &Path {
        match self {
            StagedInput::Existing(path) => *path,
            StagedInput::Temp(file) => file.path(),
        }
    }
}

fn stage_markdown(text: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("sketchdeck-")
        .suffix(".md")
        .tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub struct Pandoc {
    tool: ToolCommand,
}

impl Pandoc {
    pub fn new(tool: ToolCommand) -> Self {
        Self { tool }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ToolCommand {
            label: "Pandoc",
            program: config.pandoc_command.clone(),
            install_hint: PANDOC_INSTALL_HINT,
            extra_paths: config.extra_search_paths(),
        })
    }

    pub fn tool(&self) -> &ToolCommand {
        &self.tool
    }
}

impl DeckConverter for Pandoc {
    fn convert(&self, request: &DeckRequest) -> Result<PathBuf> {
        // A staged temp file is removed when `input` drops, on every path out of here.
        let input = match &request.source {
            DeckSource::File(path) => StagedInput::Existing(path),
            DeckSource::Inline(text) => StagedInput::Temp(stage_markdown(text)?),
        };

        let args = pandoc_args(input.path(), &request.output, &request.options);
        run_tool(&self.tool, &args)?;

        log::info!("wrote deck to {}", request.output.display());
        Ok(request.output.clone())
    }
}

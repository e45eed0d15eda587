//! Diagram markup -> PNG through the Mermaid CLI.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

use crate::domain::{Result, WorkflowError};
use crate::infra::app_config::AppConfig;
use crate::infra::image::{PreviewImage, load_scaled};
use crate::infra::process::{ToolCommand, run_tool};

pub const MERMAID_INSTALL_HINT: &str =
    "Please install it using: npm install -g @mermaid-js/mermaid-cli";

/// Turns diagram markup into an image file.
pub trait DiagramRenderer: Send + Sync {
    fn render(&self, markup: &str) -> Result<RenderedImage>;
}

/// A rendered image in a temporary location. The file is deleted when this
/// value is dropped, presented, or persisted.
#[derive(Debug)]
pub struct RenderedImage {
    path: TempPath,
}

impl RenderedImage {
    pub fn from_temp_path(path: TempPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode for display, then remove the file.
    pub fn present(self, frame: (u32, u32)) -> Result<PreviewImage> {
        let preview = load_scaled(&self.path, frame);
        self.discard();
        preview
    }

    /// Copy to `dest`, then remove the temporary file.
    pub fn persist_to(self, dest: &Path) -> Result<PathBuf> {
        let copied = std::fs::copy(&self.path, dest).map(|_| dest.to_path_buf());
        self.discard();
        Ok(copied?)
    }

    fn discard(self) {
        let shown = self.path.display().to_string();
        if let Err(err) = self.path.close() {
            log::warn!("failed to remove temporary image {shown}: {err}");
        }
    }
}

pub fn mermaid_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-i".into(),
        input.as_os_str().to_os_string(),
        "-o".into(),
        output.as_os_str().to_os_string(),
    ]
}

/// `mmdc -i <input.mmd> -o <output.png>`
pub struct MermaidCli {
    tool: ToolCommand,
}

impl MermaidCli {
    pub fn new(tool: ToolCommand) -> Self {
        Self { tool }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ToolCommand {
            label: "Mermaid CLI",
            program: config.mermaid_command.clone(),
            install_hint: MERMAID_INSTALL_HINT,
            extra_paths: config.extra_search_paths(),
        })
    }

    pub fn tool(&self) -> &ToolCommand {
        &self.tool
    }
}

impl DiagramRenderer for MermaidCli {
    fn render(&self, markup: &str) -> Result<RenderedImage> {
        let mut input = tempfile::Builder::new()
            .prefix("sketchdeck-")
            .suffix(".mmd")
            .tempfile()?;
        input.write_all(markup.as_bytes())?;
        input.flush()?;

        // Owned before the tool runs so a failed render cannot leave a stray PNG.
        let output = TempPath::from_path(input.path().with_extension("png"));

        run_tool(&self.tool, &mermaid_args(input.path(), &output))?;

        if !output.exists() {
            return Err(WorkflowError::Tool {
                tool: self.tool.label.to_string(),
                status: "exit status: 0".to_string(),
                stderr: "renderer produced no output".to_string(),
            });
        }

        Ok(RenderedImage::from_temp_path(output))
    }
}

//! Blocking invocation of external command-line tools.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::{Result, WorkflowError};
use crate::infra::shell;

/// An external executable plus what to tell the user when it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Name shown in messages.
    pub label: &'static str,
    /// Configured command: a bare name looked up on the search path, or a path.
    pub program: String,
    pub install_hint: &'static str,
    pub extra_paths: Vec<PathBuf>,
}

impl ToolCommand {
    pub fn not_found(&self) -> WorkflowError {
        WorkflowError::ToolNotFound {
            tool: self.program.clone(),
            hint: self.install_hint.to_string(),
        }
    }

    pub fn resolve(&self) -> Option<PathBuf> {
        shell::find_bin(&self.program, &self.extra_paths)
    }
}

#[derive(Debug)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `tool` with `args`, wait for it and capture its output.
///
/// Non-zero exit becomes [`WorkflowError::Tool`] carrying stderr; an
/// unresolvable or unlaunchable executable becomes
/// [`WorkflowError::ToolNotFound`].
pub fn run_tool(tool: &ToolCommand, args: &[OsString]) -> Result<ToolOutput> {
    let program = tool.resolve().ok_or_else(|| tool.not_found())?;
    log::debug!("running {} {:?}", program.display(), args);

    let output = Command::new(&program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                tool.not_found()
            }
            _ => WorkflowError::Io(err),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if output.status.success() {
        log::debug!("{} finished successfully", tool.label);
        Ok(ToolOutput {
            status: output.status,
            stdout,
            stderr,
        })
    } else {
        log::warn!("{} exited with {}", tool.label, output.status);
        let stderr = if stderr.is_empty() {
            // Some tools report on stdout only.
            if stdout.is_empty() {
                "(no error output)".to_string()
            } else {
                stdout
            }
        } else {
            stderr
        };
        Err(WorkflowError::Tool {
            tool: tool.label.to_string(),
            status: output.status.to_string(),
            stderr,
        })
    }
}

use std::ffi::OsString;
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::process::{Command, Stdio};
use std::sync::OnceLock;

// Markers let us pick PATH out of login-shell output even if rc files print noise.
const PATH_MARKER_START: &str = "__SKETCHDECK_PATH_START__";
const PATH_MARKER_END: &str = "__SKETCHDECK_PATH_END__";

static LOGIN_PATH: OnceLock<Option<OsString>> = OnceLock::new();

/// PATH as seen by the user's login shell.
///
/// Apps started from a desktop launcher inherit a minimal PATH that usually
/// misses npm globals such as `mmdc`. Terminal launches already have the
/// right PATH, so capture is skipped there.
fn login_shell_path() -> Option<&'static OsString> {
    LOGIN_PATH
        .get_or_init(|| {
            if !should_load_shell_path() {
                return None;
            }
            capture_login_shell_path()
        })
        .as_ref()
}

/// Resolve `command` to an executable.
///
/// Search order: `extra_paths`, the process PATH, the login-shell PATH, then
/// well-known system directories. A command containing a path separator is
/// only checked as given.
pub fn find_bin(command: &str, extra_paths: &[PathBuf]) -> Option<PathBuf> {
    let command = command.trim();
    if command.is_empty() {
        return None;
    }

    let path = Path::new(command);
    if path.components().count() > 1 {
        return path.is_file().then(|| path.to_path_buf());
    }

    let search = std::env::join_paths(collect_search_paths(extra_paths)).ok()?;
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match which::which_in(command, Some(search), cwd) {
        Ok(found) => {
            log::debug!("resolved {command} to {}", found.display());
            Some(found)
        }
        Err(err) => {
            log::debug!("could not resolve {command}: {err}");
            None
        }
    }
}

/// Split a PATH-style list (`:` or `;` separated, per platform) into entries.
pub fn split_extra_path(value: &str) -> Vec<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    std::env::split_paths(trimmed)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

fn collect_search_paths(extra_paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    push_unique_paths(&mut paths, extra_paths.iter().cloned());

    if let Some(env_path) = std::env::var_os("PATH") {
        push_unique_paths(&mut paths, std::env::split_paths(&env_path));
    }

    if let Some(login_path) = login_shell_path() {
        push_unique_paths(&mut paths, std::env::split_paths(login_path));
    }

    push_unique_paths(&mut paths, default_search_paths());
    paths
}

fn default_search_paths() -> Vec<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        vec![
            PathBuf::from("/opt/homebrew/bin"),
            PathBuf::from("/usr/local/bin"),
            PathBuf::from("/usr/bin"),
            PathBuf::from("/bin"),
        ]
    }
    #[cfg(target_os = "linux")]
    {
        vec![
            PathBuf::from("/usr/local/bin"),
            PathBuf::from("/usr/bin"),
            PathBuf::from("/bin"),
        ]
    }
    #[cfg(target_os = "windows")]
    {
        let mut paths = Vec::new();
        if let Some(appdata) = std::env::var_os("APPDATA") {
            paths.push(PathBuf::from(appdata).join("npm"));
        }
        if let Some(root) = std::env::var_os("SystemRoot") {
            let root = PathBuf::from(root);
            paths.push(root.join("System32"));
            paths.push(root);
        }
        paths
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Vec::new()
    }
}

#[cfg(unix)]
fn should_load_shell_path() -> bool {
    use std::io::IsTerminal;

    if cfg!(test) {
        return false;
    }
    !std::io::stdout().is_terminal()
}

#[cfg(not(unix))]
fn should_load_shell_path() -> bool {
    false
}

#[cfg(unix)]
fn capture_login_shell_path() -> Option<OsString> {
    let shell = system_shell_path()?;
    let script = format!("printf '%s%s%s' '{PATH_MARKER_START}' \"$PATH\" '{PATH_MARKER_END}'");

    let output = Command::new(&shell)
        .args(["-l", "-i", "-c", &script])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        log::debug!("login shell {} exited with {}", shell.display(), output.status);
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_marked_path(&stdout).map(OsString::from)
}

#[cfg(not(unix))]
fn capture_login_shell_path() -> Option<OsString> {
    None
}

#[cfg(unix)]
fn system_shell_path() -> Option<PathBuf> {
    if let Ok(shell) = std::env::var("SHELL") {
        let path = PathBuf::from(shell.trim());
        if !path.as_os_str().is_empty() && path.exists() {
            return Some(path);
        }
    }

    ["/bin/zsh", "/bin/bash", "/bin/sh"]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

#[cfg_attr(not(unix), allow(dead_code))]
fn extract_marked_path(output: &str) -> Option<&str> {
    let start = output.rfind(PATH_MARKER_START)? + PATH_MARKER_START.len();
    let rest = &output[start..];
    let end = rest.find(PATH_MARKER_END)?;
    let value = rest[..end].trim();
    if value.is_empty() { None } else { Some(value) }
}

fn push_unique_paths<I>(dest: &mut Vec<PathBuf>, paths: I)
where
    I: IntoIterator<Item = PathBuf>,
{
    for path in paths {
        if !dest.iter().any(|existing| existing == &path) {
            dest.push(path);
        }
    }
}

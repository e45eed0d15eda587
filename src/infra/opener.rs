//! Opening produced files with the platform's default application.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::infra::platform::{Platform, current_platform};
use crate::infra::shell;

/// Launcher program and arguments for opening `path` on `platform`.
pub fn open_command(platform: Platform, path: &Path) -> (OsString, Vec<OsString>) {
    let target = path.as_os_str().to_os_string();
    match platform {
        Platform::MacOS => ("open".into(), vec![target]),
        Platform::Windows => (
            "cmd".into(),
            // The empty title keeps `start` from treating a quoted path as the window title.
            vec!["/C".into(), "start".into(), "".into(), target],
        ),
        Platform::LinuxWsl if shell::find_bin("wslview", &[]).is_some() => {
            ("wslview".into(), vec![target])
        }
        Platform::Linux | Platform::LinuxWsl | Platform::Unknown => {
            ("xdg-open".into(), vec![target])
        }
    }
}

/// Hand `path` to the default application without waiting for it.
pub fn open_path(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        ));
    }

    let (program, args) = open_command(current_platform(), path);
    log::info!("opening {} with {:?}", path.display(), program);
    Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

//! Platform detection with WSL support.
//!
//! Used to pick the right "open with default application" launcher.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    LinuxWsl,
    Windows,
    Unknown,
}

static PLATFORM: OnceLock<Platform> = OnceLock::new();

pub fn current_platform() -> Platform {
    *PLATFORM.get_or_init(detect_platform)
}

fn detect_platform() -> Platform {
    #[cfg(target_os = "macos")]
    {
        Platform::MacOS
    }
    #[cfg(target_os = "windows")]
    {
        Platform::Windows
    }
    #[cfg(target_os = "linux")]
    {
        if detect_wsl() {
            Platform::LinuxWsl
        } else {
            Platform::Linux
        }
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        Platform::Unknown
    }
}

#[cfg(target_os = "linux")]
fn detect_wsl() -> bool {
    if std::env::var("WSL_DISTRO_NAME").is_ok() {
        return true;
    }

    if std::path::Path::new("/proc/sys/fs/binfmt_misc/WSLInterop").exists() {
        return true;
    }

    std::fs::read_to_string("/proc/version")
        .map(|version| {
            let version = version.to_lowercase();
            version.contains("microsoft") || version.contains("wsl")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_platform_is_stable() {
        assert_eq!(current_platform(), current_platform());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn linux_is_detected_as_linux_family() {
        assert!(matches!(
            current_platform(),
            Platform::Linux | Platform::LinuxWsl
        ));
    }
}

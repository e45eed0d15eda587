use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::DeckTheme;
use crate::infra::shell;

pub const DEFAULT_API_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_MERMAID_COMMAND: &str = "mmdc";
pub const DEFAULT_PANDOC_COMMAND: &str = "pandoc";

const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
const MODEL_ENV: &str = "SKETCHDECK_MODEL";

/// Persisted settings. Every field is optional on disk.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefer `ANTHROPIC_API_KEY`; this is only a fallback.
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub mermaid_command: String,
    pub pandoc_command: String,
    /// Extra directories searched for external tools, PATH-style.
    pub extra_path: Option<String>,
    pub last_deck_theme: DeckTheme,
    pub last_slide_level: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            mermaid_command: DEFAULT_MERMAID_COMMAND.to_string(),
            pandoc_command: DEFAULT_PANDOC_COMMAND.to_string(),
            extra_path: None,
            last_deck_theme: DeckTheme::Default,
            last_slide_level: 2,
        }
    }
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("mermaid_command", &self.mermaid_command)
            .field("pandoc_command", &self.pandoc_command)
            .field("extra_path", &self.extra_path)
            .field("last_deck_theme", &self.last_deck_theme)
            .field("last_slide_level", &self.last_slide_level)
            .finish()
    }
}

impl AppConfig {
    /// API key from the environment, falling back to the config file.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    pub fn resolved_model(&self) -> String {
        std::env::var(MODEL_ENV)
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| self.model.clone())
    }

    pub fn extra_search_paths(&self) -> Vec<PathBuf> {
        self.extra_path
            .as_deref()
            .map(shell::split_extra_path)
            .unwrap_or_default()
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        log::debug!("no config at {}, using defaults", path.display());
        return AppConfig::default();
    };
    parse_config(&contents).unwrap_or_else(|err| {
        log::warn!("ignoring invalid config {}: {err}", path.display());
        AppConfig::default()
    })
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    std::fs::write(path, contents)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SKETCHDECK_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SKETCHDECK_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Sketchdeck");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Sketchdeck");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("sketchdeck");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("sketchdeck");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".sketchdeck")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.mermaid_command, "mmdc");
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config(
            r#"
pandoc_command = "/opt/pandoc/bin/pandoc"
last_deck_theme = "night"
"#,
        )
        .unwrap();
        assert_eq!(config.pandoc_command, "/opt/pandoc/bin/pandoc");
        assert_eq!(config.last_deck_theme, DeckTheme::Night);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("sk-secret".into()),
            ..AppConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig {
            extra_path: Some("/opt/node/bin".into()),
            last_slide_level: 3,
            ..AppConfig::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}

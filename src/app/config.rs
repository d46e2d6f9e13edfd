//! User configuration loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::AppError;

/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "KYOMU_CONFIG";

/// Chat assistant the prompt is meant for.
pub const DEFAULT_ASSISTANT_URL: &str = "https://chat.openai.com";

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub assistant: AssistantConfig,
}

/// How a generated prompt is handed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Copy every generated prompt to the system clipboard.
    pub copy_to_clipboard: bool,
    /// Print the assistant link after the prompt.
    pub show_assistant_link: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { copy_to_clipboard: false, show_assistant_link: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    pub url: Option<Url>,
}

impl AppConfig {
    pub fn assistant_url(&self) -> &str {
        self.assistant.url.as_ref().map(Url::as_str).unwrap_or(DEFAULT_ASSISTANT_URL)
    }
}

/// Parse configuration from string content.
pub fn parse_config(content: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Load configuration.
///
/// Resolution order: explicit path, `$KYOMU_CONFIG`, then the per-user config
/// file. Defaults apply when none of them exists. An explicitly named file
/// that is missing is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    if let Some(path) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return read_config(Path::new(&path));
    }

    match user_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => {
            debug!("no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("kyomu").join("config.toml"))
}

fn read_config(path: &Path) -> Result<AppConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }
    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

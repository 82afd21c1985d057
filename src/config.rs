use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

/// Environment variable that overrides `api_key` from the config file
pub const API_KEY_ENV: &str = "DRIVETUI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix for copied locations, e.g. "https://example.com"
    #[serde(default)]
    pub share_base_url: Option<String>,
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_icon_mode() -> String {
    "nerdfont".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            share_base_url: None,
            open_command: None,
            clipboard_command: None,
            vim_mode: false,
            icon_mode: default_icon_mode(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid (all-defaults) config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    /// Load from `path`, or fall back to defaults when no config file exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    /// Replace the configured key with one from the environment, if set
    pub fn apply_api_key_override(&mut self, env_key: Option<String>) {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// API key with blank values treated as absent
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// The public endpoint needs a key; a custom `base_url` (proxy) may not
    pub fn validate(&self) -> Result<()> {
        if self.api_key().is_none()
            && self.base_url.trim_end_matches('/') == DEFAULT_BASE_URL
        {
            anyhow::bail!(
                "No Drive API key configured.\n\
                 Set api_key in config.yaml, export {}, or point base_url at a proxy \
                 that holds the key.",
                API_KEY_ENV
            );
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `{config_dir}/drivetui/config.yaml`
/// then `./config.yaml` are tried, and `None` means "run on defaults".
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("drivetui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.icon_mode, "nerdfont");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.vim_mode);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
api_key: "secret"
base_url: "http://localhost:8080/drive/v3/"
share_base_url: "https://files.example.com"
open_command: "xdg-open"
clipboard_command: "wl-copy"
vim_mode: true
icon_mode: "emoji"
request_timeout_secs: 5
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.api_key().as_deref(), Some("secret"));
        assert_eq!(config.share_base_url.as_deref(), Some("https://files.example.com"));
        assert_eq!(config.open_command.as_deref(), Some("xdg-open"));
        assert_eq!(config.clipboard_command.as_deref(), Some("wl-copy"));
        assert!(config.vim_mode);
        assert_eq!(config.icon_mode, "emoji");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("vim_mode: [not a bool").is_err());
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let mut config = Config::from_yaml("api_key: from-file").unwrap();
        config.apply_api_key_override(Some("from-env".to_string()));
        assert_eq!(config.api_key().as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let mut config = Config::from_yaml("api_key: from-file").unwrap();
        config.apply_api_key_override(Some("   ".to_string()));
        config.apply_api_key_override(None);
        assert_eq!(config.api_key().as_deref(), Some("from-file"));
    }

    #[test]
    fn test_validate_requires_key_for_public_endpoint() {
        let config = Config::default();
        assert!(config.validate().is_err());

        let mut with_key = Config::default();
        with_key.api_key = Some("k".to_string());
        assert!(with_key.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_keyless_proxy() {
        let config = Config::from_yaml("base_url: http://127.0.0.1:9000/drive").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vim_mode: true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.vim_mode);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_find_config_path_missing_explicit_path() {
        let result = find_config_path(Some("/definitely/not/here/config.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_path_explicit_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let found = find_config_path(Some(&path)).unwrap();
        assert_eq!(found, Some(PathBuf::from(path)));
    }
}

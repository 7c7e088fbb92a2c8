use crate::errors::{Result, TesterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub browser: BrowserConfig,
    pub app: AppConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub headless: bool,
    pub viewport: Viewport,
    pub user_agent: Option<String>,
    pub args: Vec<String>,
    /// How long a widget lookup waits for its candidates to render, and the
    /// navigation timeout.
    pub element_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Directory that relative upload paths are resolved against.
    pub fixtures_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub wait_timeout_ms: u64,
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.app.base_url).map_err(|e| {
            TesterError::ConfigurationError(format!(
                "invalid base_url '{}': {}",
                self.app.base_url, e
            ))
        })?;

        if self.session.poll_interval_ms == 0 {
            return Err(TesterError::ConfigurationError(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport: Viewport::default(),
            user_agent: None,
            args: vec![],
            element_timeout_ms: 5000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8501".to_string(),
            fixtures_dir: PathBuf::from("."),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wait_timeout_ms: 10000,
            poll_interval_ms: 250,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

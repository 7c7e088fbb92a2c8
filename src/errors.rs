use crate::widgets::WidgetKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TesterError {
    #[error("Could not find {kind} with label: {label}")]
    LabelNotFound { kind: WidgetKind, label: String },

    #[error("Could not find a Radio Button option with label: {0}")]
    OptionNotFound(String),

    #[error("Browser launch failed: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Timed out after {timeout_ms}ms waiting for text: {text}")]
    Timeout { text: String, timeout_ms: u64 },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Driver error: {0}")]
    Driver(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TesterError>;

impl TesterError {
    /// True for the lookup failures raised by widget resolution.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            TesterError::LabelNotFound { .. } | TesterError::OptionNotFound(_)
        )
    }
}

use crate::errors::Result;
use crate::scenarios::Scenario;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub passed: bool,
    pub error: Option<String>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: uuid::Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub base_url: String,
    pub results: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4(),
            started_at: chrono::Utc::now(),
            base_url: base_url.into(),
            results: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.results.iter().filter(|r| !r.passed)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

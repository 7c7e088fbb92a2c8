use crate::core::{Config, Navigator, Session, SessionConfig};
use crate::errors::{Result, TesterError};
use crate::scenarios::Scenario;
use crate::types::{RunReport, ScenarioOutcome};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Polls the page text until it contains `text`.
pub fn wait_for_text<N: Navigator>(page: &N, text: &str, settings: &SessionConfig) -> Result<()> {
    let timeout = Duration::from_millis(settings.wait_timeout_ms);
    let interval = Duration::from_millis(settings.poll_interval_ms);
    let start = Instant::now();

    loop {
        if page.page_text()?.contains(text) {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(TesterError::Timeout {
                text: text.to_string(),
                timeout_ms: settings.wait_timeout_ms,
            });
        }
        std::thread::sleep(interval);
    }
}

/// Runs [`Scenario`]s one after another on a single session.
pub struct ScenarioRunner<'a, S> {
    session: &'a S,
    config: &'a Config,
}

impl<'a, S: Session + Navigator> ScenarioRunner<'a, S> {
    pub fn new(session: &'a S, config: &'a Config) -> Self {
        Self { session, config }
    }

    pub fn run_all(&self, scenarios: &[Scenario]) -> RunReport {
        let mut report = RunReport::new(self.config.app.base_url.clone());
        for scenario in scenarios {
            report.results.push(self.run_one(*scenario));
        }

        info!(
            run_id = %report.run_id,
            total = report.results.len(),
            failed = report.failed().count(),
            "scenario run finished"
        );
        report
    }

    pub fn run_one(&self, scenario: Scenario) -> ScenarioOutcome {
        info!(%scenario, page = scenario.page(), "running scenario");
        let start = Instant::now();
        let result = self.execute(scenario);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => {
                info!(%scenario, duration_ms, "scenario passed");
                ScenarioOutcome {
                    scenario,
                    passed: true,
                    error: None,
                    duration_ms,
                }
            }
            Err(e) => {
                warn!(%scenario, duration_ms, error = %e, "scenario failed");
                ScenarioOutcome {
                    scenario,
                    passed: false,
                    error: Some(e.to_string()),
                    duration_ms,
                }
            }
        }
    }

    fn execute(&self, scenario: Scenario) -> Result<()> {
        let settings = &self.config.session;

        self.session.open(scenario.page())?;
        wait_for_text(self.session, scenario.ready_text(), settings)?;
        scenario.drive(self.session, &self.config.app.fixtures_dir)?;
        wait_for_text(self.session, scenario.expected_text(), settings)
    }
}

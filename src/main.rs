use clap::{Parser, Subcommand};
use std::path::PathBuf;
use streamlit_ui_tester::{ChromeSession, Config, Scenario, ScenarioRunner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "streamlit-ui-tester",
    version,
    about = "Smoke-test a Streamlit app through its widgets"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available scenarios and the page each one opens
    List,
    /// Run scenarios against a live app
    Run(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// JSON config file; unset fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, env = "STREAMLIT_BASE_URL")]
    base_url: Option<String>,

    /// Directory holding upload fixtures such as test.csv
    #[arg(long)]
    fixtures_dir: Option<PathBuf>,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Scenario to run; repeat for several. Runs the default set when omitted
    #[arg(long = "scenario", value_enum)]
    scenarios: Vec<Scenario>,

    /// Write a JSON run report here
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match Cli::parse().command {
        Command::List => {
            for scenario in Scenario::ALL {
                let marker = if scenario.runs_by_default() { "" } else { "  (opt-in)" };
                println!("{:<18} /{}{}", scenario.name(), scenario.page(), marker);
            }
            Ok(())
        }
        Command::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(base_url) = args.base_url {
        config.app.base_url = base_url;
    }
    if let Some(dir) = args.fixtures_dir {
        config.app.fixtures_dir = dir;
    }
    if args.headed {
        config.browser.headless = false;
    }
    config.validate()?;

    let scenarios = if args.scenarios.is_empty() {
        Scenario::DEFAULT.to_vec()
    } else {
        args.scenarios
    };

    let session = ChromeSession::launch(&config)?;
    info!(base_url = %session.base_url(), count = scenarios.len(), "starting scenario run");

    let report = ScenarioRunner::new(&session, &config).run_all(&scenarios);

    if let Some(path) = &args.report {
        report.write_to(path)?;
        info!(path = %path.display(), "report written");
    }

    for outcome in report.failed() {
        error!(
            scenario = %outcome.scenario,
            error = outcome.error.as_deref().unwrap_or_default(),
            "failed"
        );
    }

    if !report.passed() {
        anyhow::bail!(
            "{} of {} scenarios failed",
            report.failed().count(),
            report.results.len()
        );
    }
    Ok(())
}

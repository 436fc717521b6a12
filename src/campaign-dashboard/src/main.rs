//! Campaign Dashboard — filter marketing campaigns by status and search text
//! and report totals for the visible subset.
//!
//! Main entry point that loads configuration and the dataset, then renders
//! once or runs an interactive session.

mod render;
mod session;

use anyhow::Context;
use campaign_core::config::AppConfig;
use campaign_core::CampaignStatus;
use campaign_reporting::{Dashboard, Dataset, FilterCriteria};
use clap::Parser;
use render::StdoutRenderer;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "campaign-dashboard")]
#[command(about = "Filter marketing campaigns and report their totals")]
#[command(version)]
struct Cli {
    /// Status to show (overrides config)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__DASHBOARD__DEFAULT_STATUS")]
    status: Option<CampaignStatus>,

    /// Free-text search applied to campaign names
    #[arg(long, default_value = "")]
    query: String,

    /// JSON dataset file (overrides config; built-in demo data when unset)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__DASHBOARD__DATASET_PATH")]
    data: Option<String>,

    /// Currency code used for cost columns (overrides config)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__DASHBOARD__CURRENCY")]
    currency: Option<String>,

    /// Print the dashboard as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Read `status` / `search` commands from stdin and redraw after each one
    #[arg(long, default_value_t = false)]
    interactive: bool,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "campaign_dashboard=info,campaign_reporting=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(status) = cli.status {
        config.dashboard.default_status = status;
    }
    if let Some(data) = cli.data {
        config.dashboard.dataset_path = Some(data);
    }
    if let Some(currency) = cli.currency {
        config.dashboard.currency = currency;
    }

    info!(
        status = %config.dashboard.default_status,
        currency = %config.dashboard.currency,
        dataset = config.dashboard.dataset_path.as_deref().unwrap_or("<seed>"),
        "Configuration loaded"
    );

    let dataset = match &config.dashboard.dataset_path {
        Some(path) => Dataset::from_json_file(path)
            .with_context(|| format!("failed to load campaign dataset from {path}"))?,
        None => Dataset::seed(),
    };

    let criteria = FilterCriteria::new(config.dashboard.default_status, cli.query);
    let mut dashboard = Dashboard::with_criteria(dataset, criteria);
    let renderer = Arc::new(StdoutRenderer {
        currency: config.dashboard.currency.clone(),
        json: cli.json,
    });

    print!("{}", renderer.render(dashboard.view()));

    if cli.interactive {
        eprintln!("{}", session::HELP);
        dashboard.subscribe(renderer.clone());
        let stdin = std::io::stdin();
        session::run(stdin.lock(), &mut dashboard, |d| {
            print!("{}", renderer.render(d.view()))
        })?;
    }

    Ok(())
}

//! Headless run of the dashboard cycles against a live service.
//!
//! Runs the startup analysis, optionally applies a base price, waits for the
//! pricing to settle and prints the same figures the dashboard cards show.
//! Exits non-zero when the run ends with an error message on screen.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Runtime;

use sales_dashboard::ui::utils::{format_money, format_ratio};
use sales_dashboard::{AnalyticsApi, Cli, DashboardEngine, HttpAnalyticsClient, PriceInput};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run one dashboard cycle without a window")]
struct ProbeArgs {
    #[command(flatten)]
    dashboard: Cli,

    /// How long to wait for in-flight cycles before giving up
    #[arg(long, default_value_t = 60_000)]
    settle_timeout_ms: u64,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = ProbeArgs::parse();
    let settle_timeout = Duration::from_millis(args.settle_timeout_ms);

    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let client = HttpAnalyticsClient::new(&args.dashboard.client_settings())
        .context("Failed to build analytics client")?;
    println!("Probing {}", client.base_url());
    let api: Arc<dyn AnalyticsApi> = Arc::new(client);

    // Startup runs at the default price; an explicit price is applied as an edit
    let mut engine = DashboardEngine::new(api, rt.handle().clone(), PriceInput::default());
    engine.start();
    if !engine.settle(settle_timeout) {
        anyhow::bail!("startup cycle did not settle within {:?}", settle_timeout);
    }

    if args.dashboard.base_price.is_some() {
        engine.set_base_price_input(args.dashboard.initial_input());
        if !engine.settle(settle_timeout) {
            anyhow::bail!("pricing did not settle within {:?}", settle_timeout);
        }
    }

    report(&engine);

    match engine.orchestration().error_message {
        Some(message) => {
            eprintln!("❌ {}", message);
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

fn report(engine: &DashboardEngine) {
    let state = engine.state();
    let metrics = engine.metrics();

    println!("Base price:      {}", state.input());
    match (metrics.trend_slope, metrics.fit_quality) {
        (Some(slope), Some(r2)) => {
            println!("Trend slope:     {}", format_ratio(slope));
            println!("Fit quality R²:  {}", format_ratio(r2));
        }
        _ => println!("Trend metrics:   unavailable"),
    }

    if let Some(analysis) = state.analysis() {
        for (label, plot) in [
            ("Trend plot", &analysis.trend_plot),
            ("Forecast plot", &analysis.forecast_plot),
        ] {
            match plot {
                Some(p) => println!("{:<16} {} base64 chars", format!("{}:", label), p.as_base64().len()),
                None => println!("{:<16} missing", format!("{}:", label)),
            }
        }
    }

    match (metrics.suggested_price, metrics.potential_gain, metrics.revenue) {
        (Some(price), Some(gain), Some(revenue)) => {
            println!("Suggested price: {}", format_money(price));
            println!("Weekly gain:     {} ({:?})", format_money(gain.amount), gain.sentiment);
            println!("Revenue at base: {}", format_money(revenue.revenue_at_base));
            println!("Revenue at sugg: {}", format_money(revenue.revenue_at_suggested));
        }
        _ => println!("Pricing:         unavailable"),
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use sales_dashboard::config::APP_STATE_PATH;
use sales_dashboard::ui::config::UI_TEXT;
use sales_dashboard::{AnalyticsApi, Cli, HttpAnalyticsClient, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime + client. The runtime outlives the window.
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let client = HttpAnalyticsClient::new(&args.client_settings())
        .context("Failed to build analytics client")?;
    log::info!("Analytics service at {}", client.base_url());
    let api: Arc<dyn AnalyticsApi> = Arc::new(client);
    let handle = rt.handle().clone();

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, api, handle, &args))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with error: {}", e))?;

    drop(rt);
    Ok(())
}

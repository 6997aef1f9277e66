#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;

// The orchestrator
pub mod engine;

// Re-export commonly used types
pub use data::{AnalyticsApi, ApiError, ClientSettings, HttpAnalyticsClient};
pub use domain::{AnalysisResult, PriceInput};
pub use engine::DashboardEngine;
pub use models::DashboardMetrics;
pub use ui::DashboardApp;

use std::sync::Arc;
use std::time::Duration;

// CLI argument parsing
use clap::Parser;
use tokio::runtime::Handle;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the analytics service
    #[arg(long, default_value_t = API.base_url.to_string())]
    pub api_base: String,

    /// Per request timeout in milliseconds
    #[arg(long, default_value_t = API.client.timeout_ms)]
    pub timeout_ms: u64,

    /// Starting base price (overrides the remembered one)
    #[arg(long)]
    pub base_price: Option<String>,
}

impl Cli {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_base.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }

    /// Starting input when no remembered state is consulted
    pub fn initial_input(&self) -> PriceInput {
        self.base_price
            .as_deref()
            .map(PriceInput::parse)
            .unwrap_or_default()
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    api: Arc<dyn AnalyticsApi>,
    runtime: Handle,
    cli: &Cli,
) -> Box<dyn eframe::App> {
    let app = ui::DashboardApp::new(
        cc,
        api,
        runtime,
        cli.api_base.clone(),
        cli.base_price.clone(),
    );
    Box::new(app)
}

//! Analytics service addressing and HTTP client defaults.

/// Endpoint paths, relative to the API base URL
pub struct Endpoints {
    pub analyze: &'static str,
    pub trend_plot: &'static str,
    pub forecast_plot: &'static str,
    pub suggest_price: &'static str,
    pub compute_revenue: &'static str,
}

/// Default values for the REST client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
    pub pool_max_idle_per_host: usize,
}

/// The Master API Configuration
pub struct ApiConfig {
    /// Used when no `--api-base` is given on the command line
    pub base_url: &'static str,
    pub endpoints: Endpoints,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://127.0.0.1:8000/api",
    endpoints: Endpoints {
        analyze: "analyze/",
        trend_plot: "plot/trend/",
        forecast_plot: "plot/forecast/",
        suggest_price: "price/",
        compute_revenue: "revenue/",
    },
    client: ClientDefaults {
        // The analysis endpoint fits and renders on every call, so be generous
        timeout_ms: 30_000,
        user_agent: concat!("sales-dashboard/", env!("CARGO_PKG_VERSION")),
        pool_max_idle_per_host: 4,
    },
};

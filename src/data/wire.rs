//! JSON shapes exchanged with the analytics service.
//!
//! Unknown fields are ignored so the service can grow its responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub slope: f64,
    pub r2: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlotResponse {
    pub plot: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceRequest {
    pub base_price: f64,
}

#[derive(Debug, Deserialize)]
pub struct SuggestPriceResponse {
    pub suggested_price: f64,
}

#[derive(Debug, Deserialize)]
pub struct RevenueResponse {
    pub base_price: f64,
    pub suggested_price: f64,
    pub revenue_base_price: f64,
    pub revenue_suggested_price: f64,
}

/// Body of a non-success response
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Extract the service's human-readable cause from a failure body, if any.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .map(|msg| msg.trim().to_string())
        .filter(|msg| !msg.is_empty())
}

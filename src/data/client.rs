//! HTTP client for the analytics service.
//!
//! `AnalyticsApi` is the seam the orchestrator talks to; the engine never
//! sees `reqwest` types.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::API;
use crate::domain::{PlotImage, PlotKind, PriceSuggestion, RevenueComparison, TrendMetrics};

use super::error::{ApiError, Operation};
use super::wire::{
    AnalyzeResponse, PlotResponse, PriceRequest, RevenueResponse, SuggestPriceResponse,
    server_message,
};

/// The request/response contract with the analytics and pricing engines
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn run_analysis(&self) -> Result<TrendMetrics, ApiError>;

    async fn fetch_plot(&self, kind: PlotKind) -> Result<PlotImage, ApiError>;

    async fn suggest_price(&self, base_price: f64) -> Result<PriceSuggestion, ApiError>;

    async fn compute_revenue(&self, base_price: f64) -> Result<RevenueComparison, ApiError>;
}

/// Runtime client settings (command line overrides applied)
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: API.base_url.to_string(),
            timeout: Duration::from_millis(API.client.timeout_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpAnalyticsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalyticsClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(API.client.user_agent)
            .pool_max_idle_per_host(API.client.pool_max_idle_per_host)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}/{}", self.base_url, operation.endpoint())
    }

    async fn send<R: DeserializeOwned>(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<R, ApiError> {
        log::debug!("-> {} ({})", operation, self.url(operation));

        let resp = request.send().await.map_err(|e| ApiError::Transport {
            operation,
            message: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::warn!(
                "{} returned {}: {}",
                operation,
                status.as_u16(),
                body.chars().take(300).collect::<String>()
            );
            return Err(ApiError::Status {
                operation,
                status: status.as_u16(),
                server_message: server_message(&body),
            });
        }

        resp.json::<R>().await.map_err(|e| ApiError::Decode {
            operation,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl AnalyticsApi for HttpAnalyticsClient {
    async fn run_analysis(&self) -> Result<TrendMetrics, ApiError> {
        let operation = Operation::Analyze;
        let payload: AnalyzeResponse = self
            .send(operation, self.client.post(self.url(operation)))
            .await?;

        Ok(TrendMetrics {
            slope: payload.slope,
            r2: payload.r2,
        })
    }

    async fn fetch_plot(&self, kind: PlotKind) -> Result<PlotImage, ApiError> {
        let operation = Operation::from(kind);
        let payload: PlotResponse = self
            .send(operation, self.client.get(self.url(operation)))
            .await?;

        Ok(PlotImage::from_base64(payload.plot))
    }

    async fn suggest_price(&self, base_price: f64) -> Result<PriceSuggestion, ApiError> {
        let operation = Operation::SuggestPrice;
        let payload: SuggestPriceResponse = self
            .send(
                operation,
                self.client
                    .post(self.url(operation))
                    .json(&PriceRequest { base_price }),
            )
            .await?;

        // The request parameter is authoritative for which price this answers
        Ok(PriceSuggestion {
            base_price_used: base_price,
            suggested_price: payload.suggested_price,
        })
    }

    async fn compute_revenue(&self, base_price: f64) -> Result<RevenueComparison, ApiError> {
        let operation = Operation::ComputeRevenue;
        let payload: RevenueResponse = self
            .send(
                operation,
                self.client
                    .post(self.url(operation))
                    .json(&PriceRequest { base_price }),
            )
            .await?;

        Ok(RevenueComparison {
            base_price: payload.base_price,
            suggested_price: payload.suggested_price,
            revenue_at_base: payload.revenue_base_price,
            revenue_at_suggested: payload.revenue_suggested_price,
        })
    }
}

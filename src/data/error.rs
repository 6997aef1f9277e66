use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::config::API;
use crate::domain::PlotKind;

/// The five remote operations the dashboard depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operation {
    #[strum(to_string = "run analysis")]
    Analyze,
    #[strum(to_string = "get trend plot")]
    TrendPlot,
    #[strum(to_string = "get forecast plot")]
    ForecastPlot,
    #[strum(to_string = "suggest price")]
    SuggestPrice,
    #[strum(to_string = "compute revenue")]
    ComputeRevenue,
}

impl Operation {
    pub fn endpoint(self) -> &'static str {
        match self {
            Operation::Analyze => API.endpoints.analyze,
            Operation::TrendPlot => API.endpoints.trend_plot,
            Operation::ForecastPlot => API.endpoints.forecast_plot,
            Operation::SuggestPrice => API.endpoints.suggest_price,
            Operation::ComputeRevenue => API.endpoints.compute_revenue,
        }
    }

    /// Shown when the service gives no usable cause of its own
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Analyze => "Failed to analyze sales data",
            Operation::TrendPlot => "Failed to load trend plot",
            Operation::ForecastPlot => "Failed to load forecast plot",
            Operation::SuggestPrice => "Failed to suggest price",
            Operation::ComputeRevenue => "Failed to calculate revenue",
        }
    }
}

impl From<PlotKind> for Operation {
    fn from(kind: PlotKind) -> Self {
        match kind {
            PlotKind::Trend => Operation::TrendPlot,
            PlotKind::Forecast => Operation::ForecastPlot,
        }
    }
}

/// Failure talking to the analytics service.
///
/// The orchestrator treats every variant the same way (abort the cycle, show
/// a message); the split only matters for logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{operation} returned status {status}")]
    Status {
        operation: Operation,
        status: u16,
        server_message: Option<String>,
    },

    #[error("{operation} request failed: {message}")]
    Transport { operation: Operation, message: String },

    #[error("{operation} response could not be decoded: {message}")]
    Decode { operation: Operation, message: String },

    #[error("HTTP client could not be built: {0}")]
    ClientBuild(String),
}

impl ApiError {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiError::Status { operation, .. }
            | ApiError::Transport { operation, .. }
            | ApiError::Decode { operation, .. } => Some(*operation),
            ApiError::ClientBuild(_) => None,
        }
    }

    /// The text shown in the error banner
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                server_message: Some(message),
                ..
            } => message.clone(),
            ApiError::ClientBuild(_) => self.to_string(),
            other => other
                .operation()
                .map(Operation::fallback_message)
                .unwrap_or("Request failed")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn server_supplied_cause_wins() {
        let err = ApiError::Status {
            operation: Operation::SuggestPrice,
            status: 400,
            server_message: Some("Run /analyze/ first".to_string()),
        };
        assert_eq!(err.user_message(), "Run /analyze/ first");
    }

    #[test]
    fn fallback_used_without_server_cause() {
        let status = ApiError::Status {
            operation: Operation::ComputeRevenue,
            status: 502,
            server_message: None,
        };
        let transport = ApiError::Transport {
            operation: Operation::Analyze,
            message: "connection refused".to_string(),
        };
        let decode = ApiError::Decode {
            operation: Operation::SuggestPrice,
            message: "missing field `suggested_price`".to_string(),
        };

        assert_eq!(status.user_message(), "Failed to calculate revenue");
        assert_eq!(transport.user_message(), "Failed to analyze sales data");
        assert_eq!(decode.user_message(), "Failed to suggest price");
    }

    #[test]
    fn every_operation_has_a_distinct_endpoint_and_message() {
        let ops: Vec<Operation> = Operation::iter().collect();
        for (i, a) in ops.iter().enumerate() {
            for b in &ops[i + 1..] {
                assert_ne!(a.endpoint(), b.endpoint());
                assert_ne!(a.fallback_message(), b.fallback_message());
            }
        }
    }
}

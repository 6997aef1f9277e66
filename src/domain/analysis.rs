use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use strum_macros::{Display, EnumIter};

/// Base metrics of a trend fit, as returned by the analysis step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendMetrics {
    pub slope: f64,
    pub r2: f64,
}

/// The two plot artifacts that illustrate a trend fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PlotKind {
    #[strum(to_string = "trend plot")]
    Trend,
    #[strum(to_string = "forecast plot")]
    Forecast,
}

/// An opaque, base64 encoded image blob.
/// Cloning shares the underlying buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotImage {
    encoded: Arc<str>,
}

impl PlotImage {
    pub fn from_base64(encoded: impl Into<Arc<str>>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    pub fn as_base64(&self) -> &str {
        &self.encoded
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.encoded.trim())
    }

    /// True when both handles point at the same buffer (i.e. the same delivery)
    pub fn same_blob(&self, other: &PlotImage) -> bool {
        Arc::ptr_eq(&self.encoded, &other.encoded)
    }
}

/// Snapshot of trend/forecast analytics.
///
/// Replaced wholesale by every successful analysis step; the plot fields are
/// the only ones merged in afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub metrics: TrendMetrics,
    pub trend_plot: Option<PlotImage>,
    pub forecast_plot: Option<PlotImage>,
}

impl AnalysisResult {
    pub fn from_metrics(metrics: TrendMetrics) -> Self {
        Self {
            metrics,
            trend_plot: None,
            forecast_plot: None,
        }
    }

    pub fn slope(&self) -> f64 {
        self.metrics.slope
    }

    pub fn r2(&self) -> f64 {
        self.metrics.r2
    }

    pub fn plot(&self, kind: PlotKind) -> Option<&PlotImage> {
        match kind {
            PlotKind::Trend => self.trend_plot.as_ref(),
            PlotKind::Forecast => self.forecast_plot.as_ref(),
        }
    }

    /// Merge one plot artifact without touching the base metrics
    pub fn merge_plot(&mut self, kind: PlotKind, image: PlotImage) {
        match kind {
            PlotKind::Trend => self.trend_plot = Some(image),
            PlotKind::Forecast => self.forecast_plot = Some(image),
        }
    }
}

use crate::data::ApiError;
use crate::domain::{PlotImage, PlotKind, PriceSuggestion, RevenueComparison, TrendMetrics};

use super::state::{CycleId, RecomputeTicket};

/// Reported by cycle tasks back to the engine, one message per completed step
#[derive(Debug, Clone)]
pub enum CycleEvent {
    /// Full cycle, step 1
    MetricsReady {
        cycle: CycleId,
        result: Result<TrendMetrics, ApiError>,
    },

    /// Full cycle, step 2 (one per plot kind, in completion order)
    PlotReady {
        cycle: CycleId,
        kind: PlotKind,
        result: Result<PlotImage, ApiError>,
    },

    /// Full cycle is over, successfully or not
    AnalysisFinished { cycle: CycleId, duration_ms: u128 },

    /// Both recompute fetches have returned
    RecomputeFinished {
        ticket: RecomputeTicket,
        duration_ms: u128,
        result: Result<(PriceSuggestion, RevenueComparison), ApiError>,
    },
}

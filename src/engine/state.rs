use chrono::{DateTime, Local};

use crate::data::ApiError;
use crate::domain::{
    AnalysisResult, PlotImage, PlotKind, PriceInput, PriceSuggestion, RevenueComparison,
    TrendMetrics, same_price,
};
use crate::models::DashboardMetrics;

/// Identifies one full analysis cycle. Also used as the generation of the
/// analysis result that cycle produced.
pub type CycleId = u64;

/// Everything a recompute cycle captures at launch.
/// Its result is only applied while both values are still current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecomputeTicket {
    pub base_price: f64,
    pub analysis_generation: CycleId,
}

/// UI-facing status of the most recent cycles
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrchestrationState {
    pub loading: bool,
    pub error_message: Option<String>,
}

/// What happened to a completed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Applied,
    Failed,
    /// The cycle went stale before its response arrived; nothing changed
    Discarded,
}

/// The orchestrator's state machine. No I/O happens here.
///
/// Each derived entity is only written by the completion handler of the cycle
/// kind that owns it: the full analysis cycle owns `analysis`, the recompute
/// cycle owns `suggestion` and `revenue`.
#[derive(Debug, Clone)]
pub struct DashboardState {
    input: PriceInput,
    /// Last input value greater than zero. Empty or zero input leaves it alone.
    effective_price: Option<f64>,

    analysis: Option<AnalysisResult>,
    analysis_generation: Option<CycleId>,
    suggestion: Option<PriceSuggestion>,
    revenue: Option<RevenueComparison>,

    error_message: Option<String>,
    analysis_in_flight: Option<CycleId>,
    recomputes_in_flight: usize,
    next_cycle: CycleId,
    last_refreshed: Option<DateTime<Local>>,
}

impl DashboardState {
    pub fn new(input: PriceInput) -> Self {
        Self {
            input,
            effective_price: input.positive(),
            analysis: None,
            analysis_generation: None,
            suggestion: None,
            revenue: None,
            error_message: None,
            analysis_in_flight: None,
            recomputes_in_flight: 0,
            next_cycle: 1,
            last_refreshed: None,
        }
    }

    // --- ACCESSORS ---

    pub fn input(&self) -> PriceInput {
        self.input
    }

    pub fn effective_price(&self) -> Option<f64> {
        self.effective_price
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn suggestion(&self) -> Option<&PriceSuggestion> {
        self.suggestion.as_ref()
    }

    pub fn revenue(&self) -> Option<&RevenueComparison> {
        self.revenue.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analysis_in_flight.is_some()
    }

    pub fn recomputes_in_flight(&self) -> usize {
        self.recomputes_in_flight
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    pub fn orchestration(&self) -> OrchestrationState {
        OrchestrationState {
            loading: self.analysis_in_flight.is_some() || self.recomputes_in_flight > 0,
            error_message: self.error_message.clone(),
        }
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::compose(
            self.analysis.as_ref(),
            self.suggestion.as_ref(),
            self.revenue.as_ref(),
            self.effective_price,
        )
    }

    // --- FULL ANALYSIS CYCLE ---

    /// Start a full cycle. Returns `None` while one is already in flight.
    pub fn begin_analysis(&mut self) -> Option<CycleId> {
        if self.analysis_in_flight.is_some() {
            return None;
        }

        let cycle = self.next_cycle;
        self.next_cycle += 1;
        self.analysis_in_flight = Some(cycle);
        self.error_message = None;
        Some(cycle)
    }

    /// Step 1. On success the result is replaced wholesale (old plots dropped)
    /// and, if the current input is a positive price, a recompute ticket is
    /// issued.
    pub fn apply_metrics(
        &mut self,
        cycle: CycleId,
        result: Result<TrendMetrics, ApiError>,
    ) -> (StepOutcome, Option<RecomputeTicket>) {
        if self.analysis_in_flight != Some(cycle) {
            return (StepOutcome::Discarded, None);
        }

        match result {
            Ok(metrics) => {
                self.analysis = Some(AnalysisResult::from_metrics(metrics));
                self.analysis_generation = Some(cycle);
                self.last_refreshed = Some(Local::now());
                // Zero or empty input suppresses pricing; the last figures stay on screen
                let ticket = match self.input.positive() {
                    Some(_) => self.issue_recompute(),
                    None => None,
                };
                (StepOutcome::Applied, ticket)
            }
            Err(err) => {
                // Abort: the previous result (plots included) stays untouched
                self.error_message = Some(err.user_message());
                self.analysis_in_flight = None;
                (StepOutcome::Failed, None)
            }
        }
    }

    /// Step 2. Plots are merged independently of each other.
    pub fn apply_plot(
        &mut self,
        cycle: CycleId,
        kind: PlotKind,
        result: Result<PlotImage, ApiError>,
    ) -> StepOutcome {
        if self.analysis_in_flight != Some(cycle) || self.analysis_generation != Some(cycle) {
            return StepOutcome::Discarded;
        }

        match result {
            Ok(image) => {
                if let Some(analysis) = self.analysis.as_mut() {
                    analysis.merge_plot(kind, image);
                }
                StepOutcome::Applied
            }
            Err(err) => {
                self.error_message = Some(err.user_message());
                StepOutcome::Failed
            }
        }
    }

    pub fn finish_analysis(&mut self, cycle: CycleId) {
        if self.analysis_in_flight == Some(cycle) {
            self.analysis_in_flight = None;
        }
    }

    // --- RECOMPUTE CYCLE ---

    /// Record a new input. Returns a ticket on every transition into a
    /// positive value (`Empty -> Valid(n)` included) once an analysis exists.
    pub fn set_input(&mut self, input: PriceInput) -> Option<RecomputeTicket> {
        let previous = self.input;
        self.input = input;

        let price = input.positive()?;
        if previous == input {
            return None;
        }

        self.effective_price = Some(price);
        self.issue_recompute()
    }

    pub fn apply_recompute(
        &mut self,
        ticket: RecomputeTicket,
        result: Result<(PriceSuggestion, RevenueComparison), ApiError>,
    ) -> StepOutcome {
        self.recomputes_in_flight = self.recomputes_in_flight.saturating_sub(1);

        if !self.is_current(&ticket) {
            return StepOutcome::Discarded;
        }

        match result {
            Ok((suggestion, revenue)) => {
                self.suggestion = Some(suggestion);
                self.revenue = Some(revenue);
                StepOutcome::Applied
            }
            Err(err) => {
                self.error_message = Some(err.user_message());
                StepOutcome::Failed
            }
        }
    }

    pub fn is_current(&self, ticket: &RecomputeTicket) -> bool {
        let same_input = self
            .effective_price
            .map(|price| same_price(price, ticket.base_price))
            .unwrap_or(false);
        same_input && self.analysis_generation == Some(ticket.analysis_generation)
    }

    fn issue_recompute(&mut self) -> Option<RecomputeTicket> {
        let analysis_generation = self.analysis_generation?;
        let base_price = self.effective_price?;

        self.recomputes_in_flight += 1;
        self.error_message = None;
        Some(RecomputeTicket {
            base_price,
            analysis_generation,
        })
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(PriceInput::default())
    }
}

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::runtime::Runtime;
use tokio::sync::Semaphore;

use crate::data::{AnalyticsApi, ApiError, Operation};
use crate::domain::{
    PlotImage, PlotKind, PriceInput, PriceSuggestion, RevenueComparison, TrendMetrics,
};
use crate::models::GainSentiment;

use super::{DashboardEngine, DashboardState};

const SETTLE: Duration = Duration::from_secs(5);

/// Scripted analytics service.
/// Pricing: suggested = base * 1.125, 35 units sold per week at either price.
struct ScriptedApi {
    metrics: Mutex<VecDeque<Result<TrendMetrics, ApiError>>>,
    trend_plot: Result<PlotImage, ApiError>,
    forecast_plot: Result<PlotImage, ApiError>,
    revenue_error: Option<ApiError>,
    /// Pricing calls for this base price wait for a permit on `gate`
    gated_price: Option<f64>,
    gate: Arc<Semaphore>,
    analysis_calls: AtomicUsize,
    plot_calls: AtomicUsize,
    suggest_calls: AtomicUsize,
}

impl ScriptedApi {
    fn new() -> Self {
        Self {
            metrics: Mutex::new(VecDeque::new()),
            trend_plot: Ok(PlotImage::from_base64("QjE=")),
            forecast_plot: Ok(PlotImage::from_base64("QjI=")),
            revenue_error: None,
            gated_price: None,
            gate: Arc::new(Semaphore::new(0)),
            analysis_calls: AtomicUsize::new(0),
            plot_calls: AtomicUsize::new(0),
            suggest_calls: AtomicUsize::new(0),
        }
    }

    fn metrics_then(self, result: Result<TrendMetrics, ApiError>) -> Self {
        self.metrics.lock().unwrap().push_back(result);
        self
    }

    fn trend_plot(mut self, result: Result<PlotImage, ApiError>) -> Self {
        self.trend_plot = result;
        self
    }

    fn gate_price(mut self, price: f64) -> Self {
        self.gated_price = Some(price);
        self
    }

    async fn hold_if_gated(&self, base_price: f64) {
        if self.gated_price == Some(base_price) {
            let _permit = self.gate.acquire().await.unwrap();
        }
    }
}

#[async_trait]
impl AnalyticsApi for ScriptedApi {
    async fn run_analysis(&self) -> Result<TrendMetrics, ApiError> {
        self.analysis_calls.fetch_add(1, Ordering::SeqCst);
        self.metrics
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(TrendMetrics {
                slope: 2.5,
                r2: 0.81,
            }))
    }

    async fn fetch_plot(&self, kind: PlotKind) -> Result<PlotImage, ApiError> {
        self.plot_calls.fetch_add(1, Ordering::SeqCst);
        match kind {
            PlotKind::Trend => self.trend_plot.clone(),
            PlotKind::Forecast => self.forecast_plot.clone(),
        }
    }

    async fn suggest_price(&self, base_price: f64) -> Result<PriceSuggestion, ApiError> {
        self.suggest_calls.fetch_add(1, Ordering::SeqCst);
        self.hold_if_gated(base_price).await;
        Ok(PriceSuggestion {
            base_price_used: base_price,
            suggested_price: base_price * 1.125,
        })
    }

    async fn compute_revenue(&self, base_price: f64) -> Result<RevenueComparison, ApiError> {
        self.hold_if_gated(base_price).await;
        if let Some(err) = &self.revenue_error {
            return Err(err.clone());
        }
        let suggested = base_price * 1.125;
        Ok(RevenueComparison {
            base_price,
            suggested_price: suggested,
            revenue_at_base: base_price * 35.0,
            revenue_at_suggested: suggested * 35.0,
        })
    }
}

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

fn started(rt: &Runtime, api: &Arc<ScriptedApi>, input: PriceInput) -> DashboardEngine {
    let api: Arc<dyn AnalyticsApi> = api.clone();
    let mut engine = DashboardEngine::new(api, rt.handle().clone(), input);
    engine.start();
    assert!(engine.settle(SETTLE), "startup cycles did not settle");
    engine
}

fn wait_until(engine: &mut DashboardEngine, what: &str, cond: impl Fn(&DashboardState) -> bool) {
    let deadline = Instant::now() + SETTLE;
    while !cond(engine.state()) {
        assert!(Instant::now() < deadline, "timed out waiting for {}", what);
        engine.wait_for_event(Duration::from_millis(20));
    }
}

#[test]
fn startup_then_operator_price_end_to_end() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new());
    let mut engine = started(&rt, &api, PriceInput::Valid(100.0));

    let analysis = engine.state().analysis().unwrap();
    assert_eq!(analysis.slope(), 2.5);
    assert_eq!(analysis.r2(), 0.81);
    assert_eq!(analysis.trend_plot.as_ref().unwrap().as_base64(), "QjE=");
    assert_eq!(analysis.forecast_plot.as_ref().unwrap().as_base64(), "QjI=");

    engine.set_base_price_input(PriceInput::parse("120"));
    assert!(engine.is_busy());
    assert!(engine.settle(SETTLE));

    let metrics = engine.metrics();
    assert_eq!(metrics.suggested_price, Some(135.0));
    let gain = metrics.potential_gain.unwrap();
    assert_eq!(gain.amount, 525.0);
    assert_eq!(gain.sentiment, GainSentiment::Favorable);

    let revenue = metrics.revenue.unwrap();
    assert_eq!(revenue.revenue_at_base, 4200.0);
    assert_eq!(revenue.revenue_at_suggested, 4725.0);
    assert_eq!(engine.orchestration().error_message, None);
}

#[test]
fn slow_old_price_cannot_clobber_newer_result() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new().gate_price(100.0));
    let mut engine = started(&rt, &api, PriceInput::Valid(50.0));

    engine.set_base_price_input(PriceInput::Valid(100.0));
    engine.set_base_price_input(PriceInput::Valid(150.0));
    wait_until(&mut engine, "150 result", |s| {
        s.suggestion().map(|p| p.base_price_used) == Some(150.0)
    });

    // release the 100 cycle only after 150 has landed
    api.gate.add_permits(1);
    wait_until(&mut engine, "all pricing settled", |s| s.recomputes_in_flight() == 0);

    let state = engine.state();
    assert_eq!(state.suggestion().unwrap().base_price_used, 150.0);
    assert_eq!(state.revenue().unwrap().base_price, 150.0);
    assert_eq!(engine.metrics().suggested_price, Some(168.75));
}

#[test]
fn pricing_in_flight_does_not_hold_back_refresh() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new().gate_price(120.0));
    let mut engine = started(&rt, &api, PriceInput::Valid(100.0));

    engine.set_base_price_input(PriceInput::Valid(120.0));
    engine.update();
    assert!(engine.is_busy());
    assert!(engine.can_refresh());

    assert!(engine.refresh());
    assert!(!engine.can_refresh());

    // the new analysis reprices 120 as well; release both gated cycles
    api.gate.add_permits(4);
    assert!(engine.settle(SETTLE));
    assert!(engine.can_refresh());
    assert_eq!(api.analysis_calls.load(Ordering::SeqCst), 2);
    assert_eq!(engine.metrics().suggested_price, Some(135.0));
}

#[test]
fn zero_or_unparsable_price_sends_nothing() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new());
    let mut engine = started(&rt, &api, PriceInput::Valid(100.0));
    let calls_before = api.suggest_calls.load(Ordering::SeqCst);

    for text in ["", "0", "abc", "-3"] {
        engine.set_base_price_input(PriceInput::parse(text));
        assert!(!engine.update());
    }

    assert_eq!(api.suggest_calls.load(Ordering::SeqCst), calls_before);
    assert_eq!(engine.orchestration().error_message, None);
    assert_eq!(engine.metrics().suggested_price, Some(112.5));
}

#[test]
fn refresh_with_zero_or_empty_price_sends_no_pricing() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new());
    let mut engine = started(&rt, &api, PriceInput::Valid(100.0));
    let calls_before = api.suggest_calls.load(Ordering::SeqCst);

    for text in ["0", ""] {
        engine.set_base_price_input(PriceInput::parse(text));
        assert!(engine.refresh());
        assert!(engine.settle(SETTLE));
    }

    assert_eq!(api.analysis_calls.load(Ordering::SeqCst), 3);
    assert_eq!(api.suggest_calls.load(Ordering::SeqCst), calls_before);
    assert_eq!(engine.orchestration().error_message, None);
    assert_eq!(engine.metrics().suggested_price, Some(112.5));
}

#[test]
fn trend_plot_failure_keeps_metrics_and_forecast() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new().trend_plot(Err(ApiError::Status {
        operation: Operation::TrendPlot,
        status: 400,
        server_message: Some("Run /analyze/ first".to_string()),
    })));
    let engine = started(&rt, &api, PriceInput::Valid(100.0));

    let analysis = engine.state().analysis().unwrap();
    assert_eq!(analysis.slope(), 2.5);
    assert!(analysis.trend_plot.is_none());
    assert!(analysis.forecast_plot.is_some());
    assert_eq!(
        engine.orchestration().error_message.as_deref(),
        Some("Run /analyze/ first")
    );
    assert!(!engine.is_busy());
}

#[test]
fn failed_analysis_skips_plots_and_pricing() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new().metrics_then(Err(ApiError::Transport {
        operation: Operation::Analyze,
        message: "connection refused".to_string(),
    })));
    let engine = started(&rt, &api, PriceInput::Valid(100.0));

    assert!(engine.state().analysis().is_none());
    assert_eq!(api.plot_calls.load(Ordering::SeqCst), 0);
    assert_eq!(api.suggest_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        engine.orchestration().error_message.as_deref(),
        Some("Failed to analyze sales data")
    );
}

#[test]
fn refresh_keeps_operator_price_and_reprices() {
    let rt = runtime();
    let api = Arc::new(ScriptedApi::new().metrics_then(Ok(TrendMetrics {
        slope: 1.0,
        r2: 0.5,
    })));
    let mut engine = started(&rt, &api, PriceInput::Valid(100.0));

    engine.set_base_price_input(PriceInput::Valid(120.0));
    assert!(engine.settle(SETTLE));
    let calls_before = api.suggest_calls.load(Ordering::SeqCst);

    assert!(engine.refresh());
    assert!(!engine.refresh(), "second refresh should be refused while in flight");
    assert!(engine.settle(SETTLE));

    assert_eq!(api.analysis_calls.load(Ordering::SeqCst), 2);
    assert_eq!(engine.state().input(), PriceInput::Valid(120.0));
    assert_eq!(engine.state().analysis().unwrap().slope(), 2.5);
    assert_eq!(api.suggest_calls.load(Ordering::SeqCst), calls_before + 1);
    assert_eq!(engine.metrics().suggested_price, Some(135.0));
}

#[test]
fn revenue_failure_keeps_previous_pricing_pair() {
    let rt = runtime();
    let mut scripted = ScriptedApi::new();
    scripted.revenue_error = Some(ApiError::Status {
        operation: Operation::ComputeRevenue,
        status: 500,
        server_message: None,
    });
    let api = Arc::new(scripted);
    let engine = started(&rt, &api, PriceInput::Valid(100.0));

    assert!(engine.state().suggestion().is_none());
    assert!(engine.state().revenue().is_none());
    assert!(!engine.metrics().has_pricing());
    assert_eq!(
        engine.orchestration().error_message.as_deref(),
        Some("Failed to calculate revenue")
    );
}

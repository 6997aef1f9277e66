use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError, channel};
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::AnalyticsApi;
use crate::domain::PriceInput;
use crate::models::DashboardMetrics;

use super::messages::CycleEvent;
use super::state::{DashboardState, OrchestrationState, RecomputeTicket, StepOutcome};
use super::worker;

/// The Dashboard Orchestrator.
///
/// Owns the state machine and launches cycles onto the tokio runtime. Cycle
/// tasks never touch state directly: they report over the channel and
/// `update` applies the reports on the caller's thread.
pub struct DashboardEngine {
    state: DashboardState,

    api: Arc<dyn AnalyticsApi>,
    runtime: Handle,

    /// Worker Communication
    event_tx: Sender<CycleEvent>,
    event_rx: Receiver<CycleEvent>,
}

impl DashboardEngine {
    pub fn new(api: Arc<dyn AnalyticsApi>, runtime: Handle, initial_input: PriceInput) -> Self {
        let (event_tx, event_rx) = channel::<CycleEvent>();

        Self {
            state: DashboardState::new(initial_input),
            api,
            runtime,
            event_tx,
            event_rx,
        }
    }

    /// Startup: one full analysis cycle
    pub fn start(&mut self) {
        log::info!("Starting dashboard with base price {}", self.state.input());
        self.refresh();
    }

    /// "Refresh Data". Returns false if a full cycle is already running.
    pub fn refresh(&mut self) -> bool {
        let Some(cycle) = self.state.begin_analysis() else {
            log::info!("Refresh ignored: analysis cycle already in flight");
            return false;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cycle_events {
            log::info!("[cycle {}] analysis started", cycle);
        }

        worker::spawn_analysis_cycle(
            &self.runtime,
            Arc::clone(&self.api),
            self.event_tx.clone(),
            cycle,
        );
        true
    }

    pub fn set_base_price_input(&mut self, input: PriceInput) {
        if let Some(ticket) = self.state.set_input(input) {
            self.dispatch_recompute(ticket);
        }
    }

    /// THE FRAME HOOK.
    /// Applies every report that has arrived so far without blocking.
    /// Returns TRUE while any cycle is still in flight, telling the UI to keep
    /// waking up.
    pub fn update(&mut self) -> bool {
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => self.handle_event(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.is_busy()
    }

    /// Block for at most `timeout` waiting for one report, then apply it.
    /// Returns false if nothing arrived.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Apply reports until no cycle is in flight. Returns false on timeout.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.update() {
            let now = Instant::now();
            if now >= deadline {
                log::warn!("Cycles still in flight after {:?}", timeout);
                return false;
            }
            self.wait_for_event(deadline - now);
        }
        true
    }

    // --- ACCESSORS FOR UI ---

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn orchestration(&self) -> OrchestrationState {
        self.state.orchestration()
    }

    pub fn metrics(&self) -> DashboardMetrics {
        self.state.metrics()
    }

    /// Refresh is only held back by a full cycle; pricing in flight does not block it
    pub fn can_refresh(&self) -> bool {
        !self.state.is_analyzing()
    }

    pub fn is_busy(&self) -> bool {
        self.state.orchestration().loading
    }

    pub fn get_activity_msg(&self) -> Option<String> {
        let recomputes = self.state.recomputes_in_flight();
        if self.state.is_analyzing() {
            Some("Analyzing sales data".to_string())
        } else if recomputes > 0 {
            Some(format!("Pricing ({} in flight)", recomputes))
        } else {
            None
        }
    }

    // --- INTERNAL LOGIC ---

    fn dispatch_recompute(&mut self, ticket: RecomputeTicket) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cycle_events {
            log::info!(
                "[pricing] recompute for base price {} (analysis {})",
                ticket.base_price,
                ticket.analysis_generation
            );
        }

        worker::spawn_recompute_cycle(
            &self.runtime,
            Arc::clone(&self.api),
            self.event_tx.clone(),
            ticket,
        );
    }

    fn handle_event(&mut self, event: CycleEvent) {
        match event {
            CycleEvent::MetricsReady { cycle, result } => {
                if let Err(e) = &result {
                    log::error!("[cycle {}] analysis failed: {}", cycle, e);
                }
                let (outcome, ticket) = self.state.apply_metrics(cycle, result);
                Self::log_outcome("analysis", outcome);
                if let Some(ticket) = ticket {
                    self.dispatch_recompute(ticket);
                }
            }
            CycleEvent::PlotReady {
                cycle,
                kind,
                result,
            } => {
                if let Err(e) = &result {
                    log::error!("[cycle {}] {} failed: {}", cycle, kind, e);
                }
                let outcome = self.state.apply_plot(cycle, kind, result);
                Self::log_outcome("plot", outcome);
            }
            CycleEvent::AnalysisFinished { cycle, duration_ms } => {
                self.state.finish_analysis(cycle);
                log::info!("[cycle {}] analysis finished in {} ms", cycle, duration_ms);
            }
            CycleEvent::RecomputeFinished {
                ticket,
                duration_ms,
                result,
            } => {
                if let Err(e) = &result {
                    log::error!("[pricing] base price {}: {}", ticket.base_price, e);
                }
                let outcome = self.state.apply_recompute(ticket, result);
                Self::log_outcome("pricing", outcome);
                log::debug!(
                    "[pricing] base price {} settled in {} ms ({:?})",
                    ticket.base_price,
                    duration_ms,
                    outcome
                );
            }
        }
    }

    #[allow(unused_variables)]
    fn log_outcome(step: &str, outcome: StepOutcome) {
        #[cfg(debug_assertions)]
        if outcome == StepOutcome::Discarded && DEBUG_FLAGS.print_stale_discards {
            log::info!("[{}] stale response discarded", step);
        }
    }
}

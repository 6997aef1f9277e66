use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::data::AnalyticsApi;
use crate::domain::PlotKind;

use super::messages::CycleEvent;
use super::state::{CycleId, RecomputeTicket};

// Sends ignore a dead receiver: that only happens while the engine shuts down.

/// Metrics first; the two plots only once metrics succeeded, then concurrently.
pub fn spawn_analysis_cycle(
    runtime: &Handle,
    api: Arc<dyn AnalyticsApi>,
    tx: Sender<CycleEvent>,
    cycle: CycleId,
) {
    runtime.spawn(async move {
        let start = Instant::now();

        let metrics = api.run_analysis().await;
        let metrics_ok = metrics.is_ok();
        let _ = tx.send(CycleEvent::MetricsReady {
            cycle,
            result: metrics,
        });

        if metrics_ok {
            tokio::join!(
                fetch_plot(api.as_ref(), &tx, cycle, PlotKind::Trend),
                fetch_plot(api.as_ref(), &tx, cycle, PlotKind::Forecast),
            );
        }

        let _ = tx.send(CycleEvent::AnalysisFinished {
            cycle,
            duration_ms: start.elapsed().as_millis(),
        });
    });
}

async fn fetch_plot(
    api: &dyn AnalyticsApi,
    tx: &Sender<CycleEvent>,
    cycle: CycleId,
    kind: PlotKind,
) {
    let result = api.fetch_plot(kind).await;
    let _ = tx.send(CycleEvent::PlotReady {
        cycle,
        kind,
        result,
    });
}

/// Suggestion and revenue are both parameterized by the ticket's base price,
/// so they go out together and come back as one event.
pub fn spawn_recompute_cycle(
    runtime: &Handle,
    api: Arc<dyn AnalyticsApi>,
    tx: Sender<CycleEvent>,
    ticket: RecomputeTicket,
) {
    runtime.spawn(async move {
        let start = Instant::now();

        let (suggestion, revenue) = tokio::join!(
            api.suggest_price(ticket.base_price),
            api.compute_revenue(ticket.base_price),
        );
        let result = match (suggestion, revenue) {
            (Ok(suggestion), Ok(revenue)) => Ok((suggestion, revenue)),
            (Err(err), _) | (_, Err(err)) => Err(err),
        };

        let _ = tx.send(CycleEvent::RecomputeFinished {
            ticket,
            duration_ms: start.elapsed().as_millis(),
            result,
        });
    });
}

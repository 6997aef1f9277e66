pub mod core;
pub mod messages;
pub mod state;
pub mod worker;

#[cfg(test)]
mod tests;

// Re-export key components
pub use core::DashboardEngine;
pub use messages::CycleEvent;
pub use state::{CycleId, DashboardState, OrchestrationState, RecomputeTicket, StepOutcome};

// User interface components
pub mod app;
pub mod config;
pub mod plot_view;
pub mod styles;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::{DashboardApp, PersistedUiState};
pub use config::UI_CONFIG;

use std::sync::Arc;

use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use crate::config::PRICING;
use crate::data::AnalyticsApi;
use crate::domain::PriceInput;
use crate::engine::DashboardEngine;
use crate::ui::config::UI_CONFIG;
use crate::ui::plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// What survives a restart: only the operator's base price text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedUiState {
    pub base_price_text: String,
}

impl Default for PersistedUiState {
    fn default() -> Self {
        Self {
            base_price_text: PRICING.default_base_price.to_string(),
        }
    }
}

pub struct DashboardApp {
    pub(super) engine: DashboardEngine,
    /// Raw text of the base price field, exactly as typed
    pub(super) price_text: String,
    pub(super) plot_view: PlotView,
    /// Shown in the status bar
    pub(super) api_label: String,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api: Arc<dyn AnalyticsApi>,
        runtime: Handle,
        api_label: String,
        base_price_override: Option<String>,
    ) -> Self {
        let persisted = Self::load_persisted(cc);

        // A price given on the command line wins over the remembered one
        let price_text = base_price_override.unwrap_or(persisted.base_price_text);
        let initial_input = PriceInput::parse(&price_text);

        let mut engine = DashboardEngine::new(api, runtime, initial_input);
        engine.start();

        Self {
            engine,
            price_text,
            plot_view: PlotView::default(),
            api_label,
        }
    }

    fn load_persisted(cc: &eframe::CreationContext<'_>) -> PersistedUiState {
        let Some(storage) = cc.storage else {
            return PersistedUiState::default();
        };

        match eframe::get_value::<PersistedUiState>(storage, eframe::APP_KEY) {
            Some(value) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Loaded persisted UI state: {:?}", value);
                }
                value
            }
            None => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted UI state found. Using defaults.");
                }
                PersistedUiState::default()
            }
        }
    }

    /// Called by the render layer whenever the price field text changes
    pub(super) fn on_price_text_changed(&mut self) {
        let input = PriceInput::parse(&self.price_text);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Base price field '{}' -> {}", self.price_text, input);
        }

        self.engine.set_base_price_input(input);
    }

    pub(super) fn on_refresh_clicked(&mut self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Refresh requested");
        }

        self.engine.refresh();
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // In-flight cycles are abandoned; their reports go nowhere
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Application shutdown complete ({} pricing requests abandoned).",
                self.engine.state().recomputes_in_flight()
            );
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let persisted = PersistedUiState {
            base_price_text: self.price_text.clone(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &persisted);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let busy = self.engine.update();
        self.plot_view.sync(ctx, self.engine.state().analysis());

        self.render_status_panel(ctx);
        if self.engine.state().is_analyzing() {
            self.render_loading_screen(ctx);
        } else {
            self.render_central_panel(ctx);
        }

        if busy {
            ctx.request_repaint_after(UI_CONFIG.poll_interval);
        }
    }
}

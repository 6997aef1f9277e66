use eframe::egui::{
    Button, CentralPanel, Context, Frame, Margin, RichText, ScrollArea, TextEdit, TopBottomPanel,
    Ui,
};

use crate::config::PRICING;
use crate::domain::PlotKind;
use crate::models::DashboardMetrics;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::plot_view::show_revenue_chart;
use crate::ui::styles::{CardTone, UiStyleExt};
use crate::ui::utils::{
    colored_subsection_heading, format_money, format_ratio, priced_label, section_heading,
    spaced_separator,
};

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_loading_screen(&mut self, ctx: &Context) {
        let frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.spinner();
                ui.add_space(8.0);
                ui.label(RichText::new(UI_TEXT.loading_message).size(18.0));
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.render_header(ui);

                if let Some(message) = self.engine.orchestration().error_message {
                    ui.add_space(8.0);
                    ui.error_banner(message);
                }

                self.render_controls(ui);

                let metrics = self.engine.metrics();
                self.render_metric_cards(ui, &metrics);

                spaced_separator(ui);
                self.render_plots(ui);

                if let Some(revenue) = metrics.revenue {
                    spaced_separator(ui);
                    section_heading(ui, UI_TEXT.revenue_heading);
                    ui.metric(
                        &priced_label(UI_TEXT.at_base_price, revenue.base_price),
                        &format_money(revenue.revenue_at_base),
                        UI_CONFIG.colors.base_bar,
                    );
                    ui.metric(
                        &priced_label(UI_TEXT.at_suggested_price, revenue.suggested_price),
                        &format_money(revenue.revenue_at_suggested),
                        UI_CONFIG.colors.suggested_bar,
                    );
                    show_revenue_chart(ui, &revenue);
                }
            });
        });
    }

    fn render_header(&self, ui: &mut Ui) {
        ui.label_header(UI_TEXT.header_title);
        ui.label_subdued(UI_TEXT.header_subtitle);
    }

    fn render_controls(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.pricing_heading);

        let can_refresh = self.engine.can_refresh();
        let pricing_in_flight = self.engine.state().recomputes_in_flight() > 0;

        ui.horizontal(|ui| {
            ui.label(format!(
                "{} ({}):",
                UI_TEXT.base_price_label, PRICING.currency_label
            ));

            let response = ui.add(
                TextEdit::singleline(&mut self.price_text)
                    .hint_text(UI_TEXT.base_price_hint)
                    .desired_width(UI_CONFIG.price_field_width),
            );
            if response.changed() {
                self.on_price_text_changed();
            }

            ui.add_space(12.0);
            let refresh = ui.add_enabled(can_refresh, Button::new(UI_TEXT.refresh_button));
            if refresh.clicked() {
                self.on_refresh_clicked();
            }

            if pricing_in_flight {
                ui.spinner();
            }
        });
    }

    fn render_metric_cards(&self, ui: &mut Ui, metrics: &DashboardMetrics) {
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            if let Some(slope) = metrics.trend_slope {
                ui.metric_card(UI_TEXT.card_trend_slope, &format_ratio(slope), CardTone::Neutral);
            }
            if let Some(r2) = metrics.fit_quality {
                ui.metric_card(UI_TEXT.card_fit_quality, &format_ratio(r2), CardTone::Neutral);
            }
            if let (Some(price), Some(gain)) = (metrics.suggested_price, metrics.potential_gain) {
                ui.metric_card(
                    UI_TEXT.card_suggested_price,
                    &format_money(price),
                    CardTone::Neutral,
                );
                ui.metric_card(
                    UI_TEXT.card_weekly_gain,
                    &format_money(gain.amount),
                    CardTone::from(gain.sentiment),
                );
            }
        });
    }

    fn render_plots(&self, ui: &mut Ui) {
        ui.columns(2, |columns| {
            columns[0].label(colored_subsection_heading(UI_TEXT.trend_heading));
            self.plot_view.show_plot(&mut columns[0], PlotKind::Trend);

            columns[1].label(colored_subsection_heading(UI_TEXT.forecast_heading));
            self.plot_view.show_plot(&mut columns[1], PlotKind::Forecast);
        });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric("📡", &self.api_label, UI_CONFIG.colors.neutral_value);
                    ui.separator();

                    match self.engine.get_activity_msg() {
                        Some(msg) => {
                            ui.spinner();
                            ui.label_subdued(msg);
                        }
                        None => ui.label_subdued(UI_TEXT.status_idle),
                    }
                    ui.separator();

                    let refreshed = self
                        .engine
                        .state()
                        .last_refreshed()
                        .map(|t| t.format("%H:%M:%S").to_string())
                        .unwrap_or_else(|| UI_TEXT.status_never_refreshed.to_string());
                    ui.metric("Last refresh", &refreshed, UI_CONFIG.colors.neutral_value);

                    if let Some(price) = self.engine.state().effective_price() {
                        ui.separator();
                        ui.metric("Base", &format_money(price), UI_CONFIG.colors.neutral_value);
                    }
                });
            });
    }
}

use std::time::Duration;

use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
    pub favorable: Color32,
    pub unfavorable: Color32,
    pub neutral_value: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
    pub base_bar: Color32,
    pub suggested_bar: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// How often to wake up and drain the engine while cycles are in flight
    pub poll_interval: Duration,
    pub card_min_width: f32,
    pub price_field_width: f32,
    pub revenue_chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        card_fill: Color32::from_rgb(42, 42, 50),
        favorable: Color32::from_rgb(100, 200, 100),
        unfavorable: Color32::from_rgb(230, 90, 90),
        neutral_value: Color32::from_rgb(200, 200, 210),
        error_fill: Color32::from_rgb(70, 25, 25),
        error_text: Color32::from_rgb(255, 100, 100),
        base_bar: Color32::from_rgb(90, 140, 230),
        suggested_bar: Color32::from_rgb(100, 200, 100),
    },
    poll_interval: Duration::from_millis(50),
    card_min_width: 180.0,
    price_field_width: 120.0,
    revenue_chart_height: 180.0,
};

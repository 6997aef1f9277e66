use eframe::egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};

use crate::models::GainSentiment;
use crate::ui::config::UI_CONFIG;

/// How a metric card colours its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Favorable,
    Unfavorable,
}

impl CardTone {
    pub fn color(self) -> Color32 {
        match self {
            CardTone::Neutral => UI_CONFIG.colors.neutral_value,
            CardTone::Favorable => UI_CONFIG.colors.favorable,
            CardTone::Unfavorable => UI_CONFIG.colors.unfavorable,
        }
    }
}

impl From<GainSentiment> for CardTone {
    fn from(sentiment: GainSentiment) -> Self {
        match sentiment {
            GainSentiment::Favorable => CardTone::Favorable,
            GainSentiment::Unfavorable => CardTone::Unfavorable,
        }
    }
}

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Coverage:").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    /// The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders an error banner (Red on dark red).
    fn error_banner(&mut self, text: impl Into<String>);

    /// A boxed title/value card for the headline metrics row.
    fn metric_card(&mut self, title: &str, value: &str, tone: CardTone);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).monospace());
    }

    fn error_banner(&mut self, text: impl Into<String>) {
        Frame::new()
            .fill(UI_CONFIG.colors.error_fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::same(10))
            .show(self, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(format!("⚠ {}", text.into())).color(UI_CONFIG.colors.error_text),
                );
            });
    }

    fn metric_card(&mut self, title: &str, value: &str, tone: CardTone) {
        Frame::new()
            .fill(UI_CONFIG.colors.card_fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::same(12))
            .show(self, |ui| {
                ui.set_min_width(UI_CONFIG.card_min_width);
                ui.vertical(|ui| {
                    ui.label_subdued(title);
                    ui.label(RichText::new(value).size(22.0).strong().color(tone.color()));
                });
            });
    }
}

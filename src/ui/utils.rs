use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::config::PRICING;
use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase();
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Plain money amount, fixed decimals: 525 -> "525.00"
pub fn format_amount(amount: f64) -> String {
    format!("{:.*}", PRICING.money_decimals, amount)
}

/// Money with the currency label: "KSh 135.00", "-KSh 40.50"
pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-{} {}", PRICING.currency_label, format_amount(-amount))
    } else {
        format!("{} {}", PRICING.currency_label, format_amount(amount))
    }
}

/// Revenue row label naming the price it was computed at: "At Base Price (KSh 120.00)"
pub fn priced_label(label: &str, price: f64) -> String {
    format!("{} ({})", label, format_money(price))
}

/// Slope and R² readout
pub fn format_ratio(value: f64) -> String {
    format!("{:.*}", PRICING.ratio_decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_two_decimals_and_currency() {
        assert_eq!(format_amount(525.0), "525.00");
        assert_eq!(format_money(135.0), "KSh 135.00");
        assert_eq!(format_money(-40.5), "-KSh 40.50");
    }

    #[test]
    fn gain_reads_as_plain_money() {
        assert_eq!(format_money(525.0), "KSh 525.00");
        assert_eq!(format_money(0.0), "KSh 0.00");
        assert_eq!(format_money(-12.5), "-KSh 12.50");
    }

    #[test]
    fn revenue_rows_name_their_price() {
        assert_eq!(
            priced_label("At Base Price", 120.0),
            "At Base Price (KSh 120.00)"
        );
        assert_eq!(
            priced_label("At Suggested Price", 135.0),
            "At Suggested Price (KSh 135.00)"
        );
    }

    #[test]
    fn ratios_use_three_decimals() {
        assert_eq!(format_ratio(2.5), "2.500");
        assert_eq!(format_ratio(0.81234), "0.812");
    }
}

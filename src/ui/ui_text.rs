/// Every user-visible string, in one place
pub struct UiText {
    pub window_title: &'static str,
    pub header_title: &'static str,
    pub header_subtitle: &'static str,
    pub loading_message: &'static str,

    pub pricing_heading: &'static str,
    pub base_price_label: &'static str,
    pub base_price_hint: &'static str,
    pub refresh_button: &'static str,

    pub card_trend_slope: &'static str,
    pub card_fit_quality: &'static str,
    pub card_suggested_price: &'static str,
    pub card_weekly_gain: &'static str,

    pub trend_heading: &'static str,
    pub trend_placeholder: &'static str,
    pub forecast_heading: &'static str,
    pub forecast_placeholder: &'static str,
    pub plot_unreadable: &'static str,

    pub revenue_heading: &'static str,
    pub at_base_price: &'static str,
    pub at_suggested_price: &'static str,

    pub status_idle: &'static str,
    pub status_never_refreshed: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Sales Intelligence Dashboard",
    header_title: "Sales Intelligence Dashboard",
    header_subtitle: "Trend analysis, forecasting and dynamic pricing",
    loading_message: "Analyzing sales data...",

    pricing_heading: "Pricing Engine",
    base_price_label: "Base Price",
    base_price_hint: "Enter price",
    refresh_button: "Refresh Data",

    card_trend_slope: "Trend Slope",
    card_fit_quality: "Fit Quality (R²)",
    card_suggested_price: "Suggested Price",
    card_weekly_gain: "Potential Weekly Gain",

    trend_heading: "Sales Trend & Forecast",
    trend_placeholder: "Generating trend chart...",
    forecast_heading: "Next 7 Days Forecast",
    forecast_placeholder: "Generating forecast...",
    plot_unreadable: "Chart could not be displayed",

    revenue_heading: "Weekly Revenue Comparison",
    at_base_price: "At Base Price",
    at_suggested_price: "At Suggested Price",

    status_idle: "Idle",
    status_never_refreshed: "never",
};

//! Pricing input and money display configuration

pub struct PricingConfig {
    /// Base price shown on first launch (before anything is persisted)
    pub default_base_price: f64,
    pub currency_label: &'static str,
    pub money_decimals: usize,
    pub ratio_decimals: usize,
}

pub const PRICING: PricingConfig = PricingConfig {
    default_base_price: 100.0,
    currency_label: "KSh",
    money_decimals: 2,
    ratio_decimals: 3,
};

/// A recommended price for a given base price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSuggestion {
    pub base_price_used: f64,
    pub suggested_price: f64,
}

/// Weekly revenue at the base price and at the suggested price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueComparison {
    pub base_price: f64,
    pub suggested_price: f64,
    pub revenue_at_base: f64,
    pub revenue_at_suggested: f64,
}

impl RevenueComparison {
    pub fn potential_gain(&self) -> f64 {
        self.revenue_at_suggested - self.revenue_at_base
    }
}

/// Price equality with a relative tolerance.
/// Prices travel through JSON and back, so exact bit equality is too strict.
pub fn same_price(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= f64::EPSILON * scale * 4.0
}

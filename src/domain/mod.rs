// Domain types and value objects
pub mod analysis;
pub mod price_input;
pub mod pricing;

// Re-export commonly used types
pub use analysis::{AnalysisResult, PlotImage, PlotKind, TrendMetrics};
pub use price_input::PriceInput;
pub use pricing::{PriceSuggestion, RevenueComparison, same_price};

use crate::domain::{AnalysisResult, PriceSuggestion, RevenueComparison, same_price};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainSentiment {
    Favorable,
    Unfavorable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialGain {
    pub amount: f64,
    pub sentiment: GainSentiment,
}

impl PotentialGain {
    pub fn from_revenue(revenue: &RevenueComparison) -> Self {
        let amount = revenue.potential_gain();
        let sentiment = if amount >= 0.0 {
            GainSentiment::Favorable
        } else {
            GainSentiment::Unfavorable
        };
        Self { amount, sentiment }
    }
}

/// The four headline figures plus the revenue breakdown they come from.
///
/// Never cached: rebuilt from state every frame. The pricing figures are only
/// populated when suggestion and revenue both answer the displayed base price.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardMetrics {
    pub trend_slope: Option<f64>,
    pub fit_quality: Option<f64>,
    pub suggested_price: Option<f64>,
    pub potential_gain: Option<PotentialGain>,
    pub revenue: Option<RevenueComparison>,
}

impl DashboardMetrics {
    pub fn compose(
        analysis: Option<&AnalysisResult>,
        suggestion: Option<&PriceSuggestion>,
        revenue: Option<&RevenueComparison>,
        displayed_base_price: Option<f64>,
    ) -> Self {
        let mut metrics = DashboardMetrics {
            trend_slope: analysis.map(AnalysisResult::slope),
            fit_quality: analysis.map(AnalysisResult::r2),
            ..Default::default()
        };

        let (Some(suggestion), Some(revenue), Some(displayed)) =
            (suggestion, revenue, displayed_base_price)
        else {
            return metrics;
        };

        let in_sync = same_price(suggestion.base_price_used, displayed)
            && same_price(revenue.base_price, displayed);
        if in_sync {
            metrics.suggested_price = Some(suggestion.suggested_price);
            metrics.potential_gain = Some(PotentialGain::from_revenue(revenue));
            metrics.revenue = Some(*revenue);
        }

        metrics
    }

    /// Whether the metric cards row has anything to show about pricing
    pub fn has_pricing(&self) -> bool {
        self.suggested_price.is_some() && self.potential_gain.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlotImage, PlotKind, TrendMetrics};

    fn analysis() -> AnalysisResult {
        let mut result = AnalysisResult::from_metrics(TrendMetrics {
            slope: 2.5,
            r2: 0.81,
        });
        result.merge_plot(PlotKind::Trend, PlotImage::from_base64("QjE="));
        result.merge_plot(PlotKind::Forecast, PlotImage::from_base64("QjI="));
        result
    }

    fn suggestion(base: f64, suggested: f64) -> PriceSuggestion {
        PriceSuggestion {
            base_price_used: base,
            suggested_price: suggested,
        }
    }

    fn revenue(base: f64, suggested: f64, at_base: f64, at_suggested: f64) -> RevenueComparison {
        RevenueComparison {
            base_price: base,
            suggested_price: suggested,
            revenue_at_base: at_base,
            revenue_at_suggested: at_suggested,
        }
    }

    #[test]
    fn weekly_gain_example() {
        let analysis = analysis();
        let s = suggestion(120.0, 135.0);
        let r = revenue(120.0, 135.0, 4200.0, 4725.0);

        let metrics = DashboardMetrics::compose(Some(&analysis), Some(&s), Some(&r), Some(120.0));

        assert_eq!(metrics.trend_slope, Some(2.5));
        assert_eq!(metrics.fit_quality, Some(0.81));
        assert_eq!(metrics.suggested_price, Some(135.0));
        assert_eq!(
            metrics.potential_gain,
            Some(PotentialGain {
                amount: 525.0,
                sentiment: GainSentiment::Favorable
            })
        );
    }

    #[test]
    fn composing_twice_is_identical() {
        let analysis = analysis();
        let s = suggestion(120.0, 110.0);
        let r = revenue(120.0, 110.0, 4200.0, 4000.0);

        let first = DashboardMetrics::compose(Some(&analysis), Some(&s), Some(&r), Some(120.0));
        let second = DashboardMetrics::compose(Some(&analysis), Some(&s), Some(&r), Some(120.0));
        assert_eq!(first, second);
    }

    #[test]
    fn zero_gain_is_favorable_and_loss_is_not() {
        let flat = PotentialGain::from_revenue(&revenue(100.0, 100.0, 3500.0, 3500.0));
        let loss = PotentialGain::from_revenue(&revenue(100.0, 90.0, 3500.0, 3150.0));

        assert_eq!(flat.sentiment, GainSentiment::Favorable);
        assert_eq!(loss.sentiment, GainSentiment::Unfavorable);
        assert_eq!(loss.amount, -350.0);
    }

    #[test]
    fn mismatched_base_price_hides_pricing_metrics() {
        let analysis = analysis();
        let s = suggestion(100.0, 112.5);
        let r = revenue(100.0, 112.5, 3500.0, 3937.5);

        let metrics = DashboardMetrics::compose(Some(&analysis), Some(&s), Some(&r), Some(150.0));

        assert_eq!(metrics.trend_slope, Some(2.5));
        assert!(!metrics.has_pricing());
        assert!(metrics.revenue.is_none());
    }

    #[test]
    fn suggestion_and_revenue_from_different_prices_are_never_paired() {
        let s = suggestion(150.0, 168.75);
        let r = revenue(100.0, 112.5, 3500.0, 3937.5);

        let metrics = DashboardMetrics::compose(None, Some(&s), Some(&r), Some(150.0));
        assert!(!metrics.has_pricing());
    }

    #[test]
    fn nothing_known_yet() {
        let metrics = DashboardMetrics::compose(None, None, None, Some(100.0));
        assert_eq!(metrics, DashboardMetrics::default());
    }
}

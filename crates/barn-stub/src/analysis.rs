//! Stub Analytics
//!
//! Deterministic stand-ins for the real service's models. Good enough to
//! exercise the console end to end; not investment advice.

use barn_core::{AmountMap, RiskResult};

/// Why a price history has no risk metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceRejection {
    TooFewPrices,
    NonPositivePrice,
    /// Sharpe ratio at or below -1, where `1 / (1 + sharpe)` is not a score
    UndefinedRiskScore,
}

impl PriceRejection {
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooFewPrices => "At least two prices are required",
            Self::NonPositivePrice => "Every price must be a positive number",
            Self::UndefinedRiskScore => "Risk score is undefined for a Sharpe ratio at or below -1",
        }
    }
}

/// Risk metrics from simple period returns
///
/// Volatility is the population standard deviation of returns, the Sharpe
/// ratio is mean return over volatility (zero when volatility is zero), and
/// the risk score is `1 / (1 + sharpe)`. Needs at least two prices, all
/// strictly positive, and a Sharpe ratio above -1.
pub fn risk_metrics(prices: &[f64]) -> Result<RiskResult, PriceRejection> {
    if prices.len() < 2 {
        return Err(PriceRejection::TooFewPrices);
    }
    if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
        return Err(PriceRejection::NonPositivePrice);
    }

    let returns: Vec<f64> = prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();
    #[allow(clippy::cast_precision_loss)]
    let n = returns.len() as f64;

    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let volatility = variance.sqrt();
    let sharpe_ratio = if volatility == 0.0 { 0.0 } else { mean / volatility };
    if 1.0 + sharpe_ratio <= 0.0 {
        return Err(PriceRejection::UndefinedRiskScore);
    }

    Ok(RiskResult {
        volatility,
        sharpe_ratio,
        risk_score: 1.0 / (1.0 + sharpe_ratio),
    })
}

/// Redistribute the portfolio total between current weights and equal weights
///
/// `risk_tolerance` 0 keeps the current allocation, 1 spreads the total
/// evenly. Token order is preserved.
pub fn rebalance(portfolio: &AmountMap, risk_tolerance: f64) -> AmountMap {
    let total = portfolio.total();
    if portfolio.is_empty() || total == 0.0 {
        return portfolio.iter().map(|e| (e.name.clone(), 0.0)).collect();
    }

    #[allow(clippy::cast_precision_loss)]
    let equal = 1.0 / portfolio.len() as f64;

    portfolio
        .iter()
        .map(|e| {
            let current = e.amount / total;
            let weight = (1.0 - risk_tolerance).mul_add(current, risk_tolerance * equal);
            (e.name.clone(), weight * total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_metrics_known_series() {
        let result = risk_metrics(&[100.0, 102.0, 98.0, 103.0, 101.0]).unwrap();
        assert!(result.volatility > 0.0);
        assert!((result.risk_score - 1.0 / (1.0 + result.sharpe_ratio)).abs() < 1e-12);
    }

    #[test]
    fn test_flat_series_has_zero_sharpe() {
        let result = risk_metrics(&[10.0, 10.0, 10.0]).unwrap();
        assert_eq!(result.volatility, 0.0);
        assert_eq!(result.sharpe_ratio, 0.0);
        assert_eq!(result.risk_score, 1.0);
    }

    #[test]
    fn test_risk_metrics_rejects_short_or_invalid_series() {
        assert_eq!(risk_metrics(&[]), Err(PriceRejection::TooFewPrices));
        assert_eq!(risk_metrics(&[100.0]), Err(PriceRejection::TooFewPrices));
        assert_eq!(risk_metrics(&[100.0, 0.0, 50.0]), Err(PriceRejection::NonPositivePrice));
        assert_eq!(risk_metrics(&[100.0, f64::NAN]), Err(PriceRejection::NonPositivePrice));
    }

    #[test]
    fn test_sharpe_of_minus_one_has_no_risk_score() {
        // returns 0 and -0.5: mean -0.25, volatility 0.25
        assert_eq!(
            risk_metrics(&[100.0, 100.0, 50.0]),
            Err(PriceRejection::UndefinedRiskScore)
        );
    }

    #[test]
    fn test_risk_score_is_always_finite() {
        for prices in [[100.0, 101.0, 99.0], [100.0, 90.0, 95.0], [50.0, 60.0, 40.0]] {
            if let Ok(result) = risk_metrics(&prices) {
                assert!(result.risk_score.is_finite());
                assert!(result.risk_score > 0.0);
            }
        }
    }

    #[test]
    fn test_rebalance_extremes() {
        let portfolio: AmountMap = [("BTC".to_string(), 1.0), ("ETH".to_string(), 3.0)]
            .into_iter()
            .collect();

        let kept = rebalance(&portfolio, 0.0);
        assert!((kept.get("BTC").unwrap() - 1.0).abs() < 1e-12);

        let even = rebalance(&portfolio, 1.0);
        assert!((even.get("BTC").unwrap() - 2.0).abs() < 1e-12);
        assert!((even.get("ETH").unwrap() - 2.0).abs() < 1e-12);
        assert!((even.total() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rebalance_empty() {
        assert!(rebalance(&AmountMap::new(), 0.5).is_empty());
    }
}

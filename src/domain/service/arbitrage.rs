// Cross-exchange spread evaluation

use crate::domain::errors::{ArbitrageError, ArbitrageResult};
use crate::domain::model::{ArbitrageReport, Exchange};

pub const DEFAULT_THRESHOLD_PERCENT: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArbitrageCalculator;

impl ArbitrageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Spread between two current prices, measured against the smaller one.
    ///
    /// A missing or non-positive price yields an error instead of a report,
    /// so a failed fetch never shows up as a zero spread.
    pub fn evaluate(
        &self,
        price_a: Option<f64>,
        price_b: Option<f64>,
        threshold_percent: f64,
    ) -> ArbitrageResult<ArbitrageReport> {
        let price_a = Self::require("price A", price_a)?;
        let price_b = Self::require("price B", price_b)?;
        Ok(Self::spread(price_a, price_b, threshold_percent))
    }

    /// Same as `evaluate`, but a missing price is reported under its
    /// exchange name
    pub fn evaluate_between(
        &self,
        (exchange_a, price_a): (Exchange, Option<f64>),
        (exchange_b, price_b): (Exchange, Option<f64>),
        threshold_percent: f64,
    ) -> ArbitrageResult<ArbitrageReport> {
        let price_a = Self::require(exchange_a.as_str(), price_a)?;
        let price_b = Self::require(exchange_b.as_str(), price_b)?;
        Ok(Self::spread(price_a, price_b, threshold_percent))
    }

    fn spread(price_a: f64, price_b: f64, threshold_percent: f64) -> ArbitrageReport {

        let absolute_diff = (price_a - price_b).abs();
        let percentage_diff = absolute_diff / price_a.min(price_b) * 100.0;

        ArbitrageReport {
            absolute_diff,
            percentage_diff,
            threshold_exceeded: percentage_diff >= threshold_percent,
        }
    }

    fn require(side: &str, price: Option<f64>) -> ArbitrageResult<f64> {
        match price {
            None => Err(ArbitrageError::MissingPrice(side.to_string())),
            Some(p) if !p.is_finite() || p <= 0.0 => Err(ArbitrageError::InvalidPrice {
                side: side.to_string(),
                price: p,
            }),
            Some(p) => Ok(p),
        }
    }
}

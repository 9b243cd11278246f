// Domain services

pub mod arbitrage;
pub mod sentiment;

pub use arbitrage::{ArbitrageCalculator, DEFAULT_THRESHOLD_PERCENT};
pub use sentiment::{PolarityScorer, SentimentScorer};

// Core domain models

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::errors::FetchError;

mod history;

pub use history::{AlignedRow, HistoryStore};

/// Wall-clock format used for history samples and the chart axis
pub const SAMPLE_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Exchange {
    Binance,
    Coinbase,
}

impl Exchange {
    /// Display order of the price table and tie-break order of the chart
    pub const ALL: [Exchange; 2] = [Exchange::Binance, Exchange::Coinbase];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Binance => "Binance",
            Exchange::Coinbase => "Coinbase",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pair {
    #[default]
    Btc,
    Eth,
}

impl Pair {
    /// Resolve a user selector. Anything outside {BTC, ETH} falls back to BTC.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_uppercase().as_str() {
            "BTC" => Pair::Btc,
            "ETH" => Pair::Eth,
            other => {
                log::warn!("Unrecognized pair selector '{}', falling back to BTC", other);
                Pair::Btc
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pair::Btc => "BTC",
            Pair::Eth => "ETH",
        }
    }

    /// Binance ticker symbol, quoted in USDT
    pub fn binance_symbol(&self) -> &'static str {
        match self {
            Pair::Btc => "BTCUSDT",
            Pair::Eth => "ETHUSDT",
        }
    }

    /// Coinbase spot product, quoted in USD
    pub fn coinbase_product(&self) -> &'static str {
        match self {
            Pair::Btc => "BTC-USD",
            Pair::Eth => "ETH-USD",
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A resolved upstream price endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub exchange: Exchange,
    pub pair: Pair,
    pub url: String,
}

/// A successfully fetched price. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub exchange: Exchange,
    pub pair: Pair,
    pub price: f64,
    pub fetched_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Ok(PriceQuote),
    Failed(FetchError),
}

impl FetchResult {
    pub fn quote(&self) -> Option<&PriceQuote> {
        match self {
            FetchResult::Ok(quote) => Some(quote),
            FetchResult::Failed(_) => None,
        }
    }

    pub fn price(&self) -> Option<f64> {
        self.quote().map(|q| q.price)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, FetchResult::Ok(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySample {
    /// Wall-clock time, "HH:MM:SS"
    pub time: String,
    pub exchange: Exchange,
    pub price: f64,
    pub recorded_at: DateTime<Local>,
}

impl HistorySample {
    pub fn new(exchange: Exchange, price: f64, recorded_at: DateTime<Local>) -> Self {
        Self {
            time: recorded_at.format(SAMPLE_TIME_FORMAT).to_string(),
            exchange,
            price,
            recorded_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbitrageReport {
    pub absolute_diff: f64,
    pub percentage_diff: f64,
    pub threshold_exceeded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn banner(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Overall Positive Sentiment",
            SentimentLabel::Negative => "Overall Negative Sentiment",
            SentimentLabel::Neutral => "Neutral Sentiment",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub compound_score: f64,
    pub label: SentimentLabel,
}

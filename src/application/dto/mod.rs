// Upstream price payloads

pub mod parser;

use serde::Deserialize;

/// A price field as sent upstream: normally a decimal string, occasionally a
/// bare JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Text(String),
    Number(f64),
}

/// Known response shapes, selected by their top-level key
#[derive(Debug, Clone)]
pub enum PriceResponse {
    /// Binance `/api/v3/ticker/price`: `{"symbol": "BTCUSDT", "price": "..."}`
    Ticker { price: NumericField },
    /// Coinbase `/v2/prices/{product}/spot`: `{"data": {"amount": "...", ...}}`
    Spot { data: SpotAmount },
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotAmount {
    pub amount: NumericField,
}

pub use parser::parse_price_response;

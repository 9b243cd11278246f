// Endpoint resolution per pair

use crate::domain::model::{Endpoint, Exchange, Pair};

pub const DEFAULT_BINANCE_URL: &str = "https://api.binance.com";
pub const DEFAULT_COINBASE_URL: &str = "https://api.coinbase.com";

/// Builds the upstream price URLs for a pair
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    binance_base: String,
    coinbase_base: String,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BINANCE_URL, DEFAULT_COINBASE_URL)
    }
}

impl EndpointResolver {
    pub fn new(binance_base: &str, coinbase_base: &str) -> Self {
        Self {
            binance_base: binance_base.trim_end_matches('/').to_string(),
            coinbase_base: coinbase_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, exchange: Exchange, pair: Pair) -> Endpoint {
        let url = match exchange {
            Exchange::Binance => format!(
                "{}/api/v3/ticker/price?symbol={}",
                self.binance_base,
                pair.binance_symbol()
            ),
            Exchange::Coinbase => format!(
                "{}/v2/prices/{}/spot",
                self.coinbase_base,
                pair.coinbase_product()
            ),
        };

        Endpoint { exchange, pair, url }
    }

    /// Both endpoints for a pair, Binance first
    pub fn resolve(&self, pair: Pair) -> [Endpoint; 2] {
        Exchange::ALL.map(|exchange| self.endpoint(exchange, pair))
    }
}

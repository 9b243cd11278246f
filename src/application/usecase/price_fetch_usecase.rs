// Price fetching with a per-endpoint TTL cache

use std::collections::HashMap;

use chrono::Local;
use tokio::time::{Duration, Instant};

use crate::application::dto::parse_price_response;
use crate::domain::errors::FetchError;
use crate::domain::model::{Endpoint, FetchResult, PriceQuote};
use crate::domain::repository::QuoteTransport;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct CachedResult {
    result: FetchResult,
    expires_at: Instant,
}

/// Fetches normalized prices, hitting the network at most once per endpoint
/// per TTL window. Failures are cached like quotes, so a broken feed is not
/// retried before its window runs out.
pub struct PriceFetcher<T: QuoteTransport> {
    transport: T,
    ttl: Duration,
    cache: HashMap<String, CachedResult>,
}

impl<T: QuoteTransport> PriceFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_ttl(transport, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(transport: T, ttl: Duration) -> Self {
        Self {
            transport,
            ttl,
            cache: HashMap::new(),
        }
    }

    pub async fn fetch(&mut self, endpoint: &Endpoint) -> FetchResult {
        let now = Instant::now();

        if let Some(cached) = self.cache.get(&endpoint.url) {
            if now < cached.expires_at {
                log::debug!("Cache hit for {} ({})", endpoint.exchange, endpoint.url);
                return cached.result.clone();
            }
        }

        let result = match self.fetch_uncached(endpoint).await {
            Ok(price) => FetchResult::Ok(PriceQuote {
                exchange: endpoint.exchange,
                pair: endpoint.pair,
                price,
                fetched_at: Local::now(),
            }),
            Err(e) => {
                log::warn!("Failed to fetch {} price: {}", endpoint.exchange, e);
                FetchResult::Failed(e)
            }
        };

        self.cache.insert(
            endpoint.url.clone(),
            CachedResult {
                result: result.clone(),
                expires_at: now + self.ttl,
            },
        );
        result
    }

    async fn fetch_uncached(&self, endpoint: &Endpoint) -> Result<f64, FetchError> {
        let response = self.transport.get(&endpoint.url).await?;

        if !response.is_success() {
            return Err(FetchError::Network(format!(
                "HTTP status {} from {}",
                response.status, endpoint.url
            )));
        }

        parse_price_response(&response.body)
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

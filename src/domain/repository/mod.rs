// Repository interfaces for upstream data

use async_trait::async_trait;

use crate::domain::errors::FetchError;

/// Raw HTTP reply handed back by a transport. Interpretation is left to the
/// price fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound GET for price endpoints
#[async_trait]
pub trait QuoteTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

// src/infrastructure/exchange/mod.rs
// HTTPS transport for the public price endpoints

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::{header, Body, Client, Request};
use hyper_tls::HttpsConnector;
use tokio::time::Duration;
use tower::timeout::{error::Elapsed, Timeout};
use tower::{ServiceBuilder, ServiceExt};

use crate::domain::errors::FetchError;
use crate::domain::repository::{QuoteTransport, RawResponse};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

type HttpsClient = Client<HttpsConnector<HttpConnector>>;

/// Unauthenticated GET client with a per-request timeout
#[derive(Clone)]
pub struct HyperQuoteTransport {
    client: Timeout<HttpsClient>,
}

impl Default for HyperQuoteTransport {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_TIMEOUT)
    }
}

impl HyperQuoteTransport {
    pub fn new(timeout: Duration) -> Self {
        let https = HttpsConnector::new();
        let client = Client::builder().build::<_, Body>(https);

        Self {
            client: ServiceBuilder::new().timeout(timeout).service(client),
        }
    }
}

#[async_trait]
impl QuoteTransport for HyperQuoteTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let request = Request::get(url)
            .header(header::ACCEPT, "application/json")
            .header(
                header::USER_AGENT,
                concat!("arb_dashboard/", env!("CARGO_PKG_VERSION")),
            )
            .body(Body::empty())
            .map_err(|e| FetchError::Network(format!("Invalid request for {}: {}", url, e)))?;

        log::debug!("GET {}", url);

        let response = self.client.clone().oneshot(request).await.map_err(|e| {
            if e.is::<Elapsed>() {
                FetchError::Network(format!("Request to {} timed out", url))
            } else {
                FetchError::Network(format!("Request to {} failed: {}", url, e))
            }
        })?;

        let status = response.status().as_u16();
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))?;

        Ok(RawResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

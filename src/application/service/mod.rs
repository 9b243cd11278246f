// Application services

pub mod endpoints;

pub use endpoints::{EndpointResolver, DEFAULT_BINANCE_URL, DEFAULT_COINBASE_URL};

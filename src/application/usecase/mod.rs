pub mod dashboard_usecase;
pub mod price_fetch_usecase;

// Re-export public API
pub use dashboard_usecase::{CycleOutcome, DashboardController, SessionState, DEFAULT_HEADLINE};
pub use price_fetch_usecase::{PriceFetcher, DEFAULT_CACHE_TTL};

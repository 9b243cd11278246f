pub mod errors;
pub mod model;
pub mod repository;
pub mod service;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, ArbitrageError, CommandError, FetchError};
pub use model::{
    AlignedRow, ArbitrageReport, Endpoint, Exchange, FetchResult, HistorySample, HistoryStore, Pair, PriceQuote,
    SentimentLabel, SentimentResult,
};

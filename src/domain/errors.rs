// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a single price fetch did not produce a quote.
///
/// Never fatal: the controller shows the reason next to the exchange and
/// tries again on the next refresh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponseShape(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArbitrageError {
    #[error("Missing price for {0}")]
    MissingPrice(String),

    #[error("Invalid price {price} for {side}")]
    InvalidPrice { side: String, price: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Invalid toggle '{0}', expected on or off")]
    InvalidToggle(String),
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type FetchOutcome<T> = Result<T, FetchError>;
pub type ArbitrageResult<T> = Result<T, ArbitrageError>;

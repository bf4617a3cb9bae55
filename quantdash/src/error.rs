use quantdash_data::{DataError, sentiment::SentimentError};
use quantdash_strategy::BacktestError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All errors generated in `quantdash`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Error)]
pub enum QuantDashError {
    #[error("market data: {0}")]
    Data(#[from] DataError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("sentiment: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("backtest: {0}")]
    Backtest(#[from] BacktestError),

    #[error("no symbol and timeframe selected")]
    NoSelection,
}

/// Failure to load an [`AnalyticsConfig`](crate::config::AnalyticsConfig).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to deserialise config: {0}")]
    Json(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

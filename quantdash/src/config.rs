use crate::error::ConfigError;
use quantdash_risk::DEFAULT_CORRELATION_WINDOW;
use quantdash_strategy::BacktestConfig;
use quantdash_ta::IndicatorConfig;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Top-level configuration of the [`Dashboard`](crate::dashboard::Dashboard) pipeline.
///
/// Every field is optional when deserialising, missing fields take their default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// RSI, MACD and Bollinger Band periods.
    pub indicators: IndicatorConfig,

    /// Trailing window of the pairwise correlation matrix.
    pub correlation_window: usize,

    /// Lag (in points) of the big-cap to low-cap lead-lag projection.
    pub lead_lag: usize,

    /// Moving average windows of the crossover backtest.
    pub backtest: BacktestConfig,

    /// Seed of the forecast residual noise.
    pub forecast_seed: u64,

    /// Seed mixed into every generated price series.
    pub series_seed: u64,

    /// Maximum number of generated series kept in the LRU cache.
    pub cache_capacity: usize,

    /// Simulated latency of the mock sentiment source.
    pub sentiment_latency_ms: u64,

    /// Whether sentiment feeds into the forecast.
    pub sentiment_enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorConfig::default(),
            correlation_window: DEFAULT_CORRELATION_WINDOW,
            lead_lag: 1,
            backtest: BacktestConfig::default(),
            forecast_seed: 0,
            series_seed: 0,
            cache_capacity: 32,
            sentiment_latency_ms: 300,
            sentiment_enabled: true,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(ConfigError::from)
    }

    pub fn from_path<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn sentiment_latency(&self) -> Duration {
        Duration::from_millis(self.sentiment_latency_ms)
    }
}

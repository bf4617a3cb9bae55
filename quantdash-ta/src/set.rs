use crate::{
    bollinger::{BollingerBands, BollingerConfig, bollinger_bands},
    macd::{Macd, MacdConfig, macd},
    rsi::{RSI_NEUTRAL, RsiConfig, rsi},
};
use serde::{Deserialize, Serialize};

/// Parameters for every indicator in an [`IndicatorSet`].
#[derive(Debug, Copy, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub rsi: RsiConfig,
    pub macd: MacdConfig,
    pub bollinger: BollingerConfig,
}

/// RSI, MACD and Bollinger Bands computed over the same price series.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct IndicatorSet {
    pub rsi: Vec<f64>,
    pub macd: Macd,
    pub bollinger: BollingerBands,
}

impl IndicatorSet {
    /// Latest RSI value, neutral for an empty series.
    pub fn latest_rsi(&self) -> f64 {
        self.rsi.last().copied().unwrap_or(RSI_NEUTRAL)
    }

    /// Number of aligned positions.
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }
}

/// Compute the full [`IndicatorSet`] for `prices`.
pub fn compute_indicators(prices: &[f64], config: &IndicatorConfig) -> IndicatorSet {
    IndicatorSet {
        rsi: rsi(prices, config.rsi.period),
        macd: macd(prices, config.macd),
        bollinger: bollinger_bands(prices, config.bollinger),
    }
}

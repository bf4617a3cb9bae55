#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]

//! Technical analysis indicators for QuantDash.
//!
//! Every indicator here is a pure function over a price slice that returns
//! arrays aligned index-for-index with the input. Positions that lack enough
//! history hold a neutral sentinel (RSI `50.0`, MACD `0.0`) rather than `NaN`,
//! so the output is always safe to plot.

/// Streaming moving averages and the batch EMA helper.
pub mod indicators;

/// Relative Strength Index.
pub mod rsi;

/// Moving Average Convergence Divergence.
pub mod macd;

/// Bollinger Bands.
pub mod bollinger;

/// Crossover detection between two series.
pub mod patterns;

/// [`IndicatorSet`](set::IndicatorSet) bundling RSI, MACD and Bollinger Bands.
pub mod set;

pub use bollinger::{BollingerBands, BollingerConfig, bollinger_bands};
pub use indicators::{ExponentialMovingAverage, SimpleMovingAverage, ema};
pub use macd::{Macd, MacdConfig, macd};
pub use rsi::{RSI_NEUTRAL, RsiConfig, rsi};
pub use set::{IndicatorConfig, IndicatorSet, compute_indicators};

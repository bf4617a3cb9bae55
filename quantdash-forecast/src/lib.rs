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

//! # QuantDash-Forecast
//! Heuristic multi-component price forecaster.
//!
//! The trailing training window of a price series is decomposed into trend, seasonality
//! and residuals. Each component is forecast separately (Holt linear trend, repeated
//! seasonal phase, damped autoregressive residuals with injected noise), the components
//! are summed, and the result is walked forward from the last real price with every step
//! bounded by a volatility derived maximum change that widens or narrows with the
//! current market signals.
//!
//! Randomness is always injected, so a seeded [`rand::rngs::StdRng`] gives reproducible
//! forecasts.

/// Trend / seasonality / residual decomposition.
pub mod decomposition;

/// Holt linear trend forecasting.
pub mod trend;

/// Seasonal phase forecasting.
pub mod seasonal;

/// Damped autoregressive residual forecasting.
pub mod residual;

/// Market signal driven confidence bounding.
pub mod bands;

/// [`forecast`] pipeline and its [`ForecastInput`].
pub mod forecast;

/// [`ForecastMemo`] of the most recent forecast.
pub mod memo;

pub use bands::{MarketSignals, apply_confidence_bands};
pub use decomposition::{Decomposition, SEASONAL_PERIOD, decompose};
pub use forecast::{ForecastInput, MacdSnapshot, forecast, horizon};
pub use memo::ForecastMemo;

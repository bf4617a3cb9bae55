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

//! Cross-asset and return statistics for QuantDash.
//!
//! Rolling Pearson correlation (plus the pairwise matrix and lead-lag
//! projection built on it), running-peak drawdown tracking, and return
//! volatility used to bound forecasts.

pub mod algorithm;
pub mod correlation;
pub mod drawdown;
pub mod lead_lag;
pub mod volatility;

pub use correlation::{
    CorrelationEntry, CorrelationStrength, DEFAULT_CORRELATION_WINDOW, correlation_matrix, pearson,
    rolling_correlation,
};
pub use drawdown::DrawdownTracker;
pub use lead_lag::{LeadEffect, LeadLagProjection, lead_lag};
pub use volatility::{return_volatility, simple_returns};

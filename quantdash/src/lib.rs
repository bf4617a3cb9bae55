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

//! # QuantDash
//! Analytics core of a cryptocurrency dashboard.
//!
//! For a selected `(symbol, Timeframe)` QuantDash:
//! * **Data**: generates a deterministic synthetic price/volume series, cached in a bounded
//!   LRU and recorded in a per-symbol coin book ([`QuantDash-Data`](data)).
//! * **Indicators**: computes RSI, MACD and Bollinger Bands ([`QuantDash-TA`](ta)).
//! * **Risk**: measures rolling pairwise correlation across every recorded coin, and
//!   projects low-cap moves from big-cap moves ([`QuantDash-Risk`](risk)).
//! * **Strategy**: backtests a long-only moving average crossover
//!   ([`QuantDash-Strategy`](strategy)).
//! * **Sentiment**: fetches social sentiment asynchronously, discarding stale responses
//!   ([`SentimentFeed`](sentiment::SentimentFeed)).
//! * **Forecast**: decomposes the series and produces a bounded, signal-adjusted, memoized
//!   forecast ([`QuantDash-Forecast`](forecast)).
//!
//! The [`Dashboard`] ties the pipeline together.
//!
//! ## Getting Started
//! ```
//! use quantdash::{AnalyticsConfig, Dashboard, data::Timeframe};
//!
//! let mut dashboard = Dashboard::mock(AnalyticsConfig::default())?;
//! dashboard.select("BTCUSDT", Timeframe::Hour4);
//! dashboard.select("ETHUSDT", Timeframe::Hour4);
//!
//! let snapshot = dashboard.snapshot()?;
//! assert_eq!(snapshot.forecast.len(), Timeframe::Hour4.horizon());
//! assert_eq!(snapshot.correlations.len(), 1);
//! # Ok::<(), quantdash::error::QuantDashError>(())
//! ```

pub use quantdash_data as data;
pub use quantdash_forecast as forecast;
pub use quantdash_risk as risk;
pub use quantdash_strategy as strategy;
pub use quantdash_ta as ta;

/// [`AnalyticsConfig`] of the [`Dashboard`] pipeline.
pub mod config;

/// The [`Dashboard`] pipeline and its [`DashboardSnapshot`] output.
pub mod dashboard;

/// All errors generated in `quantdash`.
pub mod error;

/// Provides default QuantDash Tracing logging initialisers.
pub mod logging;

/// Stale-response guard around a [`SentimentSource`](data::sentiment::SentimentSource).
pub mod sentiment;

pub use config::AnalyticsConfig;
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error::QuantDashError;
pub use quantdash_data::SeriesGenerator;
pub use quantdash_forecast::forecast as forecast_prices;
pub use quantdash_risk::rolling_correlation;
pub use quantdash_strategy::run_backtest;
pub use quantdash_ta::compute_indicators;

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

//! # QuantDash-Data
//! Market data inputs for the QuantDash analytics pipeline.
//!
//! * [`SeriesGenerator`] produces deterministic synthetic price/volume series for a
//!   `(symbol, Timeframe)` key.
//! * [`SeriesCache`] is a bounded LRU of generated series, and [`CoinBook`] keeps the
//!   latest series per symbol for cross-asset analysis.
//! * [`SentimentSource`](sentiment::SentimentSource) is the async seam for social
//!   sentiment, with a seeded [`MockSentimentSource`](sentiment::MockSentimentSource).

/// All errors generated in `quantdash-data`.
pub mod error;

/// Known coins, their reference prices and big/low cap groupings.
pub mod coin;

/// [`Timeframe`] variants and their generation / forecast parameters.
pub mod timeframe;

/// Synthetic [`PricePoint`] series generation.
pub mod series;

/// Bounded LRU [`SeriesCache`] and the per-symbol [`CoinBook`].
pub mod cache;

/// Async sentiment readings.
pub mod sentiment;

pub use cache::{CoinBook, SeriesCache};
pub use error::DataError;
pub use series::{GeneratedSeries, PricePoint, SeriesGenerator, SeriesKey};
pub use timeframe::Timeframe;

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

//! Strategy evaluation for QuantDash.
//!
//! A long-only moving average crossover strategy is simulated over a price series,
//! producing total return, win rate and maximum drawdown of the closed trades.

pub mod backtest;

/// Trade bookkeeping and per-trade statistics.
pub mod trade;

pub use backtest::{
    BacktestConfig, BacktestError, BacktestReport, BacktestResult, run_backtest,
    run_backtest_with, try_run_backtest,
};
pub use trade::Trade;

use crate::trade::{Trade, win_rate};
use quantdash_risk::DrawdownTracker;
use quantdash_ta::{
    SimpleMovingAverage,
    patterns::{Cross, crossover},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Moving average windows of the crossover strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct BacktestConfig {
    pub short_period: usize,
    pub long_period: usize,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            short_period: 10,
            long_period: 20,
        }
    }
}

/// Summary of a backtest, every field rounded to two decimal places.
#[derive(Debug, Copy, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct BacktestResult {
    /// Sum of trade returns (%).
    pub returns: f64,
    /// Share of trades with a positive return (%).
    pub win_rate: f64,
    /// Deepest decline of the cumulative return curve from its running peak (%, <= 0).
    pub max_drawdown: f64,
}

/// Full output of [`try_run_backtest`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct BacktestReport {
    pub result: BacktestResult,
    pub trades: Vec<Trade>,
    /// Cumulative return after each closed trade, starting at 0.
    pub cumulative_returns: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Error)]
pub enum BacktestError {
    #[error("invalid moving average windows: short {short}, long {long}")]
    InvalidWindows { short: usize, long: usize },

    #[error("non-finite price {price} at index {index}")]
    NonFinitePrice { index: usize, price: f64 },

    #[error("zero entry price at index {0}")]
    ZeroEntryPrice(usize),
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Position {
    Flat,
    Long {
        entry_index: usize,
        entry_price: f64,
        entry_cross: Option<Cross>,
    },
}

/// Run the default 10/20 crossover backtest.
///
/// Failures are logged and mapped to an all-zero [`BacktestResult`].
pub fn run_backtest(prices: &[f64]) -> BacktestResult {
    run_backtest_with(prices, BacktestConfig::default())
}

/// Run the crossover backtest with the provided windows.
///
/// Failures are logged and mapped to an all-zero [`BacktestResult`].
pub fn run_backtest_with(prices: &[f64], config: BacktestConfig) -> BacktestResult {
    match try_run_backtest(prices, config) {
        Ok(report) => report.result,
        Err(error) => {
            warn!(%error, len = prices.len(), "backtest failed, using zeroed result");
            BacktestResult::default()
        }
    }
}

/// Simulate a long-only moving average crossover strategy.
///
/// For each index `i` from `long_period`, the short and long averages are taken over the
/// `short_period` and `long_period` prices preceding `i`. A flat position enters at
/// `prices[i]` when the short average is above the long average, and a long position
/// exits at `prices[i]` when it is not. Any open position is closed at the last price.
pub fn try_run_backtest(
    prices: &[f64],
    config: BacktestConfig,
) -> Result<BacktestReport, BacktestError> {
    let BacktestConfig {
        short_period,
        long_period,
    } = config;

    if short_period == 0 || short_period > long_period {
        return Err(BacktestError::InvalidWindows {
            short: short_period,
            long: long_period,
        });
    }

    if let Some((index, &price)) = prices
        .iter()
        .enumerate()
        .find(|(_, price)| !price.is_finite())
    {
        return Err(BacktestError::NonFinitePrice { index, price });
    }

    if prices.len() <= long_period {
        return Ok(BacktestReport::default());
    }

    let mut short = SimpleMovingAverage::new(short_period);
    let mut long = SimpleMovingAverage::new(long_period);
    let mut prev_averages = None;
    let mut position = Position::Flat;
    let mut trades = Vec::new();

    for (index, &price) in prices.iter().enumerate() {
        if index >= long_period {
            let (fast, slow) = (short.average(), long.average());
            let signal = fast > slow;
            let cross = prev_averages
                .and_then(|(prev_fast, prev_slow)| crossover(prev_fast, prev_slow, fast, slow));
            prev_averages = Some((fast, slow));

            position = match position {
                Position::Flat if signal => {
                    if price == 0.0 {
                        return Err(BacktestError::ZeroEntryPrice(index));
                    }
                    Position::Long {
                        entry_index: index,
                        entry_price: price,
                        entry_cross: cross,
                    }
                }
                Position::Long {
                    entry_index,
                    entry_price,
                    entry_cross,
                } if !signal => {
                    trades.push(Trade::new(entry_index, index, entry_price, price, entry_cross));
                    Position::Flat
                }
                unchanged => unchanged,
            };
        }

        short.update(price);
        long.update(price);
    }

    if let Position::Long {
        entry_index,
        entry_price,
        entry_cross,
    } = position
    {
        let exit_index = prices.len() - 1;
        trades.push(Trade::new(
            entry_index,
            exit_index,
            entry_price,
            prices[exit_index],
            entry_cross,
        ));
    }

    let cumulative_returns = std::iter::once(0.0)
        .chain(trades.iter().scan(0.0, |total, trade| {
            *total += trade.return_pct();
            Some(*total)
        }))
        .collect::<Vec<_>>();

    let drawdown = cumulative_returns
        .iter()
        .skip(1)
        .fold(DrawdownTracker::init(0.0), |mut tracker, &value| {
            tracker.update(value);
            tracker
        });

    let result = BacktestResult {
        returns: round_2dp(cumulative_returns.last().copied().unwrap_or(0.0)),
        win_rate: round_2dp(win_rate(&trades).unwrap_or(0.0)),
        max_drawdown: round_2dp(drawdown.max_drawdown),
    };

    debug!(trades = trades.len(), ?result, "backtest complete");

    Ok(BacktestReport {
        result,
        trades,
        cumulative_returns,
    })
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

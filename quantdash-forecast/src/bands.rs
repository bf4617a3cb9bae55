use quantdash_risk::return_volatility;
use serde::{Deserialize, Serialize};

/// Floor of the per-step maximum change (5%).
pub const MIN_MAX_CHANGE: f64 = 0.05;

/// Per-step bias applied for each step ahead, scaled by the trend bias.
const BIAS_STEP: f64 = 0.005;

/// Latest market signals that widen or narrow and bias the forecast.
///
/// The [`Default`] values are neutral: they neither widen the bounds nor bias the walk.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarketSignals {
    pub rsi: f64,
    pub macd_line: f64,
    pub signal_line: f64,
    /// Sentiment score in `[-1, 1]`.
    pub sentiment: f64,
    /// Backtest total return (%).
    pub backtest_returns: f64,
}

impl Default for MarketSignals {
    fn default() -> Self {
        Self {
            rsi: 50.0,
            macd_line: 0.0,
            signal_line: 0.0,
            sentiment: 0.0,
            backtest_returns: 0.0,
        }
    }
}

impl MarketSignals {
    /// Multiplier applied to the volatility bound.
    ///
    /// Overbought / oversold RSI and strong MACD divergence widen the bound, as does
    /// extreme sentiment. A working strategy (backtest > 10%) narrows it and a losing
    /// one (< 0%) widens it.
    pub fn confidence_adjustment(&self) -> f64 {
        let mut adjustment = 1.0;

        if self.rsi > 70.0 || self.rsi < 30.0 {
            adjustment *= 1.2;
        }

        let divergence = (self.macd_line - self.signal_line).abs();
        if divergence > 0.01 {
            adjustment *= 1.0 + divergence * 5.0;
        }

        adjustment *= 1.0 + self.sentiment.abs() * 0.5;

        if self.backtest_returns > 10.0 {
            adjustment *= 0.9;
        } else if self.backtest_returns < 0.0 {
            adjustment *= 1.1;
        }

        adjustment
    }

    /// Directional bias accumulated over the forecast steps.
    pub fn trend_bias(&self) -> f64 {
        (self.rsi - 50.0) / 100.0
            + (self.macd_line - self.signal_line) * 10.0
            + self.sentiment * 0.2
            + self.backtest_returns / 100.0
    }

    /// Largest fractional change allowed per step given the `history` volatility.
    pub fn max_change(&self, history: &[f64]) -> f64 {
        let bound = 3.0 * return_volatility(history) * self.confidence_adjustment();
        if bound.is_finite() {
            bound.max(MIN_MAX_CHANGE)
        } else {
            MIN_MAX_CHANGE
        }
    }
}

/// Walk `predictions` forward from the last `history` price, bounding every step.
///
/// Step `i` targets `predictions[i]` with an extra `trend_bias * (i + 1) * 0.005` bias,
/// clamped to `±max_change`. With fewer than two history points the predictions are
/// returned unchanged.
pub fn apply_confidence_bands(
    predictions: &[f64],
    history: &[f64],
    signals: &MarketSignals,
) -> Vec<f64> {
    let Some(&last) = history.last() else {
        return predictions.to_vec();
    };
    if history.len() < 2 {
        return predictions.to_vec();
    }

    let max_change = signals.max_change(history);
    let trend_bias = signals.trend_bias();

    predictions
        .iter()
        .enumerate()
        .scan(last, |current, (step, target)| {
            let change = if *current == 0.0 {
                0.0
            } else {
                target / *current - 1.0 + trend_bias * (step + 1) as f64 * BIAS_STEP
            };
            let change = if change.is_finite() {
                change.clamp(-max_change, max_change)
            } else {
                0.0
            };

            *current *= 1.0 + change;
            Some(*current)
        })
        .collect()
}

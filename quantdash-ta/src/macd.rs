use crate::indicators::ema;
use serde::{Deserialize, Serialize};

/// MACD parameters.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct MacdConfig {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// MACD output arrays, each aligned with the input prices.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Macd {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl Macd {
    /// Latest `(macd_line, signal_line)` pair, or zeros for an empty series.
    pub fn latest(&self) -> (f64, f64) {
        (
            self.macd_line.last().copied().unwrap_or(0.0),
            self.signal_line.last().copied().unwrap_or(0.0),
        )
    }
}

/// Moving Average Convergence Divergence.
///
/// The MACD line is zero before index `slow - 1`; from there it is the fast
/// EMA at `i` minus the slow EMA at `i - (slow - fast)`. The signal line is the
/// EMA of the post warm-up MACD values, shifted back into alignment, so it and
/// the histogram are zero before `slow + signal - 2`.
pub fn macd(prices: &[f64], config: MacdConfig) -> Macd {
    let MacdConfig { fast, slow, signal } = config;
    let len = prices.len();

    if slow == 0 || fast > slow || len < slow {
        return Macd {
            macd_line: vec![0.0; len],
            signal_line: vec![0.0; len],
            histogram: vec![0.0; len],
        };
    }

    let fast_ema = ema(prices, fast);
    let slow_ema = ema(prices, slow);
    let offset = slow - fast;

    let macd_line: Vec<f64> = (0..len)
        .map(|i| {
            if i < slow - 1 {
                0.0
            } else {
                fast_ema[i] - slow_ema[i - offset]
            }
        })
        .collect();

    let mut signal_line = vec![0.0; slow - 1];
    signal_line.extend(ema(&macd_line[slow - 1..], signal));

    let signal_start = slow + signal.max(1) - 2;
    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .enumerate()
        .map(|(i, (macd, signal))| if i < signal_start { 0.0 } else { macd - signal })
        .collect();

    Macd {
        macd_line,
        signal_line,
        histogram,
    }
}

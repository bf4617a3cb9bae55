use serde::{Deserialize, Serialize};

/// Neutral RSI value used for warm-up positions and short series.
pub const RSI_NEUTRAL: f64 = 50.0;

/// Substituted for a zero average loss so RS stays finite.
const MIN_AVERAGE_LOSS: f64 = 0.001;

/// RSI parameters.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct RsiConfig {
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// Relative Strength Index using Wilder smoothing.
///
/// The output has the same length as `prices`. The first `period` entries are
/// [`RSI_NEUTRAL`], and a series with fewer than `period + 1` prices is
/// neutral throughout.
pub fn rsi(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() < period + 1 {
        return vec![RSI_NEUTRAL; prices.len()];
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = prices
        .windows(2)
        .map(|pair| {
            let delta = pair[1] - pair[0];
            (delta.max(0.0), (-delta).max(0.0))
        })
        .unzip();

    let period_f = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / period_f;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period_f;

    let mut out = Vec::with_capacity(prices.len());
    out.resize(period, RSI_NEUTRAL);

    for i in period..prices.len() {
        avg_gain = (avg_gain * (period_f - 1.0) + gains[i - 1]) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + losses[i - 1]) / period_f;

        let divisor = if avg_loss == 0.0 { MIN_AVERAGE_LOSS } else { avg_loss };
        let rs = avg_gain / divisor;
        out.push(100.0 - 100.0 / (1.0 + rs));
    }

    out
}

use crate::{
    bands::{MarketSignals, apply_confidence_bands},
    decomposition::{SEASONAL_PERIOD, decompose},
    residual::forecast_residuals,
    seasonal::forecast_seasonality,
    trend::HoltLinear,
};
use derive_more::From;
use quantdash_data::Timeframe;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Minimum number of prices required to run the full forecast pipeline.
pub const MIN_FORECAST_POINTS: usize = 10;

/// Number of trailing prices the forecaster is trained on.
pub const TRAINING_WINDOW: usize = 60;

/// Latest MACD and signal line values.
#[derive(Debug, Copy, Clone, PartialEq, Default, Deserialize, Serialize, From)]
pub struct MacdSnapshot {
    pub macd_line: f64,
    pub signal_line: f64,
}

/// Immutable snapshot of everything a forecast depends on.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForecastInput {
    pub prices: Vec<f64>,
    pub sentiment: f64,
    pub backtest_returns: f64,
    pub rsi: f64,
    pub macd: MacdSnapshot,
}

impl ForecastInput {
    /// Input with neutral signals (sentiment 0, backtest 0, RSI 50, MACD 0/0).
    pub fn neutral(prices: Vec<f64>) -> Self {
        let MarketSignals {
            rsi,
            sentiment,
            backtest_returns,
            ..
        } = MarketSignals::default();

        Self {
            prices,
            sentiment,
            backtest_returns,
            rsi,
            macd: MacdSnapshot::default(),
        }
    }

    pub fn signals(&self) -> MarketSignals {
        MarketSignals {
            rsi: self.rsi,
            macd_line: self.macd.macd_line,
            signal_line: self.macd.signal_line,
            sentiment: self.sentiment,
            backtest_returns: self.backtest_returns,
        }
    }
}

/// Number of points forecast for a [`Timeframe`].
pub fn horizon(timeframe: Timeframe) -> usize {
    timeframe.horizon()
}

/// Forecast the next `horizon` prices.
///
/// With fewer than [`MIN_FORECAST_POINTS`] prices the first price (or `0.0`) is repeated.
/// Otherwise the trailing [`TRAINING_WINDOW`] prices are decomposed, each component is
/// forecast, and the summed forecast is bounded by
/// [`apply_confidence_bands`](crate::bands::apply_confidence_bands).
pub fn forecast<R>(input: &ForecastInput, horizon: usize, rng: &mut R) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let prices = &input.prices;
    if prices.len() < MIN_FORECAST_POINTS {
        return vec![prices.first().copied().unwrap_or(0.0); horizon];
    }

    let training = &prices[prices.len() - TRAINING_WINDOW.min(prices.len())..];
    let decomposition = decompose(training);

    let trend = HoltLinear::default().forecast(&decomposition.trend, horizon);
    let seasonal = forecast_seasonality(&decomposition.seasonality, SEASONAL_PERIOD, horizon);
    let residual = forecast_residuals(&decomposition.residuals, horizon, rng);

    let raw = trend
        .iter()
        .zip(&seasonal)
        .zip(&residual)
        .map(|((trend, seasonal), residual)| trend + seasonal + residual)
        .collect::<Vec<_>>();

    apply_confidence_bands(&raw, training, &input.signals())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn trending(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| 500.0 + i as f64 * 2.0 + (i as f64 * 1.3).sin() * 2.0)
            .collect()
    }

    #[test]
    fn test_forecast_short_series_guard() {
        struct TestCase {
            prices: Vec<f64>,
            expected: Vec<f64>,
        }

        let cases = vec![
            // TC0: empty
            TestCase {
                prices: vec![],
                expected: vec![0.0; 4],
            },
            // TC1: repeats the first price
            TestCase {
                prices: vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
                expected: vec![3.0; 4],
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(0);
            let actual = forecast(&ForecastInput::neutral(test.prices), 4, &mut rng);
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_forecast_length_matches_horizon() {
        let input = ForecastInput::neutral(trending(60));
        for timeframe in Timeframe::ALL {
            let mut rng = StdRng::seed_from_u64(1);
            let out = forecast(&input, horizon(timeframe), &mut rng);
            assert_eq!(out.len(), timeframe.horizon(), "{timeframe}");
        }
    }

    #[test]
    fn test_forecast_follows_uptrend() {
        let prices = trending(60);
        let last = *prices.last().unwrap();
        let out = forecast(&ForecastInput::neutral(prices), 5, &mut StdRng::seed_from_u64(3));

        assert!(out[4] > last, "{out:?}");
    }

    #[test]
    fn test_forecast_short_training_window() {
        for len in 10..14 {
            let prices = trending(len);
            let out = forecast(&ForecastInput::neutral(prices), 4, &mut StdRng::seed_from_u64(5));
            assert_eq!(out.len(), 4, "len {len}");
            assert!(out.iter().all(|value| value.is_finite()), "len {len}: {out:?}");
        }
    }

    #[test]
    fn test_macd_snapshot_from_tuple() {
        assert_eq!(
            MacdSnapshot::from((1.5, 0.5)),
            MacdSnapshot {
                macd_line: 1.5,
                signal_line: 0.5
            }
        );
    }
}

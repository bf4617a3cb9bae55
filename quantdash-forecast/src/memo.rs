use crate::forecast::{ForecastInput, MacdSnapshot, forecast};
use quantdash_data::Timeframe;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

/// Minimum number of prices for the memo to produce a forecast at all.
const MIN_MEMO_POINTS: usize = 3;

#[derive(Serialize)]
struct MemoKey<'a> {
    prices: &'a [f64],
    timeframe: Timeframe,
    macd: MacdSnapshot,
    rsi: f64,
    backtest: f64,
    sentiment: f64,
}

impl<'a> MemoKey<'a> {
    fn new(input: &'a ForecastInput, timeframe: Timeframe) -> Self {
        Self {
            prices: &input.prices,
            timeframe,
            macd: input.macd,
            rsi: input.rsi,
            backtest: input.backtest_returns,
            sentiment: input.sentiment,
        }
    }
}

/// Remembers the most recent forecast and the serialised inputs that produced it.
///
/// Asking again with identical inputs returns the remembered forecast without
/// recomputing it (and without drawing from the rng).
#[derive(Debug, Clone, Default)]
pub struct ForecastMemo {
    key: Option<String>,
    forecast: Vec<f64>,
    computations: u64,
}

impl ForecastMemo {
    /// Forecast `input` over the [`Timeframe::horizon`], reusing the previous result if the
    /// inputs are unchanged. Series with fewer than three prices forecast nothing.
    pub fn forecast<R>(&mut self, input: &ForecastInput, timeframe: Timeframe, rng: &mut R) -> &[f64]
    where
        R: Rng + ?Sized,
    {
        let key = match serde_json::to_string(&MemoKey::new(input, timeframe)) {
            Ok(key) => Some(key),
            Err(error) => {
                warn!(%error, "failed to serialise forecast memo key, recomputing");
                None
            }
        };

        if key.is_some() && key == self.key {
            debug!(%timeframe, "ForecastMemo hit");
            return &self.forecast;
        }

        self.forecast = if input.prices.len() < MIN_MEMO_POINTS {
            Vec::new()
        } else {
            forecast(input, timeframe.horizon(), rng)
        };
        self.key = key;
        self.computations += 1;
        debug!(%timeframe, len = input.prices.len(), "ForecastMemo recomputed");

        &self.forecast
    }

    /// Number of forecasts actually computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Most recent forecast.
    pub fn last(&self) -> &[f64] {
        &self.forecast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn input() -> ForecastInput {
        ForecastInput::neutral((0..30).map(|i| 100.0 + i as f64).collect())
    }

    #[test]
    fn test_memo_reuses_unchanged_inputs() {
        let mut memo = ForecastMemo::default();
        let mut rng = StdRng::seed_from_u64(9);

        let first = memo.forecast(&input(), Timeframe::Hour1, &mut rng).to_vec();
        let second = memo.forecast(&input(), Timeframe::Hour1, &mut rng).to_vec();

        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn test_memo_recomputes_on_change() {
        struct TestCase {
            input: ForecastInput,
            timeframe: Timeframe,
            expected_computations: u64,
            expected_len: usize,
        }

        let mut memo = ForecastMemo::default();
        let mut rng = StdRng::seed_from_u64(9);

        let cases = vec![
            // TC0: first request computes
            TestCase {
                input: input(),
                timeframe: Timeframe::Hour1,
                expected_computations: 1,
                expected_len: 8,
            },
            // TC1: timeframe change recomputes
            TestCase {
                input: input(),
                timeframe: Timeframe::Hour4,
                expected_computations: 2,
                expected_len: 10,
            },
            // TC2: sentiment change recomputes
            TestCase {
                input: ForecastInput {
                    sentiment: 0.4,
                    ..input()
                },
                timeframe: Timeframe::Hour4,
                expected_computations: 3,
                expected_len: 10,
            },
            // TC3: unchanged
            TestCase {
                input: ForecastInput {
                    sentiment: 0.4,
                    ..input()
                },
                timeframe: Timeframe::Hour4,
                expected_computations: 3,
                expected_len: 10,
            },
            // TC4: too few prices forecasts nothing
            TestCase {
                input: ForecastInput::neutral(vec![1.0, 2.0]),
                timeframe: Timeframe::Hour4,
                expected_computations: 4,
                expected_len: 0,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let len = memo.forecast(&test.input, test.timeframe, &mut rng).len();
            assert_eq!(len, test.expected_len, "TC{index} failed");
            assert_eq!(memo.computations(), test.expected_computations, "TC{index} failed");
        }
    }
}

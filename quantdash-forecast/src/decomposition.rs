use serde::{Deserialize, Serialize};

/// Assumed length of the seasonal cycle.
pub const SEASONAL_PERIOD: usize = 7;

/// Largest centred moving average window used to extract the trend.
const MAX_TREND_WINDOW: usize = 7;

/// Additive decomposition `value = trend + seasonality + residual`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Decomposition {
    pub trend: Vec<f64>,
    pub seasonality: Vec<f64>,
    pub residuals: Vec<f64>,
}

/// Decompose `data` into trend, seasonality and residuals.
pub fn decompose(data: &[f64]) -> Decomposition {
    let trend = centred_moving_average(data, (data.len() / 3).min(MAX_TREND_WINDOW));

    let detrended = data
        .iter()
        .zip(&trend)
        .map(|(value, trend)| value - trend)
        .collect::<Vec<_>>();
    let seasonality = smooth_seasonality(detrended, SEASONAL_PERIOD);

    let residuals = data
        .iter()
        .zip(&trend)
        .zip(&seasonality)
        .map(|((value, trend), seasonal)| value - trend - seasonal)
        .collect();

    Decomposition {
        trend,
        seasonality,
        residuals,
    }
}

/// Centred moving average over `window` points.
///
/// The first and last `window / 2` points copy the raw values. Interior points average
/// the `2 * (window / 2) + 1` values centred on them.
pub fn centred_moving_average(data: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    let n = data.len();
    if half == 0 || n <= 2 * half {
        return data.to_vec();
    }

    let span = (2 * half + 1) as f64;
    (0..n)
        .map(|i| {
            if i < half || i >= n - half {
                data[i]
            } else {
                data[i - half..=i + half].iter().sum::<f64>() / span
            }
        })
        .collect()
}

/// Replace every seasonal phase with the mean of its class.
///
/// Smoothing only applies once at least two full periods are available, otherwise the
/// input is returned unchanged.
pub fn smooth_seasonality(mut seasonality: Vec<f64>, period: usize) -> Vec<f64> {
    let n = seasonality.len();
    if period == 0 || n < 2 * period {
        return seasonality;
    }

    for phase in 0..period {
        let (sum, count) = seasonality
            .iter()
            .skip(phase)
            .step_by(period)
            .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
        let mean = sum / count as f64;

        seasonality
            .iter_mut()
            .skip(phase)
            .step_by(period)
            .for_each(|value| *value = mean);
    }

    seasonality
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centred_moving_average() {
        struct TestCase {
            data: Vec<f64>,
            window: usize,
            expected: Vec<f64>,
        }

        let cases = vec![
            // TC0: window 0 copies the data
            TestCase {
                data: vec![1.0, 2.0, 3.0],
                window: 0,
                expected: vec![1.0, 2.0, 3.0],
            },
            // TC1: window 3 averages interior points, edges copied
            TestCase {
                data: vec![1.0, 2.0, 6.0, 4.0, 5.0],
                window: 3,
                expected: vec![1.0, 3.0, 4.0, 5.0, 5.0],
            },
            // TC2: even window 4 still spans 2 * 2 + 1 points
            TestCase {
                data: vec![5.0, 5.0, 10.0, 5.0, 5.0, 0.0],
                window: 4,
                expected: vec![5.0, 5.0, 6.0, 5.0, 5.0, 0.0],
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = centred_moving_average(&test.data, test.window);
            assert_eq!(actual.len(), test.expected.len(), "TC{index} failed");
            for (actual, expected) in actual.iter().zip(&test.expected) {
                assert!((actual - expected).abs() < 1e-12, "TC{index} failed");
            }
        }
    }

    #[test]
    fn test_smooth_seasonality() {
        // fewer than two periods: unchanged
        let short = vec![1.0, 2.0, 3.0];
        assert_eq!(smooth_seasonality(short.clone(), 7), short);

        // two periods of 2: classes [1, 3] and [2, 6]
        let smoothed = smooth_seasonality(vec![1.0, 2.0, 3.0, 6.0], 2);
        assert_eq!(smoothed, vec![2.0, 4.0, 2.0, 4.0]);
    }

    #[test]
    fn test_decomposition_is_additive() {
        let data: Vec<f64> = (0..40)
            .map(|i| 100.0 + i as f64 * 0.5 + [3.0, -1.0, 0.0, 2.0, -2.0, 1.0, -3.0][i % 7])
            .collect();

        let Decomposition {
            trend,
            seasonality,
            residuals,
        } = decompose(&data);

        assert_eq!(trend.len(), data.len());
        for i in 0..data.len() {
            let rebuilt = trend[i] + seasonality[i] + residuals[i];
            assert!((rebuilt - data[i]).abs() < 1e-9, "index {i}");
        }
    }
}

use serde::{Deserialize, Serialize};

/// Bollinger Bands parameters.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct BollingerConfig {
    pub period: usize,
    pub std_dev: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

/// Upper, middle and lower bands, each aligned with the input prices.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Bollinger Bands over a trailing window of `period` prices.
///
/// Uses an expanding window while fewer than `period` prices are available,
/// so the first band is the first price with zero width. The deviation is the
/// population standard deviation of the window.
pub fn bollinger_bands(prices: &[f64], config: BollingerConfig) -> BollingerBands {
    let period = config.period.max(1);
    let mut bands = BollingerBands {
        upper: Vec::with_capacity(prices.len()),
        middle: Vec::with_capacity(prices.len()),
        lower: Vec::with_capacity(prices.len()),
    };

    for i in 0..prices.len() {
        let window = &prices[(i + 1).saturating_sub(period)..=i];
        let count = window.len() as f64;

        let mean = window.iter().sum::<f64>() / count;
        let variance = window.iter().map(|price| (price - mean).powi(2)).sum::<f64>() / count;
        let width = variance.sqrt() * config.std_dev;

        bands.middle.push(mean);
        bands.upper.push(mean + width);
        bands.lower.push(mean - width);
    }

    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_expanding_window() {
        let prices = [2.0, 4.0, 6.0];
        let bands = bollinger_bands(
            &prices,
            BollingerConfig {
                period: 2,
                std_dev: 2.0,
            },
        );

        assert_eq!(bands.middle, vec![2.0, 3.0, 5.0]);
        assert_eq!(bands.upper, vec![2.0, 5.0, 7.0]);
        assert_eq!(bands.lower, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_bollinger_bands_ordered() {
        let prices: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let bands = bollinger_bands(&prices, BollingerConfig::default());

        for i in 0..prices.len() {
            assert!(bands.lower[i] <= bands.middle[i], "index {i}");
            assert!(bands.middle[i] <= bands.upper[i], "index {i}");
        }
    }

    #[test]
    fn test_bollinger_empty() {
        let bands = bollinger_bands(&[], BollingerConfig::default());
        assert!(bands.middle.is_empty());
    }
}

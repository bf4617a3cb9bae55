use derive_more::{Constructor, Display};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Default rolling window used by the dashboard.
pub const DEFAULT_CORRELATION_WINDOW: usize = 30;

/// Pearson correlation coefficient of two equally sized samples.
///
/// Returns `0.0` for fewer than two points or when either sample has zero
/// variance. The result is clamped to `[-1, 1]`.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;

    let (numerator, x_denom, y_denom) = x.iter().zip(y).fold(
        (0.0, 0.0, 0.0),
        |(numerator, x_denom, y_denom), (x, y)| {
            let x_diff = x - x_mean;
            let y_diff = y - y_mean;
            (
                numerator + x_diff * y_diff,
                x_denom + x_diff * x_diff,
                y_denom + y_diff * y_diff,
            )
        },
    );

    if x_denom == 0.0 || y_denom == 0.0 {
        return 0.0;
    }

    let correlation = numerator / (x_denom * y_denom).sqrt();
    if correlation.is_finite() {
        correlation.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Rolling Pearson correlation between `a` and `b`.
///
/// The output has the length of `a`. Both series are aligned to the shorter
/// of the two and the window shrinks to fit it. Warm-up positions and any
/// positions past the shorter series are `0.0`.
pub fn rolling_correlation(a: &[f64], b: &[f64], window: usize) -> Vec<f64> {
    let n = a.len().min(b.len());
    let window = window.min(n);
    let mut out = vec![0.0; a.len()];

    if window < 2 {
        return out;
    }

    for i in window - 1..n {
        let start = i + 1 - window;
        out[i] = pearson(&a[start..=i], &b[start..=i]);
    }

    out
}

/// Qualitative strength of a correlation coefficient.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Display)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

impl CorrelationStrength {
    pub fn classify(correlation: f64) -> Self {
        match correlation.abs() {
            value if value >= 0.7 => Self::Strong,
            value if value >= 0.3 => Self::Moderate,
            _ => Self::Weak,
        }
    }
}

/// Latest correlation between a pair of series.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct CorrelationEntry<Key> {
    pub first: Key,
    pub second: Key,
    pub correlation: f64,
    pub strength: CorrelationStrength,
}

impl<Key> CorrelationEntry<Key> {
    pub fn is_positive(&self) -> bool {
        self.correlation > 0.0
    }
}

/// Pairwise correlation of every unordered pair of series.
///
/// Each pair uses its trailing `min(window, len a, len b)` points and reports
/// the latest rolling value. Pairs with fewer than two overlapping points are
/// skipped. Entries are sorted by absolute correlation, strongest first.
pub fn correlation_matrix<Key, Prices>(series: &[(Key, Prices)], window: usize) -> Vec<CorrelationEntry<Key>>
where
    Key: Clone,
    Prices: AsRef<[f64]>,
{
    series
        .iter()
        .tuple_combinations()
        .filter_map(|((first, a), (second, b))| {
            let (a, b): (&[f64], &[f64]) = (a.as_ref(), b.as_ref());
            let size = window.min(a.len()).min(b.len());
            if size < 2 {
                return None;
            }

            let correlation = rolling_correlation(&a[a.len() - size..], &b[b.len() - size..], size)
                .last()
                .copied()
                .unwrap_or(0.0);

            Some(CorrelationEntry::new(
                first.clone(),
                second.clone(),
                correlation,
                CorrelationStrength::classify(correlation),
            ))
        })
        .sorted_by(|x, y| y.correlation.abs().total_cmp(&x.correlation.abs()))
        .collect()
}

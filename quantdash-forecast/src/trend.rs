use serde::{Deserialize, Serialize};

/// Holt's linear (double exponential) smoothing.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct HoltLinear {
    /// Level smoothing factor.
    pub alpha: f64,
    /// Slope smoothing factor.
    pub beta: f64,
}

impl Default for HoltLinear {
    fn default() -> Self {
        Self {
            alpha: 0.7,
            beta: 0.3,
        }
    }
}

impl HoltLinear {
    /// Fit the level and slope over `trend`, seeded from its first two points.
    ///
    /// Returns `None` for fewer than two points.
    pub fn fit(&self, trend: &[f64]) -> Option<(f64, f64)> {
        let (first, second) = (trend.first()?, trend.get(1)?);
        let initial = (*first, second - first);

        Some(
            trend
                .iter()
                .skip(1)
                .fold(initial, |(level, slope), value| {
                    let next_level = self.alpha * value + (1.0 - self.alpha) * (level + slope);
                    let next_slope = self.beta * (next_level - level) + (1.0 - self.beta) * slope;
                    (next_level, next_slope)
                }),
        )
    }

    /// Extrapolate `horizon` points past the end of `trend`.
    ///
    /// With fewer than two points the first point (or zero) is repeated.
    pub fn forecast(&self, trend: &[f64], horizon: usize) -> Vec<f64> {
        match self.fit(trend) {
            Some((level, slope)) => (1..=horizon).map(|step| level + step as f64 * slope).collect(),
            None => vec![trend.first().copied().unwrap_or(0.0); horizon],
        }
    }
}

use crate::algorithm::RunningMoments;

/// Simple period-over-period returns `p[i] / p[i - 1] - 1`.
///
/// Returns that are not finite (e.g. a zero previous price) are skipped.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|pair| pair[1] / pair[0] - 1.0)
        .filter(|change| change.is_finite())
        .collect()
}

/// Population standard deviation of the simple returns of `prices`.
///
/// Zero when fewer than two returns are available.
pub fn return_volatility(prices: &[f64]) -> f64 {
    let moments: RunningMoments = simple_returns(prices).into_iter().collect();
    if moments.count < 2 {
        return 0.0;
    }
    moments.population_std_dev()
}

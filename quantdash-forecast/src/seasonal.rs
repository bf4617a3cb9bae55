/// Forecast `horizon` seasonal values by repeating the phase of the cycle.
///
/// Step `i` uses the historical value at index `(len + i) mod period`. Phases with no
/// history yield `0.0`.
pub fn forecast_seasonality(seasonality: &[f64], period: usize, horizon: usize) -> Vec<f64> {
    let n = seasonality.len();
    if period == 0 || n == 0 {
        return vec![0.0; horizon];
    }

    (0..horizon)
        .map(|step| {
            let phase = (n + step) % period;
            seasonality.get(phase).copied().unwrap_or(0.0)
        })
        .collect()
}

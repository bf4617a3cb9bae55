use rand::Rng;

/// Maximum autoregressive order.
const MAX_AR_ORDER: usize = 3;

/// Per-lag damping applied to the autocorrelation coefficients.
const LAG_DAMPING: f64 = 0.9;

/// Scale of the uniform noise added to each residual step, relative to the last residual.
const NOISE_SCALE: f64 = 0.01;

/// Minimum residual history required to fit the autoregression.
const MIN_RESIDUALS: usize = 5;

/// Damped autocorrelation coefficients for lags `1..=order`.
///
/// `coef[lag - 1] = autocorr(lag) * 0.9^lag`, where the autocorrelation is taken over the
/// mean-centred data. Zero variance yields zero coefficients.
pub fn ar_coefficients(data: &[f64], order: usize) -> Vec<f64> {
    if data.is_empty() {
        return vec![0.0; order];
    }

    let mean = data.iter().sum::<f64>() / data.len() as f64;
    let centred = data.iter().map(|value| value - mean).collect::<Vec<_>>();
    let denominator = centred.iter().map(|value| value * value).sum::<f64>();

    (1..=order)
        .map(|lag| {
            if denominator == 0.0 {
                return 0.0;
            }
            let numerator = centred
                .iter()
                .skip(lag)
                .zip(&centred)
                .map(|(current, lagged)| current * lagged)
                .sum::<f64>();
            numerator / denominator * LAG_DAMPING.powi(lag as i32)
        })
        .collect()
}

/// Recursively forecast `horizon` residuals with a damped AR(`min(3, n - 1)`) model.
///
/// Each step sums the coefficient weighted previous `order` values (history first, then
/// earlier forecasts) and adds uniform noise scaled by the magnitude of the last residual
/// (or `1.0` if it is zero). Fewer than 5 residuals forecast zeros.
pub fn forecast_residuals<R>(residuals: &[f64], horizon: usize, rng: &mut R) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let n = residuals.len();
    if n < MIN_RESIDUALS {
        return vec![0.0; horizon];
    }

    let order = MAX_AR_ORDER.min(n - 1);
    let coefficients = ar_coefficients(residuals, order);
    let noise_base = match residuals[n - 1] {
        last if last == 0.0 || !last.is_finite() => 1.0,
        last => last.abs(),
    };

    let mut forecast = Vec::with_capacity(horizon);
    for step in 0..horizon {
        let prediction = coefficients
            .iter()
            .enumerate()
            .map(|(j, coefficient)| {
                let index = n - order + j + step;
                let value = if index < n {
                    residuals[index]
                } else {
                    forecast[index - n]
                };
                coefficient * value
            })
            .sum::<f64>();

        let noise = (rng.random::<f64>() - 0.5) * NOISE_SCALE * noise_base;
        forecast.push(prediction + noise);
    }

    forecast
}

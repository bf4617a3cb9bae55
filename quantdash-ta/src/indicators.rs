use std::collections::VecDeque;

/// Simple moving average over a trailing window.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl SimpleMovingAverage {
    /// Create a new SMA with the given period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            values: VecDeque::with_capacity(period + 1),
            sum: 0.0,
        }
    }

    /// Update the SMA with a new value and return the latest average.
    pub fn update(&mut self, value: f64) -> f64 {
        self.values.push_back(value);
        self.sum += value;
        if self.values.len() > self.period {
            if let Some(old) = self.values.pop_front() {
                self.sum -= old;
            }
        }
        self.average()
    }

    /// Current average value.
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.sum / self.values.len() as f64
        }
    }

    /// True once `period` values have been observed.
    pub fn is_full(&self) -> bool {
        self.values.len() == self.period
    }
}

/// Exponential moving average seeded with the simple average of the first `period` values.
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    period: usize,
    multiplier: f64,
    seed_sum: f64,
    seen: usize,
    value: Option<f64>,
}

impl ExponentialMovingAverage {
    /// Create a new EMA with the given period.
    pub fn new(period: usize) -> Self {
        let multiplier = 2.0 / (period as f64 + 1.0);
        Self {
            period,
            multiplier,
            seed_sum: 0.0,
            seen: 0,
            value: None,
        }
    }

    /// Update the EMA with a new price.
    ///
    /// Returns `None` until `period` prices have been observed.
    pub fn update(&mut self, price: f64) -> Option<f64> {
        match self.value {
            Some(prev) => {
                let next = price * self.multiplier + prev * (1.0 - self.multiplier);
                self.value = Some(next);
            }
            None => {
                self.seed_sum += price;
                self.seen += 1;
                if self.seen == self.period {
                    self.value = Some(self.seed_sum / self.period as f64);
                }
            }
        }
        self.value
    }

    /// Current EMA value if initialised.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Batch EMA over `data`, aligned with the input.
///
/// The first `period - 1` entries are `0.0`. A series shorter than `period`
/// yields all zeros.
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![0.0; data.len()];
    }

    let mut ema = ExponentialMovingAverage::new(period);
    data.iter()
        .map(|&price| ema.update(price).unwrap_or(0.0))
        .collect()
}

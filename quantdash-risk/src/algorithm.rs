/// Grouping of [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// algorithms for calculating running values such as mean and variance in one pass through.
pub mod welford_online {
    /// Calculates the next mean.
    pub fn calculate_mean(prev_mean: f64, next_value: f64, count: f64) -> f64 {
        prev_mean + (next_value - prev_mean) / count
    }

    /// Calculates the next Welford Online recurrence relation M.
    pub fn calculate_recurrence_relation_m(
        prev_m: f64,
        prev_mean: f64,
        new_value: f64,
        new_mean: f64,
    ) -> f64 {
        prev_m + ((new_value - prev_mean) * (new_value - new_mean))
    }

    /// Calculates the next biased 'Population' Variance using the Welford Online recurrence relation M.
    pub fn calculate_population_variance(recurrence_relation_m: f64, count: f64) -> f64 {
        if count < 1.0 {
            0.0
        } else {
            recurrence_relation_m / count
        }
    }
}

/// One-pass mean and population variance accumulator.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RunningMoments {
    pub count: usize,
    pub mean: f64,
    pub recurrence_relation_m: f64,
}

impl RunningMoments {
    /// Fold a new value into the running moments.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let prev_mean = self.mean;
        self.mean = welford_online::calculate_mean(prev_mean, value, self.count as f64);
        self.recurrence_relation_m = welford_online::calculate_recurrence_relation_m(
            self.recurrence_relation_m,
            prev_mean,
            value,
            self.mean,
        );
    }

    pub fn population_variance(&self) -> f64 {
        welford_online::calculate_population_variance(self.recurrence_relation_m, self.count as f64)
    }

    pub fn population_std_dev(&self) -> f64 {
        self.population_variance().sqrt()
    }
}

impl FromIterator<f64> for RunningMoments {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut moments = Self::default();
        iter.into_iter().for_each(|value| moments.update(value));
        moments
    }
}

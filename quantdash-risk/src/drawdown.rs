use serde::{Deserialize, Serialize};

/// Tracks a cumulative value curve to compute its deepest decline from a running peak.
///
/// Drawdown is measured in the same units as the curve (e.g. cumulative percentage
/// return), so a curve `[0, 10, 4]` has a max drawdown of `-6`.
#[derive(Debug, Copy, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct DrawdownTracker {
    pub peak: Option<f64>,
    pub current: f64,
    pub max_drawdown: f64,
}

impl DrawdownTracker {
    /// Initialise a [`DrawdownTracker`] from the first point of the curve.
    pub fn init(value: f64) -> Self {
        Self {
            peak: Some(value),
            current: value,
            max_drawdown: 0.0,
        }
    }

    /// Update the tracker with the next curve value.
    pub fn update(&mut self, value: f64) {
        self.current = value;

        let peak = match self.peak {
            Some(peak) if peak >= value => peak,
            _ => {
                self.peak = Some(value);
                value
            }
        };

        self.max_drawdown = self.max_drawdown.min(value - peak);
    }

    /// Current decline from the running peak (zero or negative).
    pub fn drawdown(&self) -> f64 {
        self.peak.map_or(0.0, |peak| self.current - peak)
    }
}

impl FromIterator<f64> for DrawdownTracker {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut tracker = Self::default();
        iter.into_iter().for_each(|value| tracker.update(value));
        tracker
    }
}

use crate::correlation::pearson;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Projection of a low-cap coin's next move from a big-cap coin's latest move.
#[derive(Debug, Copy, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct LeadLagProjection {
    /// Correlation of the big-cap series with the low-cap series shifted `lag` periods ahead.
    pub lead_correlation: f64,
    /// Last big-cap price change.
    pub last_change: f64,
    pub projected_change: f64,
    pub projected_volume: u64,
}

/// How a big-cap move is expected to carry over to the low-cap coin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Display)]
pub enum LeadEffect {
    Same,
    Inverse,
    Weak,
}

impl LeadLagProjection {
    pub fn effect(&self) -> LeadEffect {
        match self.lead_correlation {
            value if value > 0.2 => LeadEffect::Same,
            value if value < -0.2 => LeadEffect::Inverse,
            _ => LeadEffect::Weak,
        }
    }
}

/// Project the next low-cap move and volume from the big-cap series.
///
/// Series are aligned to the shorter of the two. With fewer than `lag + 1`
/// aligned points (or fewer than two) the projection is all zeros.
pub fn lead_lag(big: &[f64], low: &[f64], low_volume: u64, lag: usize) -> LeadLagProjection {
    let n = big.len().min(low.len());
    if n <= lag || n < 2 {
        return LeadLagProjection::default();
    }

    let lead_correlation = pearson(&big[..n - lag], &low[lag..n]);

    let last_change = big[n - 1] - big[n - 2];
    let last_change = if last_change.is_finite() { last_change } else { 0.0 };

    let projected_change = if lead_correlation > 0.0 {
        last_change
    } else {
        -last_change
    };

    let projected_volume =
        (low_volume as f64 * (1.0 + (projected_change / 100.0).abs())).round() as u64;

    LeadLagProjection {
        lead_correlation,
        last_change,
        projected_change,
        projected_volume,
    }
}

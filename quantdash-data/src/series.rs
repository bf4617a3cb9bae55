use crate::{
    coin::{FALLBACK_BASE_PRICE, base_price},
    timeframe::{LabelFormat, Timeframe},
};
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use derive_more::{Constructor, Display};
use fnv::FnvHasher;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Probability of a point carrying an outsized price movement.
const LARGE_MOVE_PROBABILITY: f64 = 0.1;

/// Upper bound (exclusive) of generated volumes.
const MAX_VOLUME: f64 = 100_000.0;

/// Single generated price observation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct PricePoint {
    /// Time label rendered with the series [`LabelFormat`].
    pub time: String,
    pub price: f64,
    pub volume: u64,
}

/// Chronological series of [`PricePoint`]s for a `(symbol, Timeframe)` key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct GeneratedSeries {
    pub points: Vec<PricePoint>,
    pub label_format: LabelFormat,
}

impl GeneratedSeries {
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.price).collect()
    }

    pub fn volumes(&self) -> Vec<u64> {
        self.points.iter().map(|point| point.volume).collect()
    }

    pub fn last_volume(&self) -> u64 {
        self.points.last().map_or(0, |point| point.volume)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Identifies a generated series.
#[derive(
    Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Display, Constructor,
)]
#[display("{symbol}-{timeframe}")]
pub struct SeriesKey {
    pub symbol: SmolStr,
    pub timeframe: Timeframe,
}

impl SeriesKey {
    /// Seed derived from the key, stable across runs and platforms.
    pub fn seed(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        self.symbol.as_str().hash(&mut hasher);
        self.timeframe.as_str().hash(&mut hasher);
        hasher.finish()
    }
}

/// Deterministic synthetic price series generator.
///
/// The same `(seed, anchor, symbol, timeframe)` always produces the same series. Each
/// step is the sum of a trend component biased in one direction for the whole series,
/// a uniform random component and an occasional large movement, all scaled by the
/// [`Timeframe::volatility`] relative to the coin's reference price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Constructor)]
pub struct SeriesGenerator {
    pub seed: u64,
    /// Timestamp of the last generated point.
    pub anchor: DateTime<Utc>,
}

impl SeriesGenerator {
    /// Construct a [`SeriesGenerator`] anchored at the start of the current hour.
    pub fn now(seed: u64) -> Self {
        let now = Utc::now();
        let anchor = now.duration_trunc(TimeDelta::hours(1)).unwrap_or(now);
        Self::new(seed, anchor)
    }

    pub fn generate_series(&self, symbol: &str, timeframe: Timeframe) -> GeneratedSeries {
        self.generate(&SeriesKey::new(SmolStr::new(symbol), timeframe))
    }

    pub fn generate(&self, key: &SeriesKey) -> GeneratedSeries {
        let base = base_price(&key.symbol);
        let volatility = key.timeframe.volatility() * base / FALLBACK_BASE_PRICE;
        let point_count = key.timeframe.point_count();
        let cadence = key.timeframe.cadence();
        let label_format = key.timeframe.label_format();

        let mut rng = StdRng::seed_from_u64(key.seed() ^ self.seed);
        let trend_bias = if rng.random::<f64>() > 0.5 { 1.0 } else { -1.0 };

        let mut price = base;
        let points = (0..point_count)
            .map(|index| {
                let trend = trend_bias * rng.random::<f64>() * volatility * 0.2;
                let random = (rng.random::<f64>() - 0.5) * volatility;
                let large = if rng.random_bool(LARGE_MOVE_PROBABILITY) {
                    (rng.random::<f64>() - 0.5) * volatility * 3.0
                } else {
                    0.0
                };

                price += trend + random + large;
                if round_price(price, base) <= 0.0 {
                    price = base * 0.1;
                }

                let periods_back = (point_count - index - 1) as i32;
                let time = self.anchor - cadence * periods_back;

                PricePoint::new(
                    time.format(label_format.chrono_format()).to_string(),
                    round_price(price, base),
                    (rng.random::<f64>() * MAX_VOLUME).floor() as u64,
                )
            })
            .collect();

        debug!(%key, point_count, "generated price series");

        GeneratedSeries::new(points, label_format)
    }
}

/// Round a generated price to a precision suited to the coin's price magnitude.
fn round_price(price: f64, base: f64) -> f64 {
    let scale = match base {
        base if base >= 100.0 => 10.0,
        base if base >= 1.0 => 100.0,
        _ => 10_000.0,
    };
    (price * scale).round() / scale
}

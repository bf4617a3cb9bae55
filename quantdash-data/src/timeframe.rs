use crate::error::DataError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Chart timeframe selected on the dashboard.
///
/// Each variant determines how many points are generated, how volatile the generated
/// series is, how points are labelled, the spacing between points and how many points
/// ahead are forecast.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize,
)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "15m")]
    Minutes15,
    #[serde(rename = "1H")]
    Hour1,
    #[serde(rename = "4H")]
    Hour4,
    #[serde(rename = "1D")]
    Day1,
    #[serde(rename = "1W")]
    Week1,
}

/// Format of the time labels attached to each generated [`PricePoint`](crate::PricePoint).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum LabelFormat {
    /// Hour and minute, eg/ `14:00`.
    #[serde(rename = "HH:mm")]
    HourMinute,
    /// Abbreviated weekday, eg/ `Mon`.
    #[serde(rename = "ddd")]
    Weekday,
}

impl LabelFormat {
    /// [`chrono`] format string used to render labels.
    pub fn chrono_format(&self) -> &'static str {
        match self {
            LabelFormat::HourMinute => "%H:%M",
            LabelFormat::Weekday => "%a",
        }
    }
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::Minutes15,
        Timeframe::Hour1,
        Timeframe::Hour4,
        Timeframe::Day1,
        Timeframe::Week1,
    ];

    /// Return the &str representation of this [`Timeframe`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Minutes15 => "15m",
            Timeframe::Hour1 => "1H",
            Timeframe::Hour4 => "4H",
            Timeframe::Day1 => "1D",
            Timeframe::Week1 => "1W",
        }
    }

    /// Number of points generated for this timeframe.
    pub fn point_count(&self) -> usize {
        match self {
            Timeframe::Minutes15 | Timeframe::Hour1 => 60,
            Timeframe::Hour4 => 48,
            Timeframe::Day1 => 24,
            Timeframe::Week1 => 7,
        }
    }

    /// Price change scale (in units of an 84,000 reference price).
    pub fn volatility(&self) -> f64 {
        match self {
            Timeframe::Minutes15 => 500.0,
            Timeframe::Hour1 => 1_000.0,
            Timeframe::Hour4 => 2_000.0,
            Timeframe::Day1 => 3_000.0,
            Timeframe::Week1 => 5_000.0,
        }
    }

    pub fn label_format(&self) -> LabelFormat {
        match self {
            Timeframe::Week1 => LabelFormat::Weekday,
            _ => LabelFormat::HourMinute,
        }
    }

    /// Spacing between consecutive points.
    pub fn cadence(&self) -> TimeDelta {
        match self {
            Timeframe::Minutes15 => TimeDelta::minutes(15),
            Timeframe::Hour1 => TimeDelta::hours(1),
            Timeframe::Hour4 => TimeDelta::hours(4),
            Timeframe::Day1 => TimeDelta::hours(24),
            Timeframe::Week1 => TimeDelta::days(1),
        }
    }

    /// Number of points forecast ahead.
    pub fn horizon(&self) -> usize {
        match self {
            Timeframe::Minutes15 => 4,
            Timeframe::Hour1 => 8,
            Timeframe::Hour4 => 10,
            Timeframe::Day1 => 7,
            Timeframe::Week1 => 4,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = DataError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|timeframe| timeframe.as_str() == input)
            .ok_or_else(|| DataError::UnknownTimeframe(input.to_string()))
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Error)]
pub enum DataError {
    #[error("unknown timeframe: {0}, expected one of 15m, 1H, 4H, 1D, 1W")]
    UnknownTimeframe(String),

    #[error("SeriesCache capacity must be non-zero")]
    ZeroCapacity,
}

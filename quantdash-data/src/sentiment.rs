use async_trait::async_trait;
use derive_more::Display;
use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default simulated network latency of [`MockSentimentSource`].
pub const DEFAULT_SENTIMENT_LATENCY: Duration = Duration::from_millis(300);

/// Social channel a [`SentimentReading`] was sourced from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Display)]
pub enum SentimentChannel {
    Twitter,
    Reddit,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTrend {
    Positive,
    Negative,
    Neutral,
}

impl SentimentTrend {
    /// Classify a score in `[-1, 1]` using strict ±0.3 thresholds.
    pub fn from_score(score: f64) -> Self {
        if score > 0.3 {
            Self::Positive
        } else if score < -0.3 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Social sentiment for a symbol.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct SentimentReading {
    /// Score in `[-1, 1]`.
    pub score: f64,
    pub source: SentimentChannel,
    pub trend: SentimentTrend,
}

impl SentimentReading {
    pub fn new(score: f64, source: SentimentChannel) -> Self {
        let score = score.clamp(-1.0, 1.0);
        Self {
            score,
            source,
            trend: SentimentTrend::from_score(score),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize, Error)]
pub enum SentimentError {
    #[error("sentiment unavailable for {symbol}: {reason}")]
    Unavailable { symbol: String, reason: String },

    #[error("sentiment request timed out for {0}")]
    Timeout(String),
}

/// Asynchronous provider of [`SentimentReading`]s.
#[async_trait]
pub trait SentimentSource {
    async fn fetch_sentiment(&self, symbol: &str) -> Result<SentimentReading, SentimentError>;
}

/// Simulated [`SentimentSource`] drawing seeded random readings after a fixed latency.
#[derive(Debug)]
pub struct MockSentimentSource {
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl MockSentimentSource {
    pub fn new(seed: u64, latency: Duration) -> Self {
        Self {
            latency,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, DEFAULT_SENTIMENT_LATENCY)
    }

    fn next_reading(&self) -> SentimentReading {
        let mut rng = self.rng.lock();
        let score = (rng.random_range(-1.0..=1.0_f64) * 100.0).round() / 100.0;
        let source = if rng.random_bool(0.5) {
            SentimentChannel::Twitter
        } else {
            SentimentChannel::Reddit
        };
        SentimentReading::new(score, source)
    }
}

#[async_trait]
impl SentimentSource for MockSentimentSource {
    async fn fetch_sentiment(&self, _: &str) -> Result<SentimentReading, SentimentError> {
        tokio::time::sleep(self.latency).await;
        Ok(self.next_reading())
    }
}

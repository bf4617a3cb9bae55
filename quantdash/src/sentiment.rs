use parking_lot::Mutex;
use quantdash_data::sentiment::{SentimentReading, SentimentSource};
use smol_str::SmolStr;
use std::{future::Future, sync::Arc};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Result of a [`SentimentFeed::fetch`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The fetch was the latest request and its reading was stored. Failed fetches store
    /// `None`.
    Applied(Option<SentimentReading>),
    /// A newer request was issued before this one resolved, so its result was discarded.
    Superseded,
}

#[derive(Debug, Default)]
struct FeedState {
    symbol: Option<SmolStr>,
    reading: Option<SentimentReading>,
}

/// Guards a [`SentimentSource`] so that only the most recent request can update state.
///
/// Every request (and every [`activate`](Self::activate)) bumps a generation counter
/// published on a [`watch`] channel. An in-flight fetch that observes a newer generation
/// is cancelled and never writes its result.
#[derive(Debug)]
pub struct SentimentFeed<Source> {
    source: Source,
    generation: watch::Sender<u64>,
    state: Mutex<FeedState>,
}

impl<Source> SentimentFeed<Source> {
    pub fn new(source: Source) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            source,
            generation,
            state: Mutex::new(FeedState::default()),
        }
    }

    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }

    /// Latest stored reading.
    pub fn reading(&self) -> Option<SentimentReading> {
        self.state.lock().reading
    }

    /// Symbol the feed is active for.
    pub fn symbol(&self) -> Option<SmolStr> {
        self.state.lock().symbol.clone()
    }

    /// Latest sentiment score, `0.0` if there is no reading.
    pub fn current_score(&self) -> f64 {
        self.reading().map_or(0.0, |reading| reading.score)
    }

    /// Switch the feed to `symbol`, discarding the current reading and cancelling any
    /// in-flight fetch.
    pub fn activate(&self, symbol: &str) {
        let generation = self.next_generation();
        let mut state = self.state.lock();
        state.symbol = Some(SmolStr::new(symbol));
        state.reading = None;
        debug!(symbol, generation, "SentimentFeed activated");
    }

    fn next_generation(&self) -> u64 {
        let mut next = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            next = *generation;
        });
        next
    }
}

impl<Source> SentimentFeed<Source>
where
    Source: SentimentSource + Send + Sync + 'static,
{
    /// Request fresh sentiment for `symbol`.
    ///
    /// The request generation is claimed when this is called, not when the returned future
    /// is first polled, so a later call always supersedes an earlier one.
    pub fn fetch(
        self: &Arc<Self>,
        symbol: &str,
    ) -> impl Future<Output = FetchOutcome> + Send + use<Source> {
        let generation = self.next_generation();
        let mut updates = self.generation.subscribe();
        let feed = Arc::clone(self);
        let symbol = SmolStr::new(symbol);

        async move {
            let superseded = async move {
                while updates.changed().await.is_ok() {
                    if *updates.borrow_and_update() != generation {
                        return;
                    }
                }
                std::future::pending::<()>().await
            };

            tokio::select! {
                result = feed.source.fetch_sentiment(&symbol) => {
                    let reading = match result {
                        Ok(reading) => Some(reading),
                        Err(error) => {
                            warn!(%symbol, %error, "sentiment fetch failed, using neutral sentiment");
                            None
                        }
                    };
                    feed.apply(generation, symbol, reading)
                }
                _ = superseded => {
                    debug!(%symbol, generation, "SentimentFeed fetch superseded");
                    FetchOutcome::Superseded
                }
            }
        }
    }

    fn apply(
        &self,
        generation: u64,
        symbol: SmolStr,
        reading: Option<SentimentReading>,
    ) -> FetchOutcome {
        let mut state = self.state.lock();
        if self.generation() != generation {
            return FetchOutcome::Superseded;
        }

        state.symbol = Some(symbol);
        state.reading = reading;
        FetchOutcome::Applied(reading)
    }
}

use crate::{
    error::DataError,
    series::{GeneratedSeries, SeriesGenerator, SeriesKey},
};
use fnv::FnvHashMap;
use indexmap::IndexMap;
use smol_str::SmolStr;
use std::sync::Arc;
use tracing::debug;

/// Bounded least-recently-used cache of [`GeneratedSeries`].
///
/// Entries are kept in recency order, oldest first. Inserting past `capacity` evicts the
/// least recently used entry.
#[derive(Debug, Clone)]
pub struct SeriesCache {
    capacity: usize,
    entries: IndexMap<SeriesKey, Arc<GeneratedSeries>>,
}

impl SeriesCache {
    pub fn new(capacity: usize) -> Result<Self, DataError> {
        if capacity == 0 {
            return Err(DataError::ZeroCapacity);
        }

        Ok(Self {
            capacity,
            entries: IndexMap::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &SeriesKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Fetch the series for `key`, marking it as most recently used.
    pub fn get(&mut self, key: &SeriesKey) -> Option<Arc<GeneratedSeries>> {
        let index = self.entries.get_index_of(key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        debug!(%key, "SeriesCache hit");
        self.entries.get_index(last).map(|(_, series)| Arc::clone(series))
    }

    /// Insert the series for `key`, returning the evicted key if capacity was exceeded.
    pub fn insert(&mut self, key: SeriesKey, series: Arc<GeneratedSeries>) -> Option<SeriesKey> {
        self.entries.shift_remove(&key);
        self.entries.insert(key, series);

        if self.entries.len() <= self.capacity {
            return None;
        }

        let (evicted, _) = self.entries.shift_remove_index(0)?;
        debug!(key = %evicted, capacity = self.capacity, "SeriesCache evicted");
        Some(evicted)
    }

    /// Fetch the series for `key`, generating and caching it on a miss.
    pub fn get_or_generate(
        &mut self,
        key: &SeriesKey,
        generator: &SeriesGenerator,
    ) -> Arc<GeneratedSeries> {
        if let Some(series) = self.get(key) {
            return series;
        }

        let series = Arc::new(generator.generate(key));
        self.insert(key.clone(), Arc::clone(&series));
        series
    }
}

/// Latest series for every symbol seen, across timeframes.
///
/// Entries are only ever inserted or overwritten.
#[derive(Debug, Clone, Default)]
pub struct CoinBook {
    series: FnvHashMap<SmolStr, Arc<GeneratedSeries>>,
}

impl CoinBook {
    pub fn insert(&mut self, symbol: SmolStr, series: Arc<GeneratedSeries>) {
        self.series.insert(symbol, series);
    }

    pub fn get(&self, symbol: &str) -> Option<&Arc<GeneratedSeries>> {
        self.series.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Price series of every recorded symbol, ordered by symbol.
    pub fn series_by_symbol(&self) -> Vec<(SmolStr, Vec<f64>)> {
        let mut series = self
            .series
            .iter()
            .map(|(symbol, series)| (symbol.clone(), series.prices()))
            .collect::<Vec<_>>();
        series.sort_by(|(a, _), (b, _)| a.cmp(b));
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Timeframe, timeframe::LabelFormat};
    use chrono::{TimeZone, Utc};

    fn key(symbol: &str) -> SeriesKey {
        SeriesKey::new(SmolStr::new(symbol), Timeframe::Hour1)
    }

    fn series(price: f64) -> Arc<GeneratedSeries> {
        Arc::new(GeneratedSeries::new(
            vec![crate::PricePoint::new("00:00".to_string(), price, 1)],
            LabelFormat::HourMinute,
        ))
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(SeriesCache::new(0).unwrap_err(), DataError::ZeroCapacity);
    }

    #[test]
    fn test_series_cache_lru_eviction() {
        struct TestCase {
            action: Action,
            expected_evicted: Option<&'static str>,
            expected_len: usize,
        }

        enum Action {
            Insert(&'static str),
            Get(&'static str),
        }

        let mut cache = SeriesCache::new(2).unwrap();

        let cases = vec![
            // TC0: insert into empty cache
            TestCase {
                action: Action::Insert("BTCUSDT"),
                expected_evicted: None,
                expected_len: 1,
            },
            // TC1: fill to capacity
            TestCase {
                action: Action::Insert("ETHUSDT"),
                expected_evicted: None,
                expected_len: 2,
            },
            // TC2: touch BTCUSDT so ETHUSDT becomes least recently used
            TestCase {
                action: Action::Get("BTCUSDT"),
                expected_evicted: None,
                expected_len: 2,
            },
            // TC3: insert past capacity evicts ETHUSDT
            TestCase {
                action: Action::Insert("SOLUSDT"),
                expected_evicted: Some("ETHUSDT"),
                expected_len: 2,
            },
            // TC4: re-insert existing key does not evict
            TestCase {
                action: Action::Insert("SOLUSDT"),
                expected_evicted: None,
                expected_len: 2,
            },
            // TC5: insert past capacity evicts BTCUSDT
            TestCase {
                action: Action::Insert("ADAUSDT"),
                expected_evicted: Some("BTCUSDT"),
                expected_len: 2,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let evicted = match test.action {
                Action::Insert(symbol) => cache.insert(key(symbol), series(1.0)),
                Action::Get(symbol) => {
                    assert!(cache.get(&key(symbol)).is_some(), "TC{index} failed");
                    None
                }
            };

            assert_eq!(evicted, test.expected_evicted.map(key), "TC{index} failed");
            assert_eq!(cache.len(), test.expected_len, "TC{index} failed");
        }
    }

    #[test]
    fn test_get_or_generate_reuses_cached_series() {
        let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let generator = SeriesGenerator::new(1, anchor);
        let mut cache = SeriesCache::new(4).unwrap();

        let first = cache.get_or_generate(&key("BTCUSDT"), &generator);
        let second = cache.get_or_generate(&key("BTCUSDT"), &generator);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_coin_book_overwrites() {
        let mut book = CoinBook::default();
        book.insert(SmolStr::new("ETHUSDT"), series(2.0));
        book.insert(SmolStr::new("BTCUSDT"), series(1.0));
        book.insert(SmolStr::new("ETHUSDT"), series(3.0));

        assert_eq!(book.len(), 2);
        assert_eq!(
            book.series_by_symbol(),
            vec![
                (SmolStr::new("BTCUSDT"), vec![1.0]),
                (SmolStr::new("ETHUSDT"), vec![3.0]),
            ]
        );
    }
}

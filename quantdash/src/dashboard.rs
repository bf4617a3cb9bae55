use crate::{
    config::AnalyticsConfig,
    error::QuantDashError,
    sentiment::{FetchOutcome, SentimentFeed},
};
use futures::future::{Either, ready};
use quantdash_data::{
    CoinBook, PricePoint, SeriesCache, SeriesGenerator, SeriesKey, Timeframe,
    coin::display_name,
    sentiment::{MockSentimentSource, SentimentReading, SentimentSource},
    series::GeneratedSeries,
    timeframe::LabelFormat,
};
use quantdash_forecast::{ForecastInput, ForecastMemo, MacdSnapshot};
use quantdash_risk::{CorrelationEntry, LeadLagProjection, correlation_matrix, lead_lag};
use quantdash_strategy::{BacktestReport, BacktestResult, run_backtest_with, try_run_backtest};
use quantdash_ta::{IndicatorSet, compute_indicators};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::{future::Future, sync::Arc};
use tracing::{debug, info};

/// Everything derived from the selected `(symbol, Timeframe)` at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardSnapshot {
    pub key: SeriesKey,
    /// Display name of the symbol (eg/ "BTC" for "BTCUSDT").
    pub name: String,
    pub points: Vec<PricePoint>,
    pub label_format: LabelFormat,
    pub indicators: IndicatorSet,
    pub backtest: BacktestResult,
    /// Latest sentiment reading, `None` while unavailable or disabled.
    pub sentiment: Option<SentimentReading>,
    pub forecast: Vec<f64>,
    pub correlations: Vec<CorrelationEntry<SmolStr>>,
}

#[derive(Debug, Clone)]
struct ActiveSeries {
    key: SeriesKey,
    series: Arc<GeneratedSeries>,
    prices: Vec<f64>,
    indicators: IndicatorSet,
    backtest: BacktestResult,
}

/// Analytics pipeline behind the dashboard.
///
/// Selecting a `(symbol, Timeframe)` fetches (or generates) its series, records it in the
/// [`CoinBook`] and recomputes indicators and the crossover backtest. Sentiment arrives
/// asynchronously via [`refresh_sentiment`](Self::refresh_sentiment), and
/// [`snapshot`](Self::snapshot) combines everything with a memoized forecast.
#[derive(Debug)]
pub struct Dashboard<Source, R = StdRng> {
    config: AnalyticsConfig,
    generator: SeriesGenerator,
    cache: SeriesCache,
    book: CoinBook,
    feed: Arc<SentimentFeed<Source>>,
    memo: ForecastMemo,
    rng: R,
    active: Option<ActiveSeries>,
}

impl Dashboard<MockSentimentSource> {
    /// Construct a [`Dashboard`] backed by a [`MockSentimentSource`] configured from the
    /// [`AnalyticsConfig`].
    pub fn mock(config: AnalyticsConfig) -> Result<Self, QuantDashError> {
        let source = MockSentimentSource::new(config.series_seed, config.sentiment_latency());
        Self::new(config, source)
    }
}

impl<Source> Dashboard<Source> {
    /// Construct a [`Dashboard`] anchored at the current hour, with the forecast rng
    /// seeded from the [`AnalyticsConfig`].
    pub fn new(config: AnalyticsConfig, source: Source) -> Result<Self, QuantDashError> {
        let generator = SeriesGenerator::now(config.series_seed);
        let rng = StdRng::seed_from_u64(config.forecast_seed);
        Self::with_parts(config, generator, source, rng)
    }
}

impl<Source, R> Dashboard<Source, R> {
    pub fn with_parts(
        config: AnalyticsConfig,
        generator: SeriesGenerator,
        source: Source,
        rng: R,
    ) -> Result<Self, QuantDashError> {
        let cache = SeriesCache::new(config.cache_capacity)?;
        Ok(Self {
            config,
            generator,
            cache,
            book: CoinBook::default(),
            feed: Arc::new(SentimentFeed::new(source)),
            memo: ForecastMemo::default(),
            rng,
            active: None,
        })
    }

    /// Select the `(symbol, Timeframe)` to analyse.
    ///
    /// Returns `false` without recomputing anything if the key is already selected. The
    /// sentiment feed is only re-activated when the symbol changes.
    pub fn select(&mut self, symbol: &str, timeframe: Timeframe) -> bool {
        let key = SeriesKey::new(SmolStr::new(symbol), timeframe);
        if self.active.as_ref().is_some_and(|active| active.key == key) {
            debug!(%key, "Dashboard selection unchanged");
            return false;
        }

        let symbol_changed = self
            .active
            .as_ref()
            .is_none_or(|active| active.key.symbol != key.symbol);

        let series = self.cache.get_or_generate(&key, &self.generator);
        self.book.insert(key.symbol.clone(), Arc::clone(&series));

        let prices = series.prices();
        let indicators = compute_indicators(&prices, &self.config.indicators);
        let backtest = run_backtest_with(&prices, self.config.backtest);

        if symbol_changed {
            self.feed.activate(symbol);
        }

        info!(
            %key,
            points = prices.len(),
            returns = backtest.returns,
            "Dashboard selected"
        );

        self.active = Some(ActiveSeries {
            key,
            series,
            prices,
            indicators,
            backtest,
        });
        true
    }

    /// Parse `timeframe` (eg/ "4H") and [`select`](Self::select).
    pub fn select_str(&mut self, symbol: &str, timeframe: &str) -> Result<bool, QuantDashError> {
        let timeframe = timeframe.parse::<Timeframe>()?;
        Ok(self.select(symbol, timeframe))
    }

    /// Currently selected key.
    pub fn selected(&self) -> Option<&SeriesKey> {
        self.active.as_ref().map(|active| &active.key)
    }

    /// Lead-lag projection of the `low` cap coin from the `big` cap coin, using the latest
    /// series recorded for each. `None` if either symbol has not been selected yet.
    ///
    /// Both series are aligned to the shorter one, and the projected volume starts from
    /// the low cap volume at the last aligned point.
    pub fn lead_lag(&self, big: &str, low: &str) -> Option<LeadLagProjection> {
        let big = self.book.get(big)?;
        let low = self.book.get(low)?;

        let aligned = big.len().min(low.len());
        let low_volume = aligned
            .checked_sub(1)
            .and_then(|last| low.points.get(last))
            .map_or(0, |point| point.volume);

        Some(lead_lag(
            &big.prices(),
            &low.prices(),
            low_volume,
            self.config.lead_lag,
        ))
    }

    /// Full backtest of the selected series, including trades and the cumulative return
    /// curve.
    pub fn backtest_report(&self) -> Result<BacktestReport, QuantDashError> {
        let active = self.active.as_ref().ok_or(QuantDashError::NoSelection)?;
        try_run_backtest(&active.prices, self.config.backtest).map_err(QuantDashError::from)
    }

    pub fn feed(&self) -> &Arc<SentimentFeed<Source>> {
        &self.feed
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn book(&self) -> &CoinBook {
        &self.book
    }

    pub fn cache(&self) -> &SeriesCache {
        &self.cache
    }

    pub fn memo(&self) -> &ForecastMemo {
        &self.memo
    }
}

impl<Source, R> Dashboard<Source, R>
where
    Source: SentimentSource + Send + Sync + 'static,
{
    /// Request fresh sentiment for the selected symbol.
    ///
    /// Resolves immediately to `Applied(None)` if nothing is selected or sentiment is
    /// disabled. The returned future does not borrow the [`Dashboard`], so selection may
    /// change while it is in flight, in which case it resolves to
    /// [`FetchOutcome::Superseded`].
    pub fn refresh_sentiment(&self) -> impl Future<Output = FetchOutcome> + Send + use<Source, R> {
        match &self.active {
            Some(active) if self.config.sentiment_enabled => {
                Either::Left(self.feed.fetch(&active.key.symbol))
            }
            _ => Either::Right(ready(FetchOutcome::Applied(None))),
        }
    }
}

impl<Source, R> Dashboard<Source, R>
where
    R: Rng,
{
    /// Combine the selected series, its indicators and backtest, the current sentiment
    /// and the memoized forecast with the correlation matrix over every recorded coin.
    pub fn snapshot(&mut self) -> Result<DashboardSnapshot, QuantDashError> {
        let active = self.active.as_ref().ok_or(QuantDashError::NoSelection)?;

        let sentiment = if self.config.sentiment_enabled {
            self.feed.reading()
        } else {
            None
        };

        let input = ForecastInput {
            prices: active.prices.clone(),
            sentiment: sentiment.map_or(0.0, |reading| reading.score),
            backtest_returns: active.backtest.returns,
            rsi: active.indicators.latest_rsi(),
            macd: MacdSnapshot::from(active.indicators.macd.latest()),
        };
        let forecast = self
            .memo
            .forecast(&input, active.key.timeframe, &mut self.rng)
            .to_vec();

        let correlations =
            correlation_matrix(&self.book.series_by_symbol(), self.config.correlation_window);

        Ok(DashboardSnapshot {
            key: active.key.clone(),
            name: display_name(&active.key.symbol).to_string(),
            points: active.series.points.clone(),
            label_format: active.series.label_format,
            indicators: active.indicators.clone(),
            backtest: active.backtest,
            sentiment,
            forecast,
            correlations,
        })
    }
}

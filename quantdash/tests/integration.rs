use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use quantdash::{
    AnalyticsConfig, Dashboard, QuantDashError,
    data::{
        SeriesGenerator, Timeframe,
        sentiment::{
            MockSentimentSource, SentimentChannel, SentimentError, SentimentReading,
            SentimentSource,
        },
    },
    forecast::{ForecastInput, MacdSnapshot, forecast},
    sentiment::FetchOutcome,
};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

const FORECAST_SEED: u64 = 11;

#[derive(Debug)]
struct FailingSource;

#[async_trait]
impl SentimentSource for FailingSource {
    async fn fetch_sentiment(&self, symbol: &str) -> Result<SentimentReading, SentimentError> {
        Err(SentimentError::Timeout(symbol.to_string()))
    }
}

#[derive(Debug)]
struct FixedSource(f64);

#[async_trait]
impl SentimentSource for FixedSource {
    async fn fetch_sentiment(&self, _: &str) -> Result<SentimentReading, SentimentError> {
        Ok(SentimentReading::new(self.0, SentimentChannel::Twitter))
    }
}

fn dashboard<Source>(config: AnalyticsConfig, source: Source) -> Dashboard<Source> {
    let generator = SeriesGenerator::new(3, Utc.with_ymd_and_hms(2025, 2, 10, 9, 0, 0).unwrap());
    Dashboard::with_parts(config, generator, source, StdRng::seed_from_u64(FORECAST_SEED)).unwrap()
}

#[tokio::test]
async fn failing_sentiment_falls_back_to_neutral_forecast() {
    let mut dashboard = dashboard(AnalyticsConfig::default(), FailingSource);
    dashboard.select("BTCUSDT", Timeframe::Hour1);

    assert_eq!(dashboard.refresh_sentiment().await, FetchOutcome::Applied(None));

    let snapshot = dashboard.snapshot().unwrap();
    assert_eq!(snapshot.sentiment, None);

    let neutral_sentiment = ForecastInput {
        prices: snapshot.points.iter().map(|point| point.price).collect(),
        sentiment: 0.0,
        backtest_returns: snapshot.backtest.returns,
        rsi: snapshot.indicators.latest_rsi(),
        macd: MacdSnapshot::from(snapshot.indicators.macd.latest()),
    };
    let expected = forecast(
        &neutral_sentiment,
        Timeframe::Hour1.horizon(),
        &mut StdRng::seed_from_u64(FORECAST_SEED),
    );
    assert_eq!(snapshot.forecast, expected);
}

#[tokio::test]
async fn refresh_is_superseded_by_symbol_change() {
    let source = MockSentimentSource::new(5, Duration::from_millis(50));
    let mut dashboard = dashboard(AnalyticsConfig::default(), source);
    dashboard.select("BTCUSDT", Timeframe::Hour1);

    let stale = dashboard.refresh_sentiment();
    dashboard.select("ETHUSDT", Timeframe::Hour1);
    assert_eq!(stale.await, FetchOutcome::Superseded);
    assert_eq!(dashboard.feed().reading(), None);

    let fresh = dashboard.refresh_sentiment().await;
    assert!(matches!(fresh, FetchOutcome::Applied(Some(_))));
    assert_eq!(dashboard.feed().symbol().as_deref(), Some("ETHUSDT"));
}

#[tokio::test]
async fn timeframe_change_keeps_sentiment() {
    let mut dashboard = dashboard(AnalyticsConfig::default(), FixedSource(0.6));
    dashboard.select("SOLUSDT", Timeframe::Hour1);
    dashboard.refresh_sentiment().await;

    dashboard.select("SOLUSDT", Timeframe::Day1);
    let snapshot = dashboard.snapshot().unwrap();
    assert_eq!(snapshot.sentiment.map(|reading| reading.score), Some(0.6));
}

#[tokio::test]
async fn forecast_recomputes_only_when_inputs_change() {
    let mut dashboard = dashboard(AnalyticsConfig::default(), FixedSource(0.6));
    dashboard.select("ETHUSDT", Timeframe::Hour4);

    let first = dashboard.snapshot().unwrap();
    let second = dashboard.snapshot().unwrap();
    assert_eq!(first.forecast, second.forecast);
    assert_eq!(dashboard.memo().computations(), 1);

    dashboard.refresh_sentiment().await;
    dashboard.snapshot().unwrap();
    assert_eq!(dashboard.memo().computations(), 2);

    assert!(!dashboard.select("ETHUSDT", Timeframe::Hour4));
    dashboard.snapshot().unwrap();
    assert_eq!(dashboard.memo().computations(), 2);
}

#[tokio::test]
async fn disabled_sentiment_is_never_fetched() {
    let config = AnalyticsConfig {
        sentiment_enabled: false,
        ..AnalyticsConfig::default()
    };
    let mut dashboard = dashboard(config, FixedSource(0.9));
    dashboard.select("XRPUSDT", Timeframe::Minutes15);

    assert_eq!(dashboard.refresh_sentiment().await, FetchOutcome::Applied(None));
    assert_eq!(dashboard.feed().reading(), None);
    assert_eq!(dashboard.snapshot().unwrap().sentiment, None);
}

#[test]
fn correlations_cover_every_selected_coin() {
    let mut dashboard = dashboard(AnalyticsConfig::default(), FixedSource(0.0));
    for symbol in ["BTCUSDT", "ETHUSDT", "SOLUSDT"] {
        dashboard.select(symbol, Timeframe::Hour1);
    }

    let correlations = dashboard.snapshot().unwrap().correlations;
    assert_eq!(correlations.len(), 3);

    for entry in &correlations {
        assert!((-1.0..=1.0).contains(&entry.correlation), "{entry:?}");
        assert_ne!(entry.first, entry.second);
    }
    for pair in correlations.windows(2) {
        assert!(pair[0].correlation.abs() >= pair[1].correlation.abs());
    }
}

#[test]
fn backtest_report_matches_snapshot() {
    let mut dashboard = dashboard(AnalyticsConfig::default(), FixedSource(0.0));
    dashboard.select("BNBUSDT", Timeframe::Hour1);

    let report = dashboard.backtest_report().unwrap();
    let snapshot = dashboard.snapshot().unwrap();
    assert_eq!(report.result, snapshot.backtest);
    assert_eq!(report.cumulative_returns.len(), report.trades.len() + 1);
}

#[test]
fn lead_lag_projects_low_cap_volume() {
    let mut dashboard = dashboard(AnalyticsConfig::default(), FixedSource(0.0));
    dashboard.select("BTCUSDT", Timeframe::Hour1);
    dashboard.select("DOGEUSDT", Timeframe::Hour1);

    let low_volume = dashboard.book().get("DOGEUSDT").unwrap().last_volume();
    let projection = dashboard.lead_lag("BTCUSDT", "DOGEUSDT").unwrap();
    assert!(projection.projected_volume >= low_volume);
}

#[test]
fn invalid_configuration_is_rejected() {
    let config = AnalyticsConfig {
        cache_capacity: 0,
        ..AnalyticsConfig::default()
    };
    let generator = SeriesGenerator::new(0, Utc::now());
    let result = Dashboard::with_parts(config, generator, FixedSource(0.0), StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(QuantDashError::Data(_))));

    assert!(matches!(
        AnalyticsConfig::from_json_str(r#"{ "correlation_window": -1 }"#),
        Err(_)
    ));
}

#[test]
fn json_logging_captures_pipeline_events() {
    // Only test in this binary to install a global subscriber
    quantdash::logging::init_json_logging();

    let mut dashboard = dashboard(AnalyticsConfig::default(), FixedSource(0.0));
    assert!(dashboard.select("BTCUSDT", Timeframe::Minutes15));
    assert!(!dashboard.select("BTCUSDT", Timeframe::Minutes15));
}

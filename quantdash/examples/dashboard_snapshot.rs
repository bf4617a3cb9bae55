use quantdash::{AnalyticsConfig, Dashboard, data::Timeframe, sentiment::FetchOutcome};
use tracing::info;

const BIG_CAP: &str = "BTCUSDT";
const LOW_CAP: &str = "SOLUSDT";

#[tokio::main]
async fn main() {
    // Initialise Tracing
    quantdash::logging::init_logging();

    // Construct Dashboard with default config and the mock sentiment source
    let mut dashboard = Dashboard::mock(AnalyticsConfig::default()).unwrap();

    // Record both coins in the CoinBook, finishing on the low cap coin
    dashboard.select(BIG_CAP, Timeframe::Hour4);
    dashboard.select(LOW_CAP, Timeframe::Hour4);

    if let FetchOutcome::Applied(Some(reading)) = dashboard.refresh_sentiment().await {
        info!(score = reading.score, trend = %reading.trend, "sentiment");
    }

    let snapshot = dashboard.snapshot().unwrap();
    info!(
        name = %snapshot.name,
        rsi = snapshot.indicators.latest_rsi(),
        returns = snapshot.backtest.returns,
        win_rate = snapshot.backtest.win_rate,
        max_drawdown = snapshot.backtest.max_drawdown,
        forecast = ?snapshot.forecast,
        "snapshot"
    );

    for entry in &snapshot.correlations {
        info!(
            first = %entry.first,
            second = %entry.second,
            correlation = entry.correlation,
            strength = %entry.strength,
            "correlation"
        );
    }

    if let Some(projection) = dashboard.lead_lag(BIG_CAP, LOW_CAP) {
        info!(
            effect = %projection.effect(),
            projected_change = projection.projected_change,
            projected_volume = projection.projected_volume,
            "lead-lag"
        );
    }
}

use quantdash_strategy::{BacktestConfig, BacktestResult, run_backtest, run_backtest_with, try_run_backtest};

#[test]
fn short_series_yields_zero_result() {
    for len in 0..20 {
        let prices: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
        assert_eq!(run_backtest(&prices), BacktestResult::default(), "len {len}");
    }
}

#[test]
fn uptrend_after_flat_period_is_profitable() {
    let mut prices = vec![100.0; 20];
    prices.extend((1..=40).map(|i| 100.0 + i as f64 * 2.0));

    let result = run_backtest(&prices);
    assert!(result.returns > 0.0, "{result:?}");
    assert!(result.win_rate > 0.0, "{result:?}");
    assert_eq!(result.max_drawdown, 0.0);
}

#[test]
fn results_are_rounded_and_drawdown_non_positive() {
    let prices: Vec<f64> = (0..120)
        .map(|i| 1_000.0 + (i as f64 * 0.21).sin() * 80.0 + (i as f64 * 0.05).cos() * 30.0)
        .collect();

    let report = try_run_backtest(&prices, BacktestConfig::default()).unwrap();
    let result = report.result;

    for value in [result.returns, result.win_rate, result.max_drawdown] {
        assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6, "{value}");
    }
    assert!(result.max_drawdown <= 0.0);
    assert!((0.0..=100.0).contains(&result.win_rate));
    assert_eq!(report.cumulative_returns.len(), report.trades.len() + 1);
}

#[test]
fn custom_windows() {
    let mut prices = vec![10.0; 5];
    prices.extend([11.0, 12.0, 13.0, 14.0]);

    let config = BacktestConfig {
        short_period: 2,
        long_period: 4,
    };
    let result = run_backtest_with(&prices, config);
    assert!(result.returns > 0.0);
    assert_eq!(result.win_rate, 100.0);
}

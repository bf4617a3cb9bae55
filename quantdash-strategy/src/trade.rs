use derive_more::Constructor;
use quantdash_ta::patterns::Cross;
use serde::{Deserialize, Serialize};

/// Closed long trade.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct Trade {
    pub entry_index: usize,
    pub exit_index: usize,
    pub entry_price: f64,
    pub exit_price: f64,
    /// Moving average crossover that opened the trade, if entry coincided with one.
    pub entry_cross: Option<Cross>,
}

impl Trade {
    /// Percentage return `(exit - entry) / entry * 100`.
    pub fn return_pct(&self) -> f64 {
        (self.exit_price - self.entry_price) / self.entry_price * 100.0
    }

    pub fn is_win(&self) -> bool {
        self.return_pct() > 0.0
    }
}

/// Percentage of winning trades, or `None` if there are no trades.
pub fn win_rate(trades: &[Trade]) -> Option<f64> {
    if trades.is_empty() {
        return None;
    }

    let wins = trades.iter().filter(|trade| trade.is_win()).count();
    Some(wins as f64 / trades.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(entry_price: f64, exit_price: f64) -> Trade {
        Trade::new(0, 1, entry_price, exit_price, None)
    }

    #[test]
    fn test_return_pct() {
        assert_eq!(trade(100.0, 110.0).return_pct(), 10.0);
        assert_eq!(trade(200.0, 150.0).return_pct(), -25.0);
        assert!(!trade(100.0, 100.0).is_win());
    }

    #[test]
    fn test_win_rate() {
        // no trades
        assert_eq!(win_rate(&[]), None);

        // all winning trades
        assert_eq!(win_rate(&[trade(1.0, 2.0), trade(2.0, 3.0)]), Some(100.0));

        // no winning trades
        assert_eq!(win_rate(&[trade(2.0, 1.0)]), Some(0.0));

        // mixed
        assert_eq!(
            win_rate(&[trade(1.0, 2.0), trade(2.0, 1.0), trade(1.0, 1.0), trade(1.0, 4.0)]),
            Some(50.0)
        );
    }
}

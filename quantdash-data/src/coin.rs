use serde::Serialize;

/// Reference price used for symbols missing from [`COINS`].
pub const FALLBACK_BASE_PRICE: f64 = 84_000.0;

/// Known coin with its reference price.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Coin {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
}

pub static COINS: [Coin; 7] = [
    Coin {
        symbol: "BTCUSDT",
        name: "BTC",
        price: 84_289.6,
    },
    Coin {
        symbol: "ETHUSDT",
        name: "ETH",
        price: 3_189.4,
    },
    Coin {
        symbol: "BNBUSDT",
        name: "BNB",
        price: 589.8,
    },
    Coin {
        symbol: "ADAUSDT",
        name: "ADA",
        price: 0.45,
    },
    Coin {
        symbol: "SOLUSDT",
        name: "SOL",
        price: 165.2,
    },
    Coin {
        symbol: "XRPUSDT",
        name: "XRP",
        price: 0.591,
    },
    Coin {
        symbol: "DOGEUSDT",
        name: "DOGE",
        price: 0.123,
    },
];

/// Large market cap coins that tend to lead the market.
pub const BIG_COINS: [&str; 3] = ["BTCUSDT", "ETHUSDT", "BNBUSDT"];

/// Smaller market cap coins that tend to follow.
pub const LOW_COINS: [&str; 4] = ["ADAUSDT", "SOLUSDT", "XRPUSDT", "DOGEUSDT"];

pub fn find_coin(symbol: &str) -> Option<&'static Coin> {
    COINS.iter().find(|coin| coin.symbol == symbol)
}

/// Reference price of `symbol`, falling back to [`FALLBACK_BASE_PRICE`].
pub fn base_price(symbol: &str) -> f64 {
    find_coin(symbol).map_or(FALLBACK_BASE_PRICE, |coin| coin.price)
}

/// Short display name (eg/ "BTC" for "BTCUSDT"). Unknown symbols are returned as-is.
pub fn display_name(symbol: &str) -> &str {
    find_coin(symbol).map_or(symbol, |coin| coin.name)
}

pub fn is_big_coin(symbol: &str) -> bool {
    BIG_COINS.contains(&symbol)
}

//! Mock dashboard data.
//!
//! Everything here is display data; nothing downstream recomputes it. The
//! generators take an explicit RNG so a seed reproduces the same screen.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub change_pct: f64,
    pub period: &'static str,
}

impl StatCard {
    pub fn is_positive(&self) -> bool {
        self.change_pct >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub amount: f64,
    pub usd_value: f64,
    pub color: (u8, u8, u8),
    pub share_pct: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub label: String,
    pub price: f64,
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    pub current_price: f64,
    pub change_value: f64,
    pub change_pct: f64,
    pub high: f64,
    pub low: f64,
    pub total_balance: f64,
    pub profit: f64,
    pub loss: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CryptoStat {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: u64,
    pub change_pct: f64,
    pub sparkline: Vec<f64>,
}

pub const BASE_PRICE: f64 = 6600.0;
pub const BASE_VOLATILITY: f64 = 30.0;

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Invested",
            value: "$2,390.68",
            icon: "$",
            change_pct: 6.24,
            period: "vs. previous month",
        },
        StatCard {
            title: "Total Change",
            value: "$19,523.25",
            icon: "↗",
            change_pct: 3.67,
            period: "since last week",
        },
        StatCard {
            title: "Day Change",
            value: "$14,799.44",
            icon: "↘",
            change_pct: -4.80,
            period: "since yesterday",
        },
        StatCard {
            title: "Total Assets",
            value: "12",
            icon: "▣",
            change_pct: 1.5,
            period: "crypto assets",
        },
    ]
}

pub fn portfolio() -> Vec<Asset> {
    vec![
        Asset {
            id: "btc",
            name: "Bitcoin",
            symbol: "BTC",
            amount: 0.00584875,
            usd_value: 19405.12,
            color: (247, 147, 26),
            share_pct: 35,
        },
        Asset {
            id: "eth",
            name: "Ethereum",
            symbol: "ETH",
            amount: 2.25842108,
            usd_value: 40552.18,
            color: (98, 126, 234),
            share_pct: 40,
        },
        Asset {
            id: "ltc",
            name: "Litecoin",
            symbol: "LTC",
            amount: 10.58963217,
            usd_value: 15824.58,
            color: (191, 187, 187),
            share_pct: 15,
        },
        Asset {
            id: "dash",
            name: "Dash",
            symbol: "DASH",
            amount: 204.28565885,
            usd_value: 30635.84,
            color: (0, 141, 228),
            share_pct: 10,
        },
    ]
}

pub fn portfolio_total(assets: &[Asset]) -> f64 {
    assets.iter().map(|asset| asset.usd_value).sum()
}

pub fn initial_summary() -> MarketSummary {
    MarketSummary {
        current_price: 0.014756,
        change_value: 75.69,
        change_pct: 1.99,
        high: 0.014578,
        low: 0.0175489,
        total_balance: 72800.0,
        profit: 49700.0,
        loss: 23100.0,
    }
}

fn series_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 10, 6)
        .and_then(|date| date.and_hms_opt(23, 0, 0))
        .unwrap_or_default()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bounded random walk over one day. Prices stay within ±20% of `base`;
/// roughly every sixth label carries the date.
pub fn price_series<R: Rng>(rng: &mut R, points: usize, base: f64, volatility: f64) -> Vec<PricePoint> {
    let step = Duration::minutes((24 * 60 / points.max(1)) as i64);
    let date_every = (points / 6).max(1);
    let mut at = series_start();
    let mut price = base;
    let mut out = Vec::with_capacity(points);
    for i in 0..points {
        price += (rng.random::<f64>() - 0.5) * 2.0 * volatility;
        price = price.clamp(base * 0.8, base * 1.2);
        let label = if i % date_every == 0 {
            at.format("%H:%M %-d %b").to_string()
        } else {
            at.format("%H:%M").to_string()
        };
        out.push(PricePoint {
            label,
            price: round2(price),
            high: round2(price * (1.0 + rng.random::<f64>() * 0.01)),
            low: round2(price * (1.0 - rng.random::<f64>() * 0.01)),
        });
        at += step;
    }
    out
}

/// Random walk floored at zero.
pub fn sparkline<R: Rng>(rng: &mut R, points: usize, base: f64, volatility: f64) -> Vec<f64> {
    let mut value = base;
    (0..points)
        .map(|_| {
            value += (rng.random::<f64>() - 0.5) * 2.0 * volatility;
            value = value.max(0.0);
            round2(value)
        })
        .collect()
}

pub fn crypto_stats<R: Rng>(rng: &mut R, points: usize) -> Vec<CryptoStat> {
    let specs: [(&str, &str, &str, u64, f64, f64, f64); 5] = [
        ("bitcoin", "Bitcoin", "BTC", 1_523_647, 13.11, 50.0, 15.0),
        ("litecoin", "Litecoin", "LTC", 2_145_687, 15.08, 30.0, 10.0),
        ("ethereum", "Ethereum", "ETH", 3_312_870, -8.02, 70.0, 20.0),
        ("binance", "Binance", "BNB", 1_820_045, 9.21, 40.0, 12.0),
        ("dash", "Dash", "DASH", 9_458_180, -2.35, 25.0, 8.0),
    ];
    specs
        .into_iter()
        .map(|(id, name, symbol, value, change_pct, base, volatility)| CryptoStat {
            id,
            name,
            symbol,
            value,
            change_pct,
            sparkline: sparkline(rng, points, base, volatility),
        })
        .collect()
}

//! Content region state: selectors and the mock data they display.

use crate::config::MockConfig;
use crate::mock::{self, Asset, CryptoStat, MarketSummary, PricePoint, StatCard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartInterval {
    OneHour,
    SevenDays,
    OneMonth,
    OneYear,
    All,
}

impl ChartInterval {
    pub fn all() -> &'static [ChartInterval] {
        &[
            ChartInterval::OneHour,
            ChartInterval::SevenDays,
            ChartInterval::OneMonth,
            ChartInterval::OneYear,
            ChartInterval::All,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartInterval::OneHour => "1H",
            ChartInterval::SevenDays => "7D",
            ChartInterval::OneMonth => "1M",
            ChartInterval::OneYear => "1Y",
            ChartInterval::All => "ALL",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|i| i == self).unwrap_or(0)
    }

    pub fn next(&self) -> ChartInterval {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> ChartInterval {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCurrency {
    Btc,
    Eth,
    Usd,
}

impl DisplayCurrency {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayCurrency::Btc => "BTC",
            DisplayCurrency::Eth => "ETH",
            DisplayCurrency::Usd => "USD",
        }
    }

    pub fn next(&self) -> DisplayCurrency {
        match self {
            DisplayCurrency::Btc => DisplayCurrency::Eth,
            DisplayCurrency::Eth => DisplayCurrency::Usd,
            DisplayCurrency::Usd => DisplayCurrency::Btc,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketState {
    pub interval: ChartInterval,
    pub series: Vec<PricePoint>,
    pub summary: MarketSummary,
}

#[derive(Debug, Clone)]
pub struct DashboardContent {
    pub stats: Vec<StatCard>,
    pub portfolio: Vec<Asset>,
    pub portfolio_total: f64,
    pub currency: DisplayCurrency,
    pub market: MarketState,
    pub crypto_stats: Vec<CryptoStat>,
    chart_points: usize,
    rng: StdRng,
}

impl DashboardContent {
    pub fn new(config: &MockConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let series = mock::price_series(
            &mut rng,
            config.chart_points,
            mock::BASE_PRICE,
            mock::BASE_VOLATILITY,
        );
        let crypto_stats = mock::crypto_stats(&mut rng, config.sparkline_points);
        let portfolio = mock::portfolio();
        Self {
            stats: mock::stat_cards(),
            portfolio_total: mock::portfolio_total(&portfolio),
            portfolio,
            currency: DisplayCurrency::Btc,
            market: MarketState {
                interval: ChartInterval::All,
                series,
                summary: mock::initial_summary(),
            },
            crypto_stats,
            chart_points: config.chart_points,
            rng,
        }
    }

    /// Switches the chart interval and regenerates the series around a
    /// jittered base price.
    pub fn select_interval(&mut self, interval: ChartInterval) {
        self.market.interval = interval;
        let base = mock::BASE_PRICE + (self.rng.random::<f64>() - 0.5) * 500.0;
        let volatility = mock::BASE_VOLATILITY + (self.rng.random::<f64>() - 0.5) * 10.0;
        self.market.series = mock::price_series(&mut self.rng, self.chart_points, base, volatility);
        if let Some(last) = self.market.series.last() {
            self.market.summary.current_price =
                last.price / 100_000.0 + self.rng.random::<f64>() * 0.001;
        }
        tracing::debug!(interval = interval.label(), base, "market series regenerated");
    }

    pub fn next_interval(&mut self) {
        self.select_interval(self.market.interval.next());
    }

    pub fn previous_interval(&mut self) {
        self.select_interval(self.market.interval.previous());
    }

    pub fn next_currency(&mut self) {
        self.currency = self.currency.next();
    }

    /// `(min, max)` of the price series, padded for the chart axis.
    pub fn price_bounds(&self) -> (f64, f64) {
        let (min, max) = self
            .market
            .series
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.price), hi.max(p.price)));
        if min > max {
            (0.0, 1.0)
        } else {
            (min - 20.0, max + 20.0)
        }
    }
}

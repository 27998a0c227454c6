use crate::api::data_source::DataSource;
use crate::coin_helpers::coin::{Coin, Delta, Links, Price};
use crate::coin_helpers::currency::Currency;
use crate::coin_helpers::helper_functions::date_time_from_timestamp_millis;
use crate::coin_helpers::price_series::{PriceSeries, PriceSeriesKind};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::time::{sleep, Duration};

/// In-process stand-in for the remote API, with per-endpoint fetch counters
/// and switchable failures.
pub struct DataSourceStub {
    coins: Mutex<Vec<Coin>>,
    currencies: Mutex<Vec<Currency>>,
    pub coin_fetches: AtomicUsize,
    pub currency_fetches: AtomicUsize,
    pub series_fetches: AtomicUsize,
    pub download_fetches: AtomicUsize,
    pub fail_coins: AtomicBool,
    pub fail_series: AtomicBool,
    pub fail_downloads: AtomicBool,
    pub fetch_delay_ms: u64,
}

impl DataSourceStub {
    pub fn new(coins: Vec<Coin>, currencies: Vec<Currency>) -> Self {
        Self::with_delay(coins, currencies, 0)
    }

    pub fn with_delay(coins: Vec<Coin>, currencies: Vec<Currency>, fetch_delay_ms: u64) -> Self {
        Self {
            coins: Mutex::new(coins),
            currencies: Mutex::new(currencies),
            coin_fetches: AtomicUsize::new(0),
            currency_fetches: AtomicUsize::new(0),
            series_fetches: AtomicUsize::new(0),
            download_fetches: AtomicUsize::new(0),
            fail_coins: AtomicBool::new(false),
            fail_series: AtomicBool::new(false),
            fail_downloads: AtomicBool::new(false),
            fetch_delay_ms,
        }
    }

    pub fn set_coins(&self, coins: Vec<Coin>) {
        *self.coins.lock().unwrap() = coins;
    }

    async fn delay(&self) {
        if self.fetch_delay_ms > 0 {
            sleep(Duration::from_millis(self.fetch_delay_ms)).await;
        }
    }
}

#[async_trait]
impl DataSource for DataSourceStub {
    async fn coins(&self) -> Result<Vec<Coin>, String> {
        self.coin_fetches.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if self.fail_coins.load(Ordering::SeqCst) {
            return Err("Stubbed coin list failure".to_string());
        }

        Ok(self.coins.lock().unwrap().clone())
    }

    async fn currencies(&self) -> Result<Vec<Currency>, String> {
        self.currency_fetches.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        Ok(self.currencies.lock().unwrap().clone())
    }

    async fn price_series(
        &self,
        slug: &str,
    ) -> Result<HashMap<PriceSeriesKind, PriceSeries>, String> {
        self.series_fetches.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if self.fail_series.load(Ordering::SeqCst) {
            return Err("Stubbed historical prices failure".to_string());
        }

        // The spot series carries one slug-dependent point so tests can tell
        // series of different coins apart.
        let mut series_by_kind: HashMap<PriceSeriesKind, PriceSeries> = PriceSeriesKind::get_all()
            .into_iter()
            .map(|kind| (kind, PriceSeries::empty(kind)))
            .collect();
        series_by_kind
            .get_mut(&PriceSeriesKind::Price)
            .unwrap()
            .points
            .push((
                date_time_from_timestamp_millis(1_514_764_800_000),
                slug.len() as f64,
            ));

        Ok(series_by_kind)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, String> {
        self.download_fetches.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if self.fail_downloads.load(Ordering::SeqCst) {
            return Err("Stubbed download failure".to_string());
        }

        Ok(url.as_bytes().to_vec())
    }
}

pub fn make_coin(symbol: &str, slug: &str, usd: f64) -> Coin {
    Coin::new(
        slug.len() as u32,
        symbol.to_string(),
        slug.to_string(),
        slug.to_string(),
        None,
        Price::new(usd, usd / 50_000.0),
        Delta::default(),
        17_000_000,
        21_000_000,
        Links::default(),
    )
}

pub fn make_currency(code: &str, rate: f64) -> Currency {
    Currency::new(code.to_string(), code.to_string(), rate)
}

use crate::api::data_source::DataSource;
use crate::cache::fetch_once::FetchOnce;
use crate::coin_helpers::coin::{Coin, Price};
use crate::coin_helpers::currency::Currency;
use crate::coin_helpers::number_format::format_f64;
use crate::coin_helpers::price_series::{PriceSeries, PriceSeriesKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub type CoinsBySymbol = Arc<HashMap<String, Coin>>;
pub type CurrenciesByCode = Arc<HashMap<String, Currency>>;
pub type SeriesByKind = Arc<HashMap<PriceSeriesKind, PriceSeries>>;

/// Process-lifetime cache over the remote [`DataSource`].
///
/// Each collection is fetched at most once per generation, shared between
/// concurrent first callers, and kept until [`RemoteDataCache::invalidate`]
/// replaces the whole generation. Fetch failures are absorbed here: consumers
/// get an empty collection and the error goes to the log.
pub struct RemoteDataCache {
    source: Arc<dyn DataSource + Send + Sync>,
    generation: RwLock<Arc<CacheGeneration>>,
    generation_counter: AtomicU64,
}

/// The memo slots alive between two invalidations. A fetch holds the
/// generation it was issued against, so a fetch that outlives an
/// `invalidate()` completes into the orphaned generation and is dropped with
/// it, never observed by the new one.
struct CacheGeneration {
    number: u64,
    coins: FetchOnce<CoinsBySymbol>,
    currencies: FetchOnce<CurrenciesByCode>,
    prices: Mutex<HashMap<String, Arc<FetchOnce<SeriesByKind>>>>,
    downloads: Mutex<HashMap<String, Arc<FetchOnce<Vec<u8>>>>>,
}

impl CacheGeneration {
    fn new(number: u64) -> Self {
        Self {
            number,
            coins: FetchOnce::new(),
            currencies: FetchOnce::new(),
            prices: Mutex::new(HashMap::new()),
            downloads: Mutex::new(HashMap::new()),
        }
    }
}

impl RemoteDataCache {
    pub fn new(source: Arc<dyn DataSource + Send + Sync>) -> Self {
        Self {
            source,
            generation: RwLock::new(Arc::new(CacheGeneration::new(0))),
            generation_counter: AtomicU64::new(0),
        }
    }

    async fn current_generation(&self) -> Arc<CacheGeneration> {
        Arc::clone(&*self.generation.read().await)
    }

    pub async fn generation_number(&self) -> u64 {
        self.generation.read().await.number
    }

    /// All coins, keyed by symbol. Memoized for the generation.
    pub async fn coins(&self) -> CoinsBySymbol {
        let generation = self.current_generation().await;
        let generation_number = generation.number;
        let source = Arc::clone(&self.source);

        generation
            .coins
            .get_or_fetch(move || async move {
                match source.coins().await {
                    Ok(coins) => Arc::new(
                        coins
                            .into_iter()
                            .map(|coin| (coin.symbol().to_string(), coin))
                            .collect(),
                    ),
                    Err(e) => {
                        error!(
                            "Coin list fetch failed (generation {}): {}",
                            generation_number, e
                        );

                        Arc::new(HashMap::new())
                    }
                }
            })
            .await
    }

    /// All currencies, keyed by code. Memoized for the generation.
    pub async fn currencies(&self) -> CurrenciesByCode {
        let generation = self.current_generation().await;
        let generation_number = generation.number;
        let source = Arc::clone(&self.source);

        generation
            .currencies
            .get_or_fetch(move || async move {
                match source.currencies().await {
                    Ok(currencies) => Arc::new(
                        currencies
                            .into_iter()
                            .map(|currency| (currency.code.clone(), currency))
                            .collect(),
                    ),
                    Err(e) => {
                        error!(
                            "Currency list fetch failed (generation {}): {}",
                            generation_number, e
                        );

                        Arc::new(HashMap::new())
                    }
                }
            })
            .await
    }

    /// The historical series for one coin slug. Memoized per slug; a failed
    /// fetch memoizes empty series for the rest of the generation.
    pub async fn price_series(&self, slug: &str) -> SeriesByKind {
        let generation = self.current_generation().await;
        let generation_number = generation.number;
        let source = Arc::clone(&self.source);
        let slug_2 = slug.to_string();

        let slot = {
            let mut prices = generation.prices.lock().await;

            Arc::clone(prices.entry(slug.to_string()).or_default())
        };

        slot.get_or_fetch(move || async move {
            match source.price_series(&slug_2).await {
                Ok(series_by_kind) => Arc::new(series_by_kind),
                Err(e) => {
                    error!(
                        "Historical prices fetch failed for {} (generation {}): {}",
                        slug_2, generation_number, e
                    );

                    Arc::new(
                        PriceSeriesKind::get_all()
                            .into_iter()
                            .map(|kind| (kind, PriceSeries::empty(kind)))
                            .collect(),
                    )
                }
            }
        })
        .await
    }

    /// Raw bytes for an arbitrary URL, memoized per URL. A failed download is
    /// a miss, not a memoized failure: the next access retries.
    pub async fn download(&self, url: &str) -> Option<Vec<u8>> {
        let generation = self.current_generation().await;
        let source = Arc::clone(&self.source);
        let url_2 = url.to_string();

        let slot = {
            let mut downloads = generation.downloads.lock().await;

            Arc::clone(downloads.entry(url.to_string()).or_default())
        };

        match slot
            .get_or_try_fetch(move || async move { source.download(&url_2).await })
            .await
        {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Download failed, will retry on next access: {}", e);

                None
            }
        }
    }

    /// The USD to GBP exchange rate, or 0.0 while currencies are unavailable.
    pub async fn gbp_rate(&self) -> f64 {
        self.currencies()
            .await
            .get("GBP")
            .map(|currency| currency.rate)
            .unwrap_or(0.0)
    }

    /// A price converted to GBP and formatted with its currency symbol.
    pub async fn gbp_price(&self, price: &Price) -> String {
        "£ ".to_string() + &format_f64(price.converted(self.gbp_rate().await))
    }

    /// Discard every memo slot at once by replacing the generation. Fetches
    /// already in flight keep their old generation and cannot pollute the new
    /// one.
    pub async fn invalidate(&self) {
        let number = self.generation_counter.fetch_add(1, Ordering::SeqCst) + 1;

        let mut generation = self.generation.write().await;
        *generation = Arc::new(CacheGeneration::new(number));

        info!("Cache invalidated, generation {}", number);
    }
}

use crate::coin_helpers::coin::Coin;
use crate::coin_helpers::currency::Currency;
use crate::coin_helpers::price_series::{PriceSeries, PriceSeriesKind};
use async_trait::async_trait;
use std::collections::HashMap;

/// The remote collaborator serving coin data. [`RemoteDataCache`] performs at
/// most one call per method per cache generation; everything behind this
/// trait is uncached.
///
/// [`RemoteDataCache`]: crate::cache::remote_data_cache::RemoteDataCache
#[async_trait]
pub trait DataSource {
    async fn coins(&self) -> Result<Vec<Coin>, String>;

    async fn currencies(&self) -> Result<Vec<Currency>, String>;

    async fn price_series(
        &self,
        slug: &str,
    ) -> Result<HashMap<PriceSeriesKind, PriceSeries>, String>;

    async fn download(&self, url: &str) -> Result<Vec<u8>, String>;
}

use crate::coin_helpers::number_format::format_f64;

/// A single coin from the coin list endpoint.
///
/// The endpoint returns more attributes than the tracker needs, so only the
/// useful ones are kept. Identity fields are fixed at construction; only
/// [`Coin::price`] and [`Coin::delta`] change when the coin is refreshed, via
/// [`Coin::update_market_data`].
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    /// The server-side id for the coin. Not sequential, but unique across all coins.
    id: u32,
    /// The ticker symbol, usually 3 or 4 characters. Unique across all coins.
    symbol: String,
    name: String,
    /// The coin's canonical name as a single lowercase word.
    slug: String,
    description: Option<String>,
    /// The latest price of the coin. Replaced wholesale on refresh.
    pub price: Price,
    /// The latest changes in price over recent periods. Replaced wholesale on refresh.
    pub delta: Delta,
    /// The number of coins in circulation.
    supply: u64,
    /// The total number of coins which could ever be made available,
    /// or 0 if the supply is unlimited.
    total: u64,
    links: Links,
}

impl Coin {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        symbol: String,
        name: String,
        slug: String,
        description: Option<String>,
        price: Price,
        delta: Delta,
        supply: u64,
        total: u64,
        links: Links,
    ) -> Self {
        Self {
            id,
            symbol,
            name,
            slug,
            description,
            price,
            delta,
            supply,
            total,
            links,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn supply(&self) -> u64 {
        self.supply
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    /// A total of 0 means the supply has no cap.
    pub fn has_unlimited_supply(&self) -> bool {
        self.total == 0
    }

    /// The full URL of the coin's logo on the API host.
    pub fn logo_path(&self, base_url: &str) -> String {
        format!(
            "{}uploads/production/coin/icon/{}/{}.png",
            base_url, self.id, self.slug
        )
    }

    /// Replace the market data without re-identifying the coin.
    pub fn update_market_data(&mut self, price: Price, delta: Delta) {
        self.price = price;
        self.delta = delta;
    }
}

/// The price of a coin in its supported denominations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Price {
    /// The present value of the coin in USD.
    pub usd: f64,
    /// The present value of the coin in BTC.
    pub btc: f64,
}

impl Price {
    pub fn new(usd: f64, btc: f64) -> Self {
        Self { usd, btc }
    }

    /// The USD value formatted with its currency symbol.
    pub fn usd_price(&self) -> String {
        "$ ".to_string() + &format_f64(self.usd)
    }

    /// The BTC value formatted like [`Price::usd_price`].
    pub fn btc_price(&self) -> String {
        "Ḇ ".to_string() + &format_f64(self.btc)
    }

    /// The USD value converted at the given exchange rate.
    pub fn converted(&self, rate: f64) -> f64 {
        self.usd * rate
    }
}

/// Recent changes in a coin's price and related metrics. Each field pairs the
/// percentage change over the period with the value the change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    /// Change in value over the past hour: (percent, points).
    pub hour: (f64, f64),
    /// Change in value over the past 24 hours: (percent, points).
    pub day: (f64, f64),
    /// Change in value over the past 7 days: (percent, points).
    pub week: (f64, f64),
    /// Market capitalisation: (percent change over 24h, USD).
    pub cap: (f64, u64),
    /// Transaction volume over the past 24 hours: (percent change, USD).
    pub vol: (f64, u64),
    /// Dominance: (percent change over 24h, current 1-indexed rank).
    pub dom: (f64, u32),
}

/// Associated external resources for a coin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Links {
    /// The main website for the coin.
    pub website: Option<String>,
    /// The coin's whitepaper, usually a PDF.
    pub whitepaper: Option<String>,
}

impl Links {
    /// Build links from raw wire values, treating blank strings as absent.
    pub fn from_raw(website: Option<String>, whitepaper: Option<String>) -> Self {
        Self {
            website: website.filter(|v| !v.trim().is_empty()),
            whitepaper: whitepaper.filter(|v| !v.trim().is_empty()),
        }
    }
}

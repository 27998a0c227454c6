use chrono::{DateTime, Utc};

/// The named historical series available for a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceSeriesKind {
    /// Spot price in USD.
    Price,
    /// BTC-equivalent price.
    Bitcoin,
    /// Market capitalisation in USD.
    Cap,
}

impl PriceSeriesKind {
    pub fn get_all() -> [Self; 3] {
        [Self::Price, Self::Bitcoin, Self::Cap]
    }

    /// The key of this series in the historical prices payload.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Price => "value_usd",
            Self::Bitcoin => "price_btc",
            Self::Cap => "market_cap_usd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Bitcoin => "Bitcoin",
            Self::Cap => "Cap",
        }
    }
}

/// One historical series: (timestamp, value) points over a bounded window.
/// A series whose data could not be fetched or parsed has no points.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub kind: PriceSeriesKind,
    pub points: Vec<(DateTime<Utc>, f64)>,
}

impl PriceSeries {
    pub fn empty(kind: PriceSeriesKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

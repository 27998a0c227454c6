use crate::coin_helpers::coin::{Coin, Delta, Links, Price};

/// Envelope of the coin list endpoint: a `data` array of records, each with a
/// string `id` and an `attributes` object keyed in kebab-case.
#[derive(Deserialize)]
struct CoinsResponse {
    data: Vec<CoinRecord>,
}

#[derive(Deserialize)]
struct CoinRecord {
    id: String,
    attributes: CoinAttributes,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CoinAttributes {
    symbol: String,
    /// The display name arrives under "currency".
    currency: String,
    slug: String,
    #[serde(default)]
    description: Option<String>,
    price_usd: f64,
    price_btc: f64,
    percent_change_1h: f64,
    point_change_1h: f64,
    percent_change_24h: f64,
    point_change_24h: f64,
    percent_change_7d: f64,
    point_change_7d: f64,
    market_cap_percent_change: f64,
    market_cap_usd: f64,
    volume_percent_change: f64,
    volume_24h_usd: f64,
    dominance_percent_change: f64,
    rank: f64,
    available_supply: f64,
    max_supply: f64,
    #[serde(default)]
    links: LinkRecord,
}

#[derive(Deserialize, Default)]
struct LinkRecord {
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    whitepaper: Option<String>,
}

/// Parse the coin list body. A payload that does not match the expected shape
/// is an error; absorbing it into an empty list is the cache's decision, not
/// this layer's.
pub fn parse_coins(body: &str) -> Result<Vec<Coin>, String> {
    let response: CoinsResponse =
        serde_json::from_str(body).map_err(|e| format!("Coin list shape mismatch: {}", e))?;

    let mut coins = Vec::new();

    for record in response.data {
        let id = record
            .id
            .parse()
            .map_err(|e| format!("Bad coin id {:?}: {}", record.id, e))?;
        let attributes = record.attributes;

        coins.push(Coin::new(
            id,
            attributes.symbol,
            attributes.currency,
            attributes.slug,
            attributes.description,
            Price::new(attributes.price_usd, attributes.price_btc),
            Delta {
                hour: (attributes.percent_change_1h, attributes.point_change_1h),
                day: (attributes.percent_change_24h, attributes.point_change_24h),
                week: (attributes.percent_change_7d, attributes.point_change_7d),
                cap: (
                    attributes.market_cap_percent_change,
                    attributes.market_cap_usd as u64,
                ),
                vol: (
                    attributes.volume_percent_change,
                    attributes.volume_24h_usd as u64,
                ),
                dom: (attributes.dominance_percent_change, attributes.rank as u32),
            },
            attributes.available_supply as u64,
            attributes.max_supply as u64,
            Links::from_raw(attributes.links.website, attributes.links.whitepaper),
        ));
    }

    Ok(coins)
}

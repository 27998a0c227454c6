use serde_json::json;

/// A coin list body with one complete record, shaped like the live endpoint.
pub fn coins_body() -> String {
    json!({
        "data": [
            {
                "id": "1",
                "attributes": {
                    "symbol": "BTC",
                    "currency": "Bitcoin",
                    "slug": "bitcoin",
                    "description": "Digital gold",
                    "price-usd": 50_000.0,
                    "price-btc": 1.0,
                    "percent-change-1h": 0.5,
                    "point-change-1h": 250.0,
                    "percent-change-24h": -1.25,
                    "point-change-24h": -625.0,
                    "percent-change-7d": 7.5,
                    "point-change-7d": 3_500.0,
                    "market-cap-percent-change": 2.0,
                    "market-cap-usd": 850_000_000_000.0,
                    "volume-percent-change": -3.0,
                    "volume-24h-usd": 35_000_000_000.0,
                    "dominance-percent-change": 0.1,
                    "rank": 1.0,
                    "available-supply": 17_000_000.0,
                    "max-supply": 21_000_000.0,
                    "links": {
                        "website": "https://bitcoin.org",
                        "whitepaper": ""
                    }
                }
            }
        ]
    })
    .to_string()
}

pub fn currencies_body() -> String {
    json!({
        "currencies": [
            { "code": "GBP", "full_name": "British Pound", "exchange_rate": 0.5 },
            { "code": "EUR", "full_name": "Euro", "exchange_rate": 0.9 }
        ]
    })
    .to_string()
}

/// A historical prices body with two points per series.
pub fn prices_body() -> String {
    json!({
        "value_usd": [
            [1_514_764_800_000.0, 13_000.0],
            [1_514_851_200_000.0, 14_000.0]
        ],
        "price_btc": [
            [1_514_764_800_000.0, 1.0],
            [1_514_851_200_000.0, 1.0]
        ],
        "market_cap_usd": [
            [1_514_764_800_000.0, 220_000_000_000.0],
            [1_514_851_200_000.0, 240_000_000_000.0]
        ]
    })
    .to_string()
}

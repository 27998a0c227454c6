use crate::api::coins::parse_coins;
use crate::api::currencies::parse_currencies;
use crate::api::price_series::parse_price_series;
use crate::coin_helpers::helper_functions::date_time_from_timestamp_millis;
use crate::coin_helpers::price_series::PriceSeriesKind;
use crate::test::json_samples::{coins_body, currencies_body, prices_body};
use serde_json::json;

#[test]
fn parse_a_complete_coin_record() {
    let coins = parse_coins(&coins_body()).unwrap();

    assert_eq!(coins.len(), 1);

    let coin = &coins[0];
    assert_eq!(coin.id(), 1);
    assert_eq!(coin.symbol(), "BTC");
    assert_eq!(coin.name(), "Bitcoin");
    assert_eq!(coin.slug(), "bitcoin");
    assert_eq!(coin.description(), Some("Digital gold"));
    assert_eq!(coin.price.usd, 50_000.0);
    assert_eq!(coin.price.btc, 1.0);
    assert_eq!(coin.delta.hour, (0.5, 250.0));
    assert_eq!(coin.delta.day, (-1.25, -625.0));
    assert_eq!(coin.delta.week, (7.5, 3_500.0));
    assert_eq!(coin.delta.cap, (2.0, 850_000_000_000));
    assert_eq!(coin.delta.vol, (-3.0, 35_000_000_000));
    assert_eq!(coin.delta.dom, (0.1, 1));
    assert_eq!(coin.supply(), 17_000_000);
    assert_eq!(coin.total(), 21_000_000);
    assert_eq!(coin.links().website.as_deref(), Some("https://bitcoin.org"));
    // A blank link is absent, not an empty string
    assert_eq!(coin.links().whitepaper, None);
}

#[test]
fn coin_list_without_the_data_key_is_an_error() {
    assert!(parse_coins(r#"{"error": "maintenance"}"#).is_err());
}

#[test]
fn coin_record_with_a_missing_attribute_is_an_error() {
    let body = json!({
        "data": [
            { "id": "1", "attributes": { "symbol": "BTC" } }
        ]
    })
    .to_string();

    assert!(parse_coins(&body).is_err());
}

#[test]
fn coin_record_with_a_non_numeric_id_is_an_error() {
    let body = coins_body().replace(r#""id":"1""#, r#""id":"one""#);

    assert!(parse_coins(&body).is_err());
}

#[test]
fn coin_list_that_is_not_json_is_an_error() {
    assert!(parse_coins("<html>502</html>").is_err());
}

#[test]
fn parse_the_currency_list() {
    let currencies = parse_currencies(&currencies_body()).unwrap();

    assert_eq!(currencies.len(), 2);
    assert_eq!(currencies[0].code, "GBP");
    assert_eq!(currencies[0].name, "British Pound");
    assert_eq!(currencies[0].rate, 0.5);
}

#[test]
fn currency_list_without_the_currencies_key_is_an_error() {
    assert!(parse_currencies("{}").is_err());
}

#[test]
fn parse_all_three_price_series() {
    let series_by_kind = parse_price_series(&prices_body()).unwrap();

    for kind in PriceSeriesKind::get_all() {
        assert_eq!(series_by_kind.get(&kind).unwrap().points.len(), 2);
    }

    let spot = series_by_kind.get(&PriceSeriesKind::Price).unwrap();
    assert_eq!(
        spot.points[0],
        (date_time_from_timestamp_millis(1_514_764_800_000), 13_000.0)
    );
    assert_eq!(
        spot.points[1],
        (date_time_from_timestamp_millis(1_514_851_200_000), 14_000.0)
    );
}

#[test]
fn a_missing_series_degrades_to_no_points() {
    let body = json!({
        "value_usd": [[1_514_764_800_000.0, 13_000.0]]
    })
    .to_string();

    let series_by_kind = parse_price_series(&body).unwrap();

    assert_eq!(
        series_by_kind
            .get(&PriceSeriesKind::Price)
            .unwrap()
            .points
            .len(),
        1
    );
    assert!(series_by_kind
        .get(&PriceSeriesKind::Bitcoin)
        .unwrap()
        .is_empty());
    assert!(series_by_kind.get(&PriceSeriesKind::Cap).unwrap().is_empty());
}

#[test]
fn a_malformed_series_degrades_to_no_points() {
    let body = json!({
        "value_usd": [[1_514_764_800_000.0, 13_000.0]],
        "price_btc": [["not", "numbers"]],
        "market_cap_usd": "nonsense"
    })
    .to_string();

    let series_by_kind = parse_price_series(&body).unwrap();

    assert!(series_by_kind
        .get(&PriceSeriesKind::Bitcoin)
        .unwrap()
        .is_empty());
    assert!(series_by_kind.get(&PriceSeriesKind::Cap).unwrap().is_empty());
}

#[test]
fn a_non_object_prices_payload_is_an_error() {
    assert!(parse_price_series("[]").is_err());
    assert!(parse_price_series("null").is_err());
}

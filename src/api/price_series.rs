use crate::coin_helpers::helper_functions::date_time_from_timestamp_millis;
use crate::coin_helpers::price_series::{PriceSeries, PriceSeriesKind};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Parse the historical prices body for one coin. The payload is an object
/// holding one array of `[timestamp_millis, value]` points per series key; a
/// series which is missing or malformed degrades to one with no points, but a
/// body which is not an object at all is an error.
pub fn parse_price_series(
    body: &str,
) -> Result<HashMap<PriceSeriesKind, PriceSeries>, String> {
    let json: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| format!("Historical prices shape mismatch: {}", e))?;

    let object = json
        .as_object()
        .ok_or_else(|| "Historical prices payload is not an object".to_string())?;

    let mut series_by_kind = HashMap::new();

    for kind in PriceSeriesKind::get_all() {
        let points = object
            .get(kind.key())
            .and_then(parse_points)
            .unwrap_or_default();

        series_by_kind.insert(kind, PriceSeries { kind, points });
    }

    Ok(series_by_kind)
}

fn parse_points(value: &serde_json::Value) -> Option<Vec<(DateTime<Utc>, f64)>> {
    let array = value.as_array()?;

    let mut points = Vec::new();

    for point in array {
        let point = point.as_array()?;

        let timestamp = point.first()?.as_f64()?;
        let value = point.get(1)?.as_f64()?;

        points.push((date_time_from_timestamp_millis(timestamp as u64), value));
    }

    Some(points)
}

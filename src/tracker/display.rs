use crate::coin_helpers::coin::Coin;
use crate::coin_helpers::number_format::{format_u64, NumberFormat};
use crate::coin_helpers::price_series::PriceSeries;

/// One list row: symbol, name, prices and the three time deltas.
pub fn coin_row(coin: &Coin, gbp_price: &str) -> String {
    format!(
        "{:<6} {:<16} {:>14} {:>14} {:>14}  1h {:>8}  24h {:>8}  7d {:>8}",
        coin.symbol(),
        coin.name(),
        coin.price.usd_price(),
        coin.price.btc_price(),
        gbp_price,
        NumberFormat::Delta.format(coin.delta.hour.0),
        NumberFormat::Delta.format(coin.delta.day.0),
        NumberFormat::Delta.format(coin.delta.week.0),
    )
}

/// Placeholder row for a tracked symbol the server did not return.
pub fn missing_coin_row(symbol: &str) -> String {
    format!("{:<6} no data", symbol)
}

pub fn price_line(coin: &Coin, gbp_price: &str) -> String {
    format!(
        "{} / {} / {}",
        coin.price.usd_price(),
        coin.price.btc_price(),
        gbp_price
    )
}

pub fn cap_line(coin: &Coin) -> String {
    format!(
        "Market cap: $ {} ({})",
        format_u64(coin.delta.cap.1),
        NumberFormat::Delta.format(coin.delta.cap.0)
    )
}

pub fn vol_line(coin: &Coin) -> String {
    format!(
        "Volume 24h: $ {} ({})",
        format_u64(coin.delta.vol.1),
        NumberFormat::Delta.format(coin.delta.vol.0)
    )
}

pub fn rank_line(coin: &Coin) -> String {
    format!(
        "Rank: #{} ({})",
        coin.delta.dom.1,
        NumberFormat::Delta.format(coin.delta.dom.0)
    )
}

/// The circulating supply against the cap, where a total of 0 means the
/// supply has no cap.
pub fn supply_line(coin: &Coin) -> String {
    let total = if coin.has_unlimited_supply() {
        "unlimited".to_string()
    } else {
        format_u64(coin.total())
    };

    format!("Supply: {} of {}", format_u64(coin.supply()), total)
}

pub fn links_lines(coin: &Coin) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(website) = &coin.links().website {
        lines.push(format!("Website: {}", website));
    }
    if let Some(whitepaper) = &coin.links().whitepaper {
        lines.push(format!("Whitepaper: {}", whitepaper));
    }

    lines
}

pub fn series_summary(series: &PriceSeries) -> String {
    match (series.points.first(), series.points.last()) {
        (Some(first), Some(last)) => format!(
            "{}: {} points, {} {} to {} {}",
            series.kind.label(),
            series.points.len(),
            first.0.format("%Y-%m-%d"),
            first.1,
            last.0.format("%Y-%m-%d"),
            last.1,
        ),
        _ => format!("{}: no data", series.kind.label()),
    }
}

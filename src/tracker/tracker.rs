use crate::cache::remote_data_cache::RemoteDataCache;
use crate::coin_helpers::coin::Coin;
use crate::coin_helpers::price_series::PriceSeriesKind;
use crate::config_scheme::config_scheme::ConfigScheme;
use crate::graceful_shutdown::GracefulShutdown;
use crate::tracker::display;
use futures::future::join;
use std::collections::HashMap;
use tokio::time::{sleep, Duration};

pub async fn start_tracker(
    config: ConfigScheme,
    cache: RemoteDataCache,
    graceful_shutdown: GracefulShutdown,
) {
    if let Some(slug) = config.matches.value_of("coin") {
        let slug = slug.to_string();

        show_coin_detail(&config, &cache, &slug).await;
    } else if config.matches.is_present("watch") {
        watch_coins(&config, &cache, graceful_shutdown).await;
    } else {
        show_coin_list(&config, &cache).await;
    }
}

/// Render one row per tracked symbol. Coins and currencies come from
/// independent endpoints, so both fetches are started together.
async fn show_coin_list(config: &ConfigScheme, cache: &RemoteDataCache) {
    let (coins, _currencies) = join(cache.coins(), cache.currencies()).await;

    for symbol in &config.api.coins {
        match coins.get(symbol) {
            Some(coin) => {
                let gbp_price = cache.gbp_price(&coin.price).await;

                println!("{}", display::coin_row(coin, &gbp_price));
            }
            None => println!("{}", display::missing_coin_row(symbol)),
        }
    }
}

/// Render the list, then refresh it every `refresh_interval_sec` until
/// shutdown. The rows shown are held locally and only their market data is
/// replaced on refresh, so a coin keeps its identity across generations.
async fn watch_coins(
    config: &ConfigScheme,
    cache: &RemoteDataCache,
    graceful_shutdown: GracefulShutdown,
) {
    let mut held_coins: HashMap<String, Coin> = HashMap::new();

    loop {
        let (coins, _currencies) = join(cache.coins(), cache.currencies()).await;

        for symbol in &config.api.coins {
            match coins.get(symbol) {
                Some(fresh) => {
                    let coin = held_coins
                        .entry(symbol.clone())
                        .or_insert_with(|| fresh.clone());
                    coin.update_market_data(fresh.price, fresh.delta);

                    let gbp_price = cache.gbp_price(&coin.price).await;

                    println!("{}", display::coin_row(coin, &gbp_price));
                }
                None => println!("{}", display::missing_coin_row(symbol)),
            }
        }

        // Sleep between refreshes
        sleep(Duration::from_secs(config.service.refresh_interval_sec)).await;

        if graceful_shutdown.get().await {
            break;
        }

        cache.invalidate().await;
    }
}

async fn show_coin_detail(config: &ConfigScheme, cache: &RemoteDataCache, slug: &str) {
    let coins = cache.coins().await;

    let coin = match coins.values().find(|coin| coin.slug() == slug) {
        Some(coin) => coin,
        None => {
            println!("Unknown coin: {}", slug);

            return;
        }
    };

    println!("{} ({})", coin.name(), coin.symbol());
    if let Some(description) = coin.description() {
        println!("{}", description);
    }

    let gbp_price = cache.gbp_price(&coin.price).await;
    println!("{}", display::price_line(coin, &gbp_price));
    println!("{}", display::cap_line(coin));
    println!("{}", display::vol_line(coin));
    println!("{}", display::rank_line(coin));
    println!("{}", display::supply_line(coin));
    for line in display::links_lines(coin) {
        println!("{}", line);
    }

    match cache.download(&coin.logo_path(&config.api.base_url)).await {
        Some(bytes) => info!("Logo downloaded: {} bytes", bytes.len()),
        None => info!("Logo unavailable"),
    }

    let series_by_kind = cache.price_series(slug).await;
    for kind in PriceSeriesKind::get_all() {
        if let Some(series) = series_by_kind.get(&kind) {
            println!("{}", display::series_summary(series));
        }
    }
}

use crate::api::api_client::ApiClient;
use crate::cache::remote_data_cache::RemoteDataCache;
use crate::config_scheme::config_scheme::ConfigScheme;
use crate::graceful_shutdown::GracefulShutdown;
use crate::tracker::tracker::start_tracker;
use std::sync::Arc;

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod api;
mod cache;
mod coin_helpers;
mod config_scheme;
mod graceful_shutdown;
mod tracker;


#[tokio::main]
async fn main() {
    let config = ConfigScheme::new();

    let graceful_shutdown = GracefulShutdown::new();
    tokio::spawn(graceful_shutdown.clone().start_listener());

    let source = Arc::new(ApiClient::new(&config.api, config.service.rest_timeout_sec));
    let cache = RemoteDataCache::new(source);

    start_tracker(config, cache, graceful_shutdown).await;
}

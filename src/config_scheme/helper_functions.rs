use crate::tracker::defaults::{API_BASE_URL, COINS};
use clap::ArgMatches;
use env_logger::Builder;
use parse_duration::parse;

pub fn get_config_file_path(matches: &ArgMatches, key: &str) -> Option<String> {
    matches.value_of(key).map(|v| v.to_string())
}

pub fn get_config_from_config_files(matches: &ArgMatches, key: &str) -> config::Config {
    let mut config = config::Config::default();

    if let Some(path) = get_config_file_path(matches, key) {
        config.merge(config::File::with_name(&path)).unwrap();
    } else {
        let env_key = "APP__".to_string() + &key.to_uppercase() + "_";

        config
            .merge(config::Environment::with_prefix(&env_key).separator("__"))
            .unwrap();
    }

    config
}

pub fn get_param_value_as_vec_of_string(config: &config::Config, key: &str) -> Option<Vec<String>> {
    if let Ok(string) = config.get_str(key) {
        Some(string.split(',').map(|v| v.to_string()).collect())
    } else {
        config
            .get_array(key)
            .ok()
            .map(|v| v.into_iter().map(|v| v.into_str().unwrap()).collect())
    }
}

pub fn set_log_level(service_config: &config::Config) {
    let log_level = service_config
        .get_str("log_level")
        .unwrap_or("info".to_string());

    let mut builder = Builder::from_default_env();
    builder.filter(Some("coin_tracker"), log_level.parse().unwrap());
    builder.init();
}

pub fn get_default_coins() -> Vec<String> {
    COINS.into_iter().map(|v| v.to_string()).collect()
}

pub fn get_default_base_url() -> String {
    API_BASE_URL.to_string()
}

pub fn get_default_refresh_interval_string() -> String {
    "1 minute".to_string()
}

pub fn get_default_refresh_interval_sec() -> u64 {
    parse(&get_default_refresh_interval_string())
        .unwrap()
        .as_secs()
}

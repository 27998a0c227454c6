use crate::config_scheme::helper_functions::{
    get_config_from_config_files, get_default_refresh_interval_sec,
    get_default_refresh_interval_string, set_log_level,
};
use clap::ArgMatches;
use parse_duration::parse;

#[derive(Clone)]
pub struct ServiceConfig {
    pub rest_timeout_sec: u64,
    pub refresh_interval_sec: u64,
}

impl ServiceConfig {
    pub fn new(matches: &ArgMatches) -> Self {
        let default = Self::default();
        let service_config = get_config_from_config_files(matches, "service_config");

        set_log_level(&service_config);

        let rest_timeout_sec = service_config
            .get_str("rest_timeout_sec")
            .map(|v| v.parse().unwrap())
            .unwrap_or(default.rest_timeout_sec);
        assert!(rest_timeout_sec > 0);

        let refresh_interval_sec = parse(
            &service_config
                .get_str("refresh_interval")
                .unwrap_or(get_default_refresh_interval_string()),
        )
        .unwrap()
        .as_secs();
        assert!(refresh_interval_sec > 0);

        Self {
            rest_timeout_sec,
            refresh_interval_sec,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rest_timeout_sec: 10,
            refresh_interval_sec: get_default_refresh_interval_sec(),
        }
    }
}

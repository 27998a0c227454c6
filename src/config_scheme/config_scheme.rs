use crate::config_scheme::api_config::ApiConfig;
use crate::config_scheme::service_config::ServiceConfig;
use clap::{App, Arg, ArgMatches, ValueHint};

#[derive(Clone)]
pub struct ConfigScheme {
    pub api: ApiConfig,
    pub service: ServiceConfig,
    pub matches: ArgMatches,
}

impl ConfigScheme {
    pub fn new() -> Self {
        let matches = Self::make_matches();

        Self {
            api: ApiConfig::new(&matches),
            service: ServiceConfig::new(&matches),
            matches,
        }
    }

    /// Call only once
    fn make_matches() -> ArgMatches {
        App::new("coin-tracker")
            .version("1.0")
            .arg(
                Arg::new("service_config")
                    .long("service_config")
                    .value_name("PATH")
                    .help("Service config file path")
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                Arg::new("api_config")
                    .long("api_config")
                    .value_name("PATH")
                    .help("Api config file path")
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                Arg::new("coin")
                    .long("coin")
                    .value_name("SLUG")
                    .help("Show the detail view for a single coin, by slug."),
            )
            .arg(
                Arg::new("watch")
                    .long("watch")
                    .help("Keep the list on screen and refresh it periodically."),
            )
            .get_matches()
    }
}

impl Default for ConfigScheme {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            service: ServiceConfig::default(),
            matches: ArgMatches::default(),
        }
    }
}

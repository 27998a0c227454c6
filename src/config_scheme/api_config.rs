use crate::config_scheme::helper_functions::{
    get_config_from_config_files, get_default_base_url, get_default_coins,
    get_param_value_as_vec_of_string,
};
use clap::ArgMatches;

#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub coins: Vec<String>,
}

impl ApiConfig {
    pub fn new(matches: &ArgMatches) -> Self {
        let default = Self::default();
        let api_config = get_config_from_config_files(matches, "api_config");

        let base_url = api_config
            .get_str("base_url")
            .unwrap_or(default.base_url);
        assert!(base_url.ends_with('/'));

        let coins =
            get_param_value_as_vec_of_string(&api_config, "coins").unwrap_or(default.coins);
        assert!(!coins.is_empty());

        Self { base_url, coins }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: get_default_base_url(),
            coins: get_default_coins(),
        }
    }
}

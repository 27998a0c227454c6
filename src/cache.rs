pub mod fetch_once;
pub mod remote_data_cache;

pub mod coin;
pub mod currency;
pub mod helper_functions;
pub mod number_format;
pub mod price_series;

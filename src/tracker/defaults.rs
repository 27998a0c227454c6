pub const API_BASE_URL: &str = "https://coin.fyi/";

pub const COINS: [&str; 6] = ["BTC", "ETH", "XRP", "LTC", "BCH", "EOS"];

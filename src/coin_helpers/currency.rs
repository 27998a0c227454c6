/// A fiat currency from the currency list endpoint: the international
/// currency code (unique), an English display name, and the exchange rate
/// against USD.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub rate: f64,
}

impl Currency {
    pub fn new(code: String, name: String, rate: f64) -> Self {
        Self { code, name, rate }
    }
}

use crate::coin_helpers::currency::Currency;

#[derive(Deserialize)]
struct CurrenciesResponse {
    currencies: Vec<CurrencyRecord>,
}

#[derive(Deserialize)]
struct CurrencyRecord {
    code: String,
    full_name: String,
    exchange_rate: f64,
}

pub fn parse_currencies(body: &str) -> Result<Vec<Currency>, String> {
    let response: CurrenciesResponse =
        serde_json::from_str(body).map_err(|e| format!("Currency list shape mismatch: {}", e))?;

    Ok(response
        .currencies
        .into_iter()
        .map(|record| Currency::new(record.code, record.full_name, record.exchange_rate))
        .collect())
}

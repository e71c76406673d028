//! Application-level configuration constants.

// Remote bounds endpoints
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "",
};
pub const LIMITS_ENDPOINT: &str = "/limits";
pub const RANGE_ENDPOINT: &str = "/range";

// Fallbacks used when a fetch or its schema validation fails
pub const FALLBACK_MIN: f64 = 1.0;
pub const FALLBACK_MAX: f64 = 100.0;
pub const FALLBACK_FIXED_VALUES: [f64; 6] = [1.99, 5.99, 10.99, 30.99, 50.99, 70.99];

// Text inputs
pub const INPUT_MAX_LEN: usize = 3;

// Currency presentation
pub const CURRENCY_TEXT: &str = "Euros";
pub const CURRENCY_SYMBOL: &str = "€";
pub const START_CURRENCY_ID: &str = "start-value-currency";
pub const END_CURRENCY_ID: &str = "end-value-currency";

//! Fixed catalog data for the storefront under test.

use rand::seq::SliceRandom;

/// Product ids the demo storefront ships with.
pub static PRODUCT_IDS: [&str; 9] = [
    "OLJCESPC7Z", // Sunglasses
    "66VCHSJNUP", // Tank Top
    "1YMWWN1N4O", // Home & Kitchen
    "L9ECAV7KIM", // Loafers
    "2ZYFJ3GM2N", // Hairdryer
    "0PUK6V6EV0", // Candle Holder
    "LS4PSXUNUM", // Salt & Pepper Shakers
    "9SIQT8TOJO", // City Bike
    "6E92ZMYYFZ", // Air Plant
];

/// Currencies the storefront can render prices in.
pub static CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "JPY", "CAD"];

/// Currency a fresh session is assumed to be in until it picks one.
pub const DEFAULT_CURRENCY: &str = "USD";

pub fn random_product_id() -> &'static str {
    PRODUCT_IDS
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("product catalog is not empty")
}

pub fn random_currency() -> &'static str {
    CURRENCIES
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("currency table is not empty")
}

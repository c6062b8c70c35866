//! Form payloads the shopper posts to the storefront.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog;

/// Largest quantity a realistic shopper adds in one go.
pub const MAX_CART_QUANTITY: u32 = 3;
/// Largest quantity the aggressive profile adds in one go.
pub const MAX_BULK_QUANTITY: u32 = 5;

static CITIES: [&str; 4] = ["San Francisco", "New York", "Seattle", "Boston"];
static STATES: [&str; 4] = ["CA", "NY", "WA", "MA"];

/// Well-known test card number; the storefront accepts it without charging
/// anything.
const TEST_CARD_NUMBER: &str = "4432-8015-6152-0454";

#[derive(Debug, Clone, Serialize)]
pub struct AddToCartForm {
    pub product_id: &'static str,
    pub quantity: u32,
}

impl AddToCartForm {
    /// Random catalog item with a quantity in `[1, MAX_CART_QUANTITY]`.
    pub fn random() -> Self {
        Self {
            product_id: catalog::random_product_id(),
            quantity: rand::thread_rng().gen_range(1..=MAX_CART_QUANTITY),
        }
    }

    /// Random catalog item with the wider `[1, MAX_BULK_QUANTITY]` range
    /// used when stressing the cart service.
    pub fn random_bulk() -> Self {
        Self {
            product_id: catalog::random_product_id(),
            quantity: rand::thread_rng().gen_range(1..=MAX_BULK_QUANTITY),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyForm {
    pub currency_code: &'static str,
}

/// Shipping and payment details for the order form.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutForm {
    pub email: String,
    pub street_address: String,
    pub zip_code: u32,
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
    pub credit_card_number: &'static str,
    pub credit_card_expiration_month: u8,
    pub credit_card_expiration_year: u16,
    pub credit_card_cvv: &'static str,
}

impl CheckoutForm {
    /// Synthetic order details: randomized address, fixed test card.
    /// City and state are drawn independently; the storefront does not
    /// validate the pairing.
    pub fn synthetic() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            email: format!("test-user-{}@example.com", rng.gen_range(1000..=9999)),
            street_address: format!("{} Main St", rng.gen_range(100..=999)),
            zip_code: rng.gen_range(10000..=99999),
            city: CITIES.choose(&mut rng).copied().expect("city table is not empty"),
            state: STATES.choose(&mut rng).copied().expect("state table is not empty"),
            country: "United States",
            credit_card_number: TEST_CARD_NUMBER,
            credit_card_expiration_month: 12,
            credit_card_expiration_year: 2030,
            credit_card_cvv: "123",
        }
    }
}

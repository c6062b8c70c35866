//! Per-user session state carried between transactions.

use goose::prelude::*;

use crate::catalog;

/// One cart line as the shopper believes the server recorded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: &'static str,
    pub quantity: u32,
}

/// What a simulated shopper remembers about their own visit: the currency
/// they picked and the items they expect to find in the cart.
#[derive(Debug, Clone)]
pub struct ShopperSession {
    pub currency: &'static str,
    pub cart: Vec<CartItem>,
}

impl Default for ShopperSession {
    fn default() -> Self {
        Self {
            currency: catalog::DEFAULT_CURRENCY,
            cart: Vec::new(),
        }
    }
}

impl ShopperSession {
    pub fn record_item(&mut self, product_id: &'static str, quantity: u32) {
        self.cart.push(CartItem {
            product_id,
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn line_items(&self) -> usize {
        self.cart.len()
    }
}

/// Borrow the user's session state, initializing it on first touch.
pub fn shopper_mut(user: &mut GooseUser) -> &mut ShopperSession {
    if user.get_session_data::<ShopperSession>().is_none() {
        user.set_session_data(ShopperSession::default());
    }
    user.get_session_data_mut::<ShopperSession>()
        .expect("session state was initialized above")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_has_empty_cart_and_default_currency() {
        let session = ShopperSession::default();
        assert_eq!(session.currency, "USD");
        assert!(session.cart_is_empty());
        assert_eq!(session.line_items(), 0);
    }

    #[test]
    fn test_recorded_items_accumulate_in_order() {
        let mut session = ShopperSession::default();
        session.record_item("OLJCESPC7Z", 2);
        session.record_item("9SIQT8TOJO", 1);

        assert!(!session.cart_is_empty());
        assert_eq!(session.line_items(), 2);
        assert_eq!(
            session.cart[0],
            CartItem {
                product_id: "OLJCESPC7Z",
                quantity: 2
            }
        );
        assert_eq!(
            session.cart[1],
            CartItem {
                product_id: "9SIQT8TOJO",
                quantity: 1
            }
        );
    }

    #[test]
    fn test_clear_cart_drops_every_line() {
        let mut session = ShopperSession::default();
        session.record_item("L9ECAV7KIM", 3);
        session.clear_cart();
        assert!(session.cart_is_empty());
    }
}

//! Realistic shopper profile: a weighted rotation over the storefront
//! with human think time between actions.

use std::time::Duration;

use goose::prelude::*;

use crate::catalog;
use crate::forms::{AddToCartForm, CheckoutForm, CurrencyForm};
use crate::requests;
use crate::session;
use crate::validate;

/// Think time between transactions.
const WAIT_MIN: Duration = Duration::from_secs(1);
const WAIT_MAX: Duration = Duration::from_secs(5);

// Relative frequencies of the traffic mix this profile mimics.
const HOMEPAGE_WEIGHT: usize = 5;
const VIEW_PRODUCT_WEIGHT: usize = 10;
const ADD_TO_CART_WEIGHT: usize = 3;
const VIEW_CART_WEIGHT: usize = 2;
const CHECKOUT_WEIGHT: usize = 1;
const EMPTY_CART_WEIGHT: usize = 1;

/// Assemble the shopper scenario: the one-shot currency hook plus the
/// weighted rotation of storefront actions.
pub fn scenario() -> Result<Scenario, GooseError> {
    Ok(scenario!("Boutique Shopper")
        .set_wait_time(WAIT_MIN, WAIT_MAX)?
        .register_transaction(
            transaction!(set_currency)
                .set_name("Set Currency")
                .set_on_start(),
        )
        .register_transaction(
            transaction!(view_homepage)
                .set_name("Homepage")
                .set_weight(HOMEPAGE_WEIGHT)?,
        )
        .register_transaction(
            transaction!(view_product)
                .set_name("View Product")
                .set_weight(VIEW_PRODUCT_WEIGHT)?,
        )
        .register_transaction(
            transaction!(add_to_cart)
                .set_name("Add to Cart")
                .set_weight(ADD_TO_CART_WEIGHT)?,
        )
        .register_transaction(
            transaction!(view_cart)
                .set_name("View Cart")
                .set_weight(VIEW_CART_WEIGHT)?,
        )
        .register_transaction(
            transaction!(checkout)
                .set_name("Complete Checkout")
                .set_weight(CHECKOUT_WEIGHT)?,
        )
        .register_transaction(
            transaction!(empty_cart)
                .set_name("Empty Cart")
                .set_weight(EMPTY_CART_WEIGHT)?,
        ))
}

/// Pick a currency for the whole visit and tell the storefront about it.
/// Runs once per user before the weighted rotation starts.
async fn set_currency(user: &mut GooseUser) -> TransactionResult {
    let currency = catalog::random_currency();
    session::shopper_mut(user).currency = currency;
    tracing::info!("new shopper session, currency preference {}", currency);

    let form = CurrencyForm {
        currency_code: currency,
    };
    let goose = requests::post_form_named(user, "/setCurrency", &form, "Set Currency").await?;
    validate::record_write(user, goose, "set currency")
}

async fn view_homepage(user: &mut GooseUser) -> TransactionResult {
    let goose = user.get_named("/", "Homepage").await?;
    validate::record_read(user, goose, "homepage")
}

async fn view_product(user: &mut GooseUser) -> TransactionResult {
    let product_id = catalog::random_product_id();
    let goose = user
        .get_named(&format!("/product/{}", product_id), "View Product")
        .await?;
    validate::record_read(user, goose, "product detail")
}

/// Add a random item to the cart. The session records the line only after
/// the storefront accepted it.
async fn add_to_cart(user: &mut GooseUser) -> TransactionResult {
    let form = AddToCartForm::random();
    let goose = requests::post_form_named(user, "/cart", &form, "Add to Cart").await?;
    validate::record_write(user, goose, "add to cart")?;

    session::shopper_mut(user).record_item(form.product_id, form.quantity);
    tracing::info!("added {}x {} to cart", form.quantity, form.product_id);
    Ok(())
}

async fn view_cart(user: &mut GooseUser) -> TransactionResult {
    let goose = user.get_named("/cart", "View Cart").await?;
    validate::record_read(user, goose, "cart page")
}

/// Complete an order. A shopper that reaches checkout with an empty cart
/// adds one item first.
async fn checkout(user: &mut GooseUser) -> TransactionResult {
    if session::shopper_mut(user).cart_is_empty() {
        tracing::debug!("cart empty before checkout, adding an item first");
        add_to_cart(user).await?;
    }

    for item in &session::shopper_mut(user).cart {
        tracing::debug!("checking out {}x {}", item.quantity, item.product_id);
    }

    let form = CheckoutForm::synthetic();
    let goose =
        requests::post_form_named(user, "/cart/checkout", &form, "Complete Checkout").await?;
    validate::record_write(user, goose, "checkout")?;

    let shopper = session::shopper_mut(user);
    let line_items = shopper.line_items();
    let currency = shopper.currency;
    shopper.clear_cart();
    tracing::info!("checkout completed, {} line items in {}", line_items, currency);
    Ok(())
}

async fn empty_cart(user: &mut GooseUser) -> TransactionResult {
    let goose = requests::post_empty_named(user, "/cart/empty", "Empty Cart").await?;
    validate::record_write(user, goose, "empty cart")?;

    session::shopper_mut(user).clear_cart();
    tracing::debug!("cart emptied");
    Ok(())
}

//! Aggressive profile: rapid-fire browsing and cart adds for stress runs.

use std::time::Duration;

use goose::prelude::*;

use crate::catalog;
use crate::forms::AddToCartForm;
use crate::requests;

const WAIT_MIN: Duration = Duration::from_millis(500);
const WAIT_MAX: Duration = Duration::from_secs(2);

/// Product pages fetched per rapid-browse pass.
const RAPID_BROWSE_PAGES: usize = 3;
/// Cart adds per bulk pass.
const BULK_ADD_COUNT: usize = 2;

/// Assemble the aggressive scenario. Its transactions lean on the engine's
/// default status classification; this profile exists to produce volume,
/// not diagnostics.
pub fn scenario() -> Result<Scenario, GooseError> {
    Ok(scenario!("Aggressive Shopper")
        .set_wait_time(WAIT_MIN, WAIT_MAX)?
        .register_transaction(transaction!(rapid_browse).set_name("Rapid Browse"))
        .register_transaction(transaction!(add_multiple_items).set_name("Add Multiple")))
}

/// Burst through several product pages back to back.
async fn rapid_browse(user: &mut GooseUser) -> TransactionResult {
    for _ in 0..RAPID_BROWSE_PAGES {
        let product_id = catalog::random_product_id();
        user.get_named(&format!("/product/{}", product_id), "Rapid Browse")
            .await?;
    }
    Ok(())
}

/// Queue several cart adds back to back.
async fn add_multiple_items(user: &mut GooseUser) -> TransactionResult {
    for _ in 0..BULK_ADD_COUNT {
        let form = AddToCartForm::random_bulk();
        requests::post_form_named(user, "/cart", &form, "Add Multiple").await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;

    use crate::requests::mock_user;

    #[test]
    fn test_aggressive_profile_runs_both_transactions_unweighted() {
        let aggressive = scenario().unwrap();
        assert_eq!(aggressive.name, "Aggressive Shopper");
        assert_eq!(aggressive.transactions.len(), 2);

        for transaction in &aggressive.transactions {
            assert_eq!(transaction.weight, 1);
            assert!(!transaction.on_start);
            assert!(!transaction.on_stop);
        }

        let names: Vec<_> = aggressive
            .transactions
            .iter()
            .map(|transaction| transaction.name.as_str())
            .collect();
        assert!(names.contains(&"Rapid Browse"));
        assert!(names.contains(&"Add Multiple"));
    }

    #[tokio::test]
    async fn test_rapid_browse_fetches_three_product_pages() {
        let server = MockServer::start();
        let product = server.mock(|when, then| {
            when.method(GET).path_contains("/product/");
            then.status(200);
        });

        let mut user = mock_user(&server);
        rapid_browse(&mut user).await.unwrap();

        product.assert_hits(3);
    }

    #[tokio::test]
    async fn test_add_multiple_items_posts_two_cart_adds() {
        let server = MockServer::start();
        let add = server.mock(|when, then| {
            when.method(POST).path("/cart").body_contains("quantity=");
            then.status(200);
        });

        let mut user = mock_user(&server);
        add_multiple_items(&mut user).await.unwrap();

        add.assert_hits(2);
    }
}

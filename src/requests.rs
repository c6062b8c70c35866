//! Named POST helpers on top of goose's request builder.
//!
//! goose ships named convenience wrappers for GET only; POSTs that should
//! report under a stable display name instead of their raw path are built
//! through `GooseRequest` by hand, the same way goose assembles its own
//! `post_form`.

use goose::goose::GooseResponse;
use goose::prelude::*;
use serde::Serialize;

/// POST `form` url-encoded to `path`, reporting the request under `name`.
pub async fn post_form_named<T: Serialize + ?Sized>(
    user: &mut GooseUser,
    path: &str,
    form: &T,
    name: &str,
) -> Result<GooseResponse, Box<TransactionError>> {
    let builder = user
        .get_request_builder(&GooseMethod::Post, path)?
        .form(form);
    let request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path(path)
        .name(name)
        .set_request_builder(builder)
        .build();
    user.request(request).await
}

/// POST an empty body to `path`, reporting the request under `name`.
pub async fn post_empty_named(
    user: &mut GooseUser,
    path: &str,
    name: &str,
) -> Result<GooseResponse, Box<TransactionError>> {
    let builder = user.get_request_builder(&GooseMethod::Post, path)?;
    let request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path(path)
        .name(name)
        .set_request_builder(builder)
        .build();
    user.request(request).await
}

/// Single throwaway user pointed at a mock server, for driving transaction
/// functions in tests.
#[cfg(test)]
pub(crate) fn mock_user(server: &httpmock::MockServer) -> GooseUser {
    use goose::config::GooseConfiguration;
    use gumdrop::Options;

    let args: Vec<&str> = Vec::new();
    let mut configuration = GooseConfiguration::parse_args_default(&args)
        .expect("empty argument list always parses");
    configuration.co_mitigation = Some(GooseCoordinatedOmissionMitigation::Average);
    GooseUser::single(
        server.base_url().parse().expect("mock server url is valid"),
        &configuration,
    )
    .expect("single user against the mock server")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::POST;
    use httpmock::MockServer;

    use crate::forms::AddToCartForm;

    #[tokio::test]
    async fn test_post_form_named_sends_the_urlencoded_form() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/cart")
                .header("content-type", "application/x-www-form-urlencoded")
                .body_contains("product_id=OLJCESPC7Z")
                .body_contains("quantity=2");
            then.status(200);
        });

        let mut user = mock_user(&server);
        let form = AddToCartForm {
            product_id: "OLJCESPC7Z",
            quantity: 2,
        };
        let goose = post_form_named(&mut user, "/cart", &form, "Add to Cart")
            .await
            .unwrap();

        mock.assert_hits(1);
        assert_eq!(goose.request.name, "Add to Cart");
        assert_eq!(goose.response.unwrap().status(), 200);
    }

    #[tokio::test]
    async fn test_post_empty_named_sends_no_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/cart/empty").body("");
            then.status(200);
        });

        let mut user = mock_user(&server);
        let goose = post_empty_named(&mut user, "/cart/empty", "Empty Cart")
            .await
            .unwrap();

        mock.assert_hits(1);
        assert_eq!(goose.request.name, "Empty Cart");
    }
}

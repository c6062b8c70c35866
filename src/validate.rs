//! Response classification for the storefront endpoints.
//!
//! Every shopper request names its expected status set explicitly. Reads
//! succeed on 200 only. State-changing writes also accept 302, the status
//! the storefront answers with when its post-action redirect is not
//! followed.

use goose::goose::GooseResponse;
use goose::prelude::*;

/// Statuses accepted for read (GET) endpoints.
pub fn read_status_ok(status: u16) -> bool {
    status == 200
}

/// Statuses accepted for state-changing (POST) endpoints.
pub fn write_status_ok(status: u16) -> bool {
    matches!(status, 200 | 302)
}

/// Record a read response: 200 is a success, anything else a tagged failure.
pub fn record_read(user: &mut GooseUser, goose: GooseResponse, action: &str) -> TransactionResult {
    record(user, goose, action, read_status_ok)
}

/// Record a write response: 200 and 302 are successes, anything else a
/// tagged failure.
pub fn record_write(user: &mut GooseUser, goose: GooseResponse, action: &str) -> TransactionResult {
    record(user, goose, action, write_status_ok)
}

fn record(
    user: &mut GooseUser,
    mut goose: GooseResponse,
    action: &str,
    expected: fn(u16) -> bool,
) -> TransactionResult {
    match goose.response {
        Ok(response) => {
            let status = response.status();
            if expected(status.as_u16()) {
                user.set_success(&mut goose.request)
            } else {
                tracing::warn!("{} answered with unexpected status {}", action, status);
                user.set_failure(
                    &format!("{}: unexpected status {}", action, status),
                    &mut goose.request,
                    Some(response.headers()),
                    None,
                )
            }
        }
        Err(error) => {
            tracing::warn!("{} produced no usable response: {}", action, error);
            user.set_failure(
                &format!("{}: no usable response", action),
                &mut goose.request,
                None,
                None,
            )
        }
    }
}

//! Entry point for the storefront load test.
//!
//! Registers two traffic profiles against the Online Boutique demo
//! storefront and hands them to goose for scheduling, pacing and metrics.
//! Run characteristics (user count, hatch rate, duration, host) come from
//! the goose command line; `TARGET_HOST` supplies the host when `--host`
//! is not given.

use anyhow::Result;
use goose::prelude::*;
use tracing_subscriber::EnvFilter;

mod catalog;
mod forms;
mod requests;
mod scenarios;
mod session;
mod validate;

/// Frontend endpoint used when neither `--host` nor `TARGET_HOST` is set.
const DEFAULT_HOST: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let host = std::env::var("TARGET_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

    GooseAttack::initialize()?
        .register_scenario(scenarios::shopper::scenario()?)
        .register_scenario(scenarios::stress::scenario()?)
        .test_start(transaction!(announce_start))
        .test_stop(transaction!(announce_stop))
        .set_default(GooseDefault::Host, host.as_str())?
        .execute()
        .await?;

    Ok(())
}

/// Runs once before the first simulated shopper starts.
async fn announce_start(user: &mut GooseUser) -> TransactionResult {
    tracing::info!("starting storefront load test against {}", user.base_url);
    Ok(())
}

/// Runs once after the last simulated shopper stops.
async fn announce_stop(_user: &mut GooseUser) -> TransactionResult {
    tracing::info!("storefront load test complete");
    Ok(())
}

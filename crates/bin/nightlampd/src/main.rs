//! # nightlampd — nightlamp daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Construct the schedule repository and the light driver (real or virtual)
//! - Construct application services, injecting adapters via port traits
//! - Spawn the background poller
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT), releasing the pin on the way out
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod driver;

use std::sync::Arc;
use std::time::Duration;

use nightlamp_adapter_gpio_rppal::RppalLightDriver;
use nightlamp_adapter_http_axum::state::AppState;
use nightlamp_adapter_storage_json::JsonScheduleRepository;
use nightlamp_adapter_virtual::VirtualLight;
use nightlamp_app::auth_table::TableAuthenticator;
use nightlamp_app::poller::Poller;
use nightlamp_app::services::light_service::LightService;
use nightlamp_app::services::schedule_service::ScheduleService;
use nightlamp_domain::user::User;
use tokio::sync::watch;

use crate::config::Config;
use crate::driver::SelectedDriver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.clone())
        .init();

    // Storage
    let repo = Arc::new(JsonScheduleRepository::new(&config.storage.path));

    // Light output
    let driver = if config.gpio.enabled {
        tracing::info!(pin = config.gpio.pin, "driving GPIO relay pin");
        SelectedDriver::Gpio(RppalLightDriver::new(config.gpio.pin)?)
    } else {
        tracing::info!("GPIO disabled, using virtual light");
        SelectedDriver::Virtual(VirtualLight::default())
    };
    let driver = Arc::new(driver);

    // Credentials
    let entries = config
        .auth
        .users
        .iter()
        .map(|entry| {
            (
                User::new(entry.username.clone(), entry.role),
                entry.password.clone(),
            )
        })
        .collect();
    let authenticator = TableAuthenticator::new(entries);

    // Background poller
    let poller = Poller::new(
        Arc::clone(&repo),
        Arc::clone(&driver),
        Duration::from_secs(config.schedule.buffer_secs),
    );
    let (shutdown_tx, shutdown_rx) = watch::channel(());
    let poller_handle = tokio::spawn(poller.run(shutdown_rx));

    // HTTP
    let state = AppState::new(
        ScheduleService::new(Arc::clone(&repo)),
        LightService::new(Arc::clone(&driver)),
        authenticator,
    );
    let app = nightlamp_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "nightlampd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the poller and wait for it to release the pin before exiting.
    tracing::info!("shutting down");
    let _ = shutdown_tx.send(());
    poller_handle.await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}

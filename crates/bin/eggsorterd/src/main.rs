//! # eggsorterd — egg-sorter dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Build the static dataset and the navigation service
//! - Start the clock task and stop it on shutdown
//! - Build the axum router and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use eggsorter_adapter_fixture::FixtureDataset;
use eggsorter_adapter_http_axum::router;
use eggsorter_adapter_http_axum::state::AppState;
use eggsorter_app::clock_task::ClockTask;
use eggsorter_app::ports::SystemClock;
use eggsorter_app::services::navigation_service::NavigationService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Dataset & services
    let dataset = FixtureDataset::new()?;
    let navigation = NavigationService::new(dataset);

    // Clock
    let clock = ClockTask::start(SystemClock, config.utc_offset()?, config.tick_period());

    // HTTP
    let state = AppState::new(
        navigation,
        clock.subscribe(),
        config.dashboard.refresh_seconds,
    );
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "eggsorterd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    clock.stop().await;
    tracing::info!("eggsorterd stopped");

    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

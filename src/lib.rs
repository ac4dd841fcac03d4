#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod seed;

mod credentials;
mod extractors;
mod handlers;
mod jwt;
mod middlewares;
mod state;
mod utils;

use crate::middlewares::middlewares;
use error::{Error, Result};
use tokio::{net::TcpListener, signal};

pub use config::Config;
pub use state::*;
pub use utils::panic;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!(
        "listening on port {}",
        listener.local_addr().unwrap().port()
    );

    let routes = handlers::routes::<S>();
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

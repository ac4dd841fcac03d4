use migration::{Migrator, MigratorTrait};
use std::{
    net::{Ipv4Addr, SocketAddr},
    process::ExitCode,
};
use tokio::net::TcpListener;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use xuetang_backend::{seed, Config, State, StateTrait};

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();

    xuetang_backend::panic::set_hook();

    if let Err(error) = run().await {
        error!("fatal error: {error:?}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env();

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(addr).await?;

    let state = State::new(config).await;

    // creates the database schema on first start
    Migrator::up(state.db(), None).await?;
    seed::run(&state).await;

    xuetang_backend::run(listener, state).await
}

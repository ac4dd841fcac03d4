use crate::{config::Config, jwt::Jwt};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Jwt;
    fn config(&self) -> &Config;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
    config: Config,
}

impl State {
    pub async fn new(config: Config) -> Arc<Self> {
        let conn = Self::connect_database(&config).await;
        Self::with_database(config, conn)
    }

    pub fn with_database(config: Config, conn: DbConn) -> Arc<Self> {
        Arc::new(Self {
            jwt: Jwt::new(&config),
            database: conn,
            config,
        })
    }

    async fn connect_database(config: &Config) -> DbConn {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(config.database_url.clone());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        info!("Connected to database");

        db
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

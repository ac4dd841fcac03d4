use super::request::RequestBuilder;
use http::StatusCode;
use migration::{Migrator, MigratorTrait};
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use serde_json::{json, Value};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use xuetang_backend::{seed, Config, State};

fn test_config() -> Config {
    let mut config = Config::from_env();
    config.database_url = "sqlite::memory:".to_owned();
    config.jwt_secret = "test-secret".to_owned();
    config.question_bank = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/tiku.json").into();
    config.admin_password = "admin123".to_owned();

    config
}

async fn setup_database() -> DbConn {
    // a single connection keeps the whole app on one in-memory database
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);

    let conn = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("failed to apply migrations");

    conn
}

/// A fully booted application on an ephemeral port with its own seeded
/// in-memory database. Every test gets a fresh one.
pub struct App {
    addr: SocketAddr,
    client: Client,
}

impl App {
    #[allow(unused)]
    pub async fn new() -> Self {
        let conn = setup_database().await;
        let state = State::with_database(test_config(), conn);

        seed::run(&state).await;

        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .expect("failed to bind tcp listener");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            xuetang_backend::run(listener, state).await.unwrap();
        });

        App {
            addr,
            client: Client::new(),
        }
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    #[allow(unused)]
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }
}

impl App {
    /// Registers a student and logs them in.
    #[allow(unused)]
    pub async fn register_user(&self, username: &str, password: &str) -> User {
        let res = self
            .post("/register")
            .json(&json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let access_token = self.login_token(username, password).await;

        User {
            username: username.to_owned(),
            access_token,
        }
    }

    #[allow(unused)]
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let res = self
            .post("/login")
            .json(&json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        body["access_token"]
            .as_str()
            .expect("login did not return a token")
            .to_owned()
    }
}

#[derive(Clone, Debug)]
pub struct User {
    pub username: String,
    pub access_token: String,
}

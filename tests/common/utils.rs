use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use laliga_tracker_backend::config::settings::{get_config, DatabaseSettings};
use laliga_tracker_backend::db::MatchStore;
use laliga_tracker_backend::run;
use laliga_tracker_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    // A DATABASE_URL in the environment would bypass the per-test database
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;

    let store = MatchStore::new(connection_pool.clone());
    let server = run(listener, store).expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Bootstrap the schema the same way the binary does on startup
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    MatchStore::new(connection_pool.clone())
        .ensure_schema()
        .await
        .expect("Failed to create the matches schema.");

    connection_pool
}

/// POST a match and return its generated id. Create does not echo the id
/// back, so it is discovered through the listing like a real client would.
pub async fn create_match(
    client: &Client,
    app_address: &str,
    home_team: &str,
    away_team: &str,
    score1: i64,
    score2: i64,
) -> i64 {
    let response = client
        .post(format!("{}/api/matches", app_address))
        .json(&json!({
            "homeTeam": home_team,
            "awayTeam": away_team,
            "score1": score1,
            "score2": score2,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let matches = list_matches(client, app_address).await;
    matches
        .iter()
        .find(|m| m["homeTeam"] == home_team.to_lowercase())
        .and_then(|m| m["id"].as_i64())
        .expect("Created match not found in listing.")
}

pub async fn list_matches(client: &Client, app_address: &str) -> Vec<serde_json::Value> {
    let response = client
        .get(format!("{}/api/matches", app_address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    response.json().await.expect("Cannot parse match listing.")
}

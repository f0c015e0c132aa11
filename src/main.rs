use std::net::TcpListener;

use laliga_tracker_backend::config::settings::get_config;
use laliga_tracker_backend::db::{connect_with_retry, MatchStore};
use laliga_tracker_backend::run;
use laliga_tracker_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "laliga-tracker-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // The retry budget is the only tolerance for a slow database; once it is
    // spent the process exits without ever binding the listener.
    let pool = match connect_with_retry(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Could not establish a database connection: {}", e);
            std::process::exit(1);
        }
    };

    let store = MatchStore::new(pool);
    if let Err(e) = store.ensure_schema().await {
        tracing::error!("Failed to create the matches schema: {}", e);
        std::process::exit(1);
    }

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Server listening on {}", address);

    run(listener, store)?.await
}

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::{info, warn};

use crate::config::settings::DatabaseSettings;
use crate::models::match_record::Match;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_BACKOFF: Duration = Duration::from_secs(3);

/// Open a connection pool, retrying a fixed number of attempts with a fixed
/// backoff. Exhausting the budget is fatal for the caller: the process must
/// not bind its listener without a working database.
pub async fn connect_with_retry(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;
    loop {
        let result = PgPoolOptions::new()
            .max_connections(16)
            .acquire_timeout(Duration::from_secs(10))
            .connect(settings.connection_string().expose_secret())
            .await;
        match result {
            Ok(pool) => {
                info!("Connected to Postgres on attempt {}", attempt);
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(
                    "Postgres connection attempt {}/{} failed: {}",
                    attempt, CONNECT_ATTEMPTS, e
                );
                tokio::time::sleep(CONNECT_BACKOFF).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Owns all database access for match records. Every mutation is a single
/// parameterized statement, so per-row consistency comes from the relational
/// engine; no additional locking happens here.
#[derive(Debug, Clone)]
pub struct MatchStore {
    pool: PgPool,
}

impl MatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `matches` table if it is missing. Safe to run on every
    /// startup.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS matches (
                id SERIAL PRIMARY KEY,
                home_team TEXT NOT NULL,
                away_team TEXT NOT NULL,
                score1 INTEGER NOT NULL DEFAULT 0,
                score2 INTEGER NOT NULL DEFAULT 0,
                match_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                yellow_cards INTEGER NOT NULL DEFAULT 0,
                red_cards INTEGER NOT NULL DEFAULT 0,
                extra_time INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Every match in id order. An empty table yields an empty vec, not an
    /// error. A row that fails to decode is skipped with a warning so one bad
    /// row cannot take down the whole listing.
    pub async fn list_all(&self) -> Result<Vec<Match>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, home_team, away_team, score1, score2, match_date, \
             yellow_cards, red_cards, extra_time FROM matches ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut matches = Vec::with_capacity(rows.len());
        for row in &rows {
            match Match::from_row(row) {
                Ok(m) => matches.push(m),
                Err(e) => warn!("Skipping match row that failed to decode: {:?}", e),
            }
        }
        Ok(matches)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            "SELECT id, home_team, away_team, score1, score2, match_date, \
             yellow_cards, red_cards, extra_time FROM matches WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a new match; id, date, and counters take their column defaults.
    /// The generated id is not reported back, callers re-query to discover it.
    pub async fn create(
        &self,
        home_team: &str,
        away_team: &str,
        score1: i32,
        score2: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO matches (home_team, away_team, score1, score2) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(home_team)
        .bind(away_team)
        .bind(score1)
        .bind(score2)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Overwrite both scores unconditionally. Zero rows matched is not
    /// distinguished from success.
    pub async fn update_scores(
        &self,
        id: i32,
        score1: i32,
        score2: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE matches SET score1 = $1, score2 = $2 WHERE id = $3")
            .bind(score1)
            .bind(score2)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deleting an absent id succeeds the same way as deleting a present one.
    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Counter bumps are single UPDATE expressions, so concurrent requests
    /// for the same id never lose increments to a read-modify-write race.
    pub async fn add_yellow_card(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE matches SET yellow_cards = yellow_cards + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn add_red_card(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE matches SET red_cards = red_cards + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn add_extra_time(&self, id: i32, minutes: i32) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE matches SET extra_time = extra_time + $1 WHERE id = $2")
            .bind(minutes)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

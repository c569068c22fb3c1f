//! Store provisioning: guarded creation of the target database and schema.
//!
//! Not a migration framework. The schema is two tables created with
//! `CREATE TABLE IF NOT EXISTS`; re-running provisioning against an existing
//! store is a no-op.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};

use crate::config::Config;

const CREATE_EMPLOYERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employers (
        employer_id   BIGINT PRIMARY KEY,
        employer_name VARCHAR(255) NOT NULL
    )
"#;

const CREATE_VACANCIES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS vacancies (
        vacancy_id   BIGINT PRIMARY KEY,
        employer_id  BIGINT NOT NULL REFERENCES employers(employer_id),
        vacancy_name VARCHAR(255) NOT NULL,
        salary_from  INTEGER,
        salary_to    INTEGER,
        currency     VARCHAR(50),
        vacancy_url  TEXT,
        description  TEXT
    )
"#;

/// Create the target database if it does not exist yet.
///
/// Connects to the server's administrative `postgres` database, checks the
/// catalog, and issues `CREATE DATABASE` only when the name is absent.
pub async fn ensure_database(config: &Config) -> Result<()> {
    let mut conn = PgConnection::connect(&config.admin_url())
        .await
        .context("Failed to connect to the administrative database")?;

    let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(&config.db_name)
        .fetch_optional(&mut conn)
        .await
        .context("Failed to check database existence")?;

    if exists.is_none() {
        // Identifiers cannot be bound as parameters; the name comes from our
        // own configuration, not user input.
        conn.execute(format!(r#"CREATE DATABASE "{}""#, config.db_name).as_str())
            .await
            .with_context(|| format!("Failed to create database {}", config.db_name))?;
        tracing::info!(db_name = %config.db_name, "Database created");
    } else {
        tracing::debug!(db_name = %config.db_name, "Database already exists");
    }

    conn.close().await.ok();
    Ok(())
}

/// Create the employers and vacancies tables if absent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_EMPLOYERS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create employers table")?;
    sqlx::query(CREATE_VACANCIES_TABLE)
        .execute(pool)
        .await
        .context("Failed to create vacancies table")?;
    tracing::debug!("Schema ensured");
    Ok(())
}

/// Open a connection pool against the target database.
pub async fn connect(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await
        .context("Failed to connect to the target database")
}

/// Run the full provisioning sequence, swallowing failures.
///
/// A provisioning failure is logged and otherwise silent; the caller learns
/// about it through the subsequent connection attempt. Returns the pool when
/// everything succeeded.
pub async fn provision(config: &Config) -> Option<PgPool> {
    if let Err(e) = ensure_database(config).await {
        tracing::error!(error = %e, "Database provisioning failed");
        return None;
    }

    let pool = match connect(config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Could not open the target database");
            return None;
        }
    };

    if let Err(e) = ensure_schema(&pool).await {
        tracing::error!(error = %e, "Schema provisioning failed");
        return None;
    }

    Some(pool)
}

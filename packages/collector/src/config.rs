use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// The employers ingested when EMPLOYER_IDS is not set: a list of large,
/// well-known companies on hh.ru.
pub const DEFAULT_EMPLOYER_IDS: [i64; 10] = [
    80,    // Alfa-Bank
    1740,  // Yandex
    2180,  // Ozon
    2748,  // Rostelecom
    3529,  // Sber
    3776,  // MTS
    4233,  // X5 Group
    15478, // VK
    39305, // Gazprom Neft
    78638, // T-Bank
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub hh_base_url: Option<String>,
    pub employer_ids: Vec<i64>,
    /// Cap applied to each employer's vacancy fetch; unbounded when `None`.
    pub max_vacancies_per_employer: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let employer_ids = match env::var("EMPLOYER_IDS") {
            Ok(raw) => parse_employer_ids(&raw)?,
            Err(_) => DEFAULT_EMPLOYER_IDS.to_vec(),
        };

        Ok(Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .context("DB_PORT must be a valid port number")?,
            db_user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            db_password: env::var("POSTGRES_PASSWORD")
                .context("POSTGRES_PASSWORD must be set")?,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "hh_vacancies".to_string()),
            hh_base_url: env::var("HH_BASE_URL").ok(),
            employer_ids,
            max_vacancies_per_employer: match env::var("MAX_VACANCIES_PER_EMPLOYER") {
                Ok(raw) => Some(
                    raw.parse()
                        .context("MAX_VACANCIES_PER_EMPLOYER must be a number")?,
                ),
                Err(_) => None,
            },
        })
    }

    /// Connection URL for the server's administrative database, used only
    /// while provisioning the target database.
    pub fn admin_url(&self) -> String {
        self.url_for("postgres")
    }

    /// Connection URL for the target database.
    pub fn database_url(&self) -> String {
        self.url_for(&self.db_name)
    }

    fn url_for(&self, db: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, db
        )
    }
}

fn parse_employer_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("EMPLOYER_IDS contains a non-numeric id: {s:?}"))
        })
        .collect()
}

mod harness;

pub use harness::TestHarness;

use anyhow::Result;
use sqlx::PgPool;

use collector_core::models::{Employer, Vacancy};

/// Insert an employer row directly, bypassing ingestion.
pub async fn seed_employer(pool: &PgPool, employer_id: i64, name: &str) -> Result<()> {
    Employer {
        employer_id,
        employer_name: name.to_string(),
    }
    .insert(pool)
    .await
}

/// Insert a vacancy row directly, bypassing ingestion.
pub async fn seed_vacancy(
    pool: &PgPool,
    vacancy_id: i64,
    employer_id: i64,
    name: &str,
    salary_from: Option<i32>,
) -> Result<()> {
    Vacancy {
        vacancy_id,
        employer_id,
        vacancy_name: name.to_string(),
        salary_from,
        salary_to: None,
        currency: salary_from.map(|_| "RUR".to_string()),
        vacancy_url: None,
        description: None,
    }
    .insert(pool)
    .await
}

use anyhow::Result;
use sqlx::PgPool;

/// An employer row. Written once when first seen, never updated.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Employer {
    pub employer_id: i64,
    pub employer_name: String,
}

/// A vacancy row. Written once per external vacancy id, never updated, so a
/// later change on the remote side leaves the stored copy stale.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Vacancy {
    pub vacancy_id: i64,
    pub employer_id: i64,
    pub vacancy_name: String,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub currency: Option<String>,
    pub vacancy_url: Option<String>,
    pub description: Option<String>,
}

impl Employer {
    pub async fn exists(employer_id: i64, pool: &PgPool) -> Result<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT employer_id FROM employers WHERE employer_id = $1")
                .bind(employer_id)
                .fetch_optional(pool)
                .await?;
        Ok(found.is_some())
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<()> {
        sqlx::query("INSERT INTO employers (employer_id, employer_name) VALUES ($1, $2)")
            .bind(self.employer_id)
            .bind(&self.employer_name)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM employers")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}

impl Vacancy {
    /// Map a wire-format vacancy onto a row, flattening the optional salary
    /// and snippet sub-records into nullable columns.
    pub fn from_listing(employer_id: i64, v: hh_client::Vacancy) -> Self {
        let (salary_from, salary_to, currency) = match v.salary {
            Some(s) => (s.from, s.to, s.currency),
            None => (None, None, None),
        };
        Self {
            vacancy_id: v.id,
            employer_id,
            vacancy_name: v.name,
            salary_from,
            salary_to,
            currency,
            vacancy_url: v.alternate_url,
            description: v.snippet.and_then(|s| s.requirement),
        }
    }

    pub async fn exists(vacancy_id: i64, pool: &PgPool) -> Result<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT vacancy_id FROM vacancies WHERE vacancy_id = $1")
                .bind(vacancy_id)
                .fetch_optional(pool)
                .await?;
        Ok(found.is_some())
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vacancies (
                vacancy_id, employer_id, vacancy_name,
                salary_from, salary_to, currency, vacancy_url, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(self.vacancy_id)
        .bind(self.employer_id)
        .bind(&self.vacancy_name)
        .bind(self.salary_from)
        .bind(self.salary_to)
        .bind(&self.currency)
        .bind(&self.vacancy_url)
        .bind(&self.description)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM vacancies")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}

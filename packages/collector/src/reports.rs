//! Fixed report queries over the populated store.
//!
//! Read-only. Every operation maps a query failure to an empty or absent
//! result after logging it, so the interactive surface shows "no data"
//! instead of an error.

use sqlx::PgPool;

/// One employer with its vacancy count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyVacancyCount {
    pub employer_name: String,
    pub vacancies_count: i64,
}

/// A vacancy joined to its employer's name, as shown in reports.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VacancySummary {
    pub employer_name: String,
    pub vacancy_name: String,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub currency: Option<String>,
    pub vacancy_url: Option<String>,
}

const VACANCY_SUMMARY_COLUMNS: &str =
    "employer_name, vacancy_name, salary_from, salary_to, currency, vacancy_url";

pub struct Reports {
    pool: PgPool,
}

impl Reports {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every employer with its vacancy count, most vacancies first.
    /// Employers with no vacancies appear with count 0.
    pub async fn companies_with_vacancy_counts(&self) -> Vec<CompanyVacancyCount> {
        let result = sqlx::query_as::<_, CompanyVacancyCount>(
            r#"
            SELECT employer_name, COUNT(vacancy_id) AS vacancies_count
            FROM employers
            LEFT JOIN vacancies USING (employer_id)
            GROUP BY employer_name
            ORDER BY vacancies_count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, "companies_with_vacancy_counts query failed");
                Vec::new()
            }
        }
    }

    /// Every vacancy joined to its employer's name.
    pub async fn all_vacancies(&self) -> Vec<VacancySummary> {
        self.summaries(
            "all_vacancies",
            &format!(
                "SELECT {VACANCY_SUMMARY_COLUMNS} FROM vacancies JOIN employers USING (employer_id)"
            ),
            None,
        )
        .await
    }

    /// Arithmetic mean of `salary_from` over vacancies that state one.
    /// `None` when no vacancy states a lower salary bound.
    pub async fn average_salary_from(&self) -> Option<f64> {
        let result: Result<Option<f64>, _> = sqlx::query_scalar(
            "SELECT AVG(salary_from)::FLOAT8 FROM vacancies WHERE salary_from IS NOT NULL",
        )
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(avg) => avg,
            Err(e) => {
                tracing::error!(error = %e, "average_salary_from query failed");
                None
            }
        }
    }

    /// Vacancies whose `salary_from` strictly exceeds the mean. The mean is
    /// recomputed as a subquery, so rows sitting exactly on it are excluded.
    pub async fn vacancies_above_average_salary(&self) -> Vec<VacancySummary> {
        self.summaries(
            "vacancies_above_average_salary",
            &format!(
                r#"
                SELECT {VACANCY_SUMMARY_COLUMNS}
                FROM vacancies
                JOIN employers USING (employer_id)
                WHERE salary_from > (
                    SELECT AVG(salary_from) FROM vacancies WHERE salary_from IS NOT NULL
                )
                "#
            ),
            None,
        )
        .await
    }

    /// Vacancies whose name contains the keyword, case-insensitively.
    pub async fn vacancies_matching_keyword(&self, keyword: &str) -> Vec<VacancySummary> {
        self.summaries(
            "vacancies_matching_keyword",
            &format!(
                r#"
                SELECT {VACANCY_SUMMARY_COLUMNS}
                FROM vacancies
                JOIN employers USING (employer_id)
                WHERE vacancy_name ILIKE $1
                "#
            ),
            Some(format!("%{keyword}%")),
        )
        .await
    }

    async fn summaries(
        &self,
        operation: &str,
        sql: &str,
        pattern: Option<String>,
    ) -> Vec<VacancySummary> {
        let mut query = sqlx::query_as::<_, VacancySummary>(sql);
        if let Some(pattern) = &pattern {
            query = query.bind(pattern);
        }

        match query.fetch_all(&self.pool).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(operation, error = %e, "Report query failed");
                Vec::new()
            }
        }
    }
}

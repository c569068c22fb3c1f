//! Two-pass ingestion of employers and vacancies into the store.
//!
//! Pass 1 resolves and inserts every employer before any vacancy is touched;
//! pass 2 fetches each named employer's vacancies. Both passes use
//! check-then-insert, so re-running over the same id list is a no-op. The
//! run is not transactional: a mid-run failure leaves the rows written so
//! far in place.

use sqlx::PgPool;

use crate::listing::BaseListingApi;
use crate::models::{Employer, Vacancy};

/// Counters for one ingestion run, for the closing log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub employers_inserted: u64,
    pub vacancies_inserted: u64,
}

pub struct IngestionWorkflow<'a, A: BaseListingApi> {
    api: &'a A,
    pool: &'a PgPool,
    employer_ids: &'a [i64],
}

impl<'a, A: BaseListingApi> IngestionWorkflow<'a, A> {
    pub fn new(api: &'a A, pool: &'a PgPool, employer_ids: &'a [i64]) -> Self {
        Self {
            api,
            pool,
            employer_ids,
        }
    }

    /// Run both passes over the configured employer id list.
    ///
    /// Per-row statement failures are logged and skipped; the run always
    /// completes and reports what it managed to persist.
    pub async fn run(&self) -> IngestStats {
        let mut stats = IngestStats::default();

        // Pass 1: employers only.
        for &employer_id in self.employer_ids {
            stats.employers_inserted += self.ingest_employer(employer_id).await;
        }

        // Pass 2: vacancies, only for employers that made it into the store.
        for &employer_id in self.employer_ids {
            stats.vacancies_inserted += self.ingest_vacancies(employer_id).await;
        }

        tracing::info!(
            employers_inserted = stats.employers_inserted,
            vacancies_inserted = stats.vacancies_inserted,
            "Ingestion run complete"
        );
        stats
    }

    async fn ingest_employer(&self, employer_id: i64) -> u64 {
        let Some(name) = self.api.employer_name(employer_id).await else {
            tracing::warn!(employer_id, "Employer could not be resolved, skipping");
            return 0;
        };

        match Employer::exists(employer_id, self.pool).await {
            Ok(true) => {
                tracing::debug!(employer_id, "Employer already stored");
                0
            }
            Ok(false) => {
                let row = Employer {
                    employer_id,
                    employer_name: name,
                };
                match row.insert(self.pool).await {
                    Ok(()) => {
                        tracing::info!(employer_id, name = %row.employer_name, "Employer stored");
                        1
                    }
                    Err(e) => {
                        tracing::error!(employer_id, error = %e, "Employer insert failed");
                        0
                    }
                }
            }
            Err(e) => {
                tracing::error!(employer_id, error = %e, "Employer existence check failed");
                0
            }
        }
    }

    async fn ingest_vacancies(&self, employer_id: i64) -> u64 {
        // An employer skipped in pass 1 gets no vacancies; the foreign key
        // would reject them anyway.
        match Employer::exists(employer_id, self.pool).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(employer_id, "Employer not stored, skipping vacancies");
                return 0;
            }
            Err(e) => {
                tracing::error!(employer_id, error = %e, "Employer existence check failed");
                return 0;
            }
        }

        let vacancies = self.api.employer_vacancies(employer_id).await;
        tracing::debug!(employer_id, fetched = vacancies.len(), "Fetched vacancies");

        let mut inserted = 0;
        for wire in vacancies {
            let vacancy_id = wire.id;
            match Vacancy::exists(vacancy_id, self.pool).await {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(vacancy_id, error = %e, "Vacancy existence check failed");
                    continue;
                }
            }

            let row = Vacancy::from_listing(employer_id, wire);
            match row.insert(self.pool).await {
                Ok(()) => inserted += 1,
                Err(e) => {
                    tracing::error!(vacancy_id, employer_id, error = %e, "Vacancy insert failed");
                }
            }
        }

        if inserted > 0 {
            tracing::info!(employer_id, inserted, "Vacancies stored");
        }
        inserted
    }
}

// Infrastructure trait for the external listing API, so ingestion can run
// against a scripted double in tests.

use async_trait::async_trait;
use hh_client::{HhClient, Vacancy};

#[async_trait]
pub trait BaseListingApi: Send + Sync {
    /// Resolve an employer's display name; `None` means the employer could
    /// not be fetched and must be skipped.
    async fn employer_name(&self, employer_id: i64) -> Option<String>;

    /// Fetch the employer's vacancies. On failure this returns whatever was
    /// accumulated so far, possibly nothing.
    async fn employer_vacancies(&self, employer_id: i64) -> Vec<Vacancy>;
}

/// hh.ru implementation of [`BaseListingApi`].
pub struct HhListingApi {
    client: HhClient,
    max_results: Option<usize>,
}

impl HhListingApi {
    pub fn new(client: HhClient, max_results: Option<usize>) -> Self {
        Self {
            client,
            max_results,
        }
    }
}

#[async_trait]
impl BaseListingApi for HhListingApi {
    async fn employer_name(&self, employer_id: i64) -> Option<String> {
        self.client.employer_name(employer_id).await
    }

    async fn employer_vacancies(&self, employer_id: i64) -> Vec<Vacancy> {
        self.client
            .employer_vacancies(employer_id, self.max_results)
            .await
    }
}

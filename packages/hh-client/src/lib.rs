//! Pure HeadHunter (hh.ru) REST API client.
//!
//! A minimal client for the public hh.ru listing API. Supports resolving an
//! employer's name and fetching the employer's vacancies across pages.
//!
//! Both public operations are failure-tolerant by contract: a transport
//! error, a non-success status or an undecodable body is logged and absorbed
//! into an absent (`None`) or partial (`Vec` of whatever was accumulated)
//! result. Callers never see an error from this crate's public surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use hh_client::HhClient;
//!
//! let client = HhClient::new();
//!
//! if let Some(name) = client.employer_name(1740).await {
//!     let vacancies = client.employer_vacancies(1740, Some(200)).await;
//!     println!("{}: {} vacancies", name, vacancies.len());
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{HhError, Result};
pub use types::{EmployerInfo, Salary, Snippet, VacanciesPage, Vacancy};

const BASE_URL: &str = "https://api.hh.ru";

/// Page size requested from `/vacancies`. The API caps per_page at 100.
const PER_PAGE: usize = 100;

pub struct HhClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for HhClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HhClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    /// Point the client at an alternate base URL (stub servers in tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Resolve an employer's display name by external id.
    ///
    /// Returns `None` and logs a warning on any failure; the caller is
    /// expected to skip the employer and continue.
    pub async fn employer_name(&self, employer_id: i64) -> Option<String> {
        match self.get_employer(employer_id).await {
            Ok(info) => Some(info.name),
            Err(e) => {
                tracing::warn!(employer_id, error = %e, "Failed to resolve employer name");
                None
            }
        }
    }

    /// Fetch all vacancies for an employer, walking pages sequentially from
    /// page 0.
    ///
    /// Stops on the last page (fewer than `PER_PAGE` items), when
    /// `max_results` is reached (the final page is truncated to fit), or on
    /// the first failed request. A failed page is never retried; whatever was
    /// accumulated before the failure is returned as a partial result.
    pub async fn employer_vacancies(
        &self,
        employer_id: i64,
        max_results: Option<usize>,
    ) -> Vec<Vacancy> {
        let mut vacancies: Vec<Vacancy> = Vec::new();
        let mut page: u32 = 0;

        loop {
            if let Some(max) = max_results {
                if vacancies.len() >= max {
                    break;
                }
            }

            let fetched = match self.get_vacancies_page(employer_id, page).await {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(
                        employer_id,
                        page,
                        error = %e,
                        "Vacancy page fetch failed, returning partial results"
                    );
                    break;
                }
            };

            let page_len = fetched.items.len();
            match max_results {
                Some(max) => {
                    let remaining = max - vacancies.len();
                    vacancies.extend(fetched.items.into_iter().take(remaining));
                }
                None => vacancies.extend(fetched.items),
            }

            if page_len < PER_PAGE {
                break;
            }
            page += 1;
        }

        tracing::debug!(employer_id, count = vacancies.len(), "Fetched vacancies");
        vacancies
    }

    async fn get_employer(&self, employer_id: i64) -> Result<EmployerInfo> {
        let url = format!("{}/employers/{}", self.base_url, employer_id);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HhError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let info: EmployerInfo = resp.json().await?;
        Ok(info)
    }

    async fn get_vacancies_page(&self, employer_id: i64, page: u32) -> Result<VacanciesPage> {
        let url = format!("{}/vacancies", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("employer_id", employer_id.to_string()),
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HhError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: VacanciesPage = resp.json().await?;
        Ok(body)
    }
}

// MockListingApi - scripted listing API double for tests
//
// Mirrors the shape of the real client: unknown employers resolve to None,
// vacancy fetches return whatever was scripted (empty for unknown ids).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use hh_client::{Salary, Snippet, Vacancy};

use crate::listing::BaseListingApi;

#[derive(Default)]
pub struct MockListingApi {
    names: HashMap<i64, String>,
    vacancies: HashMap<i64, Vec<Vacancy>>,
    name_calls: Mutex<Vec<i64>>,
    vacancy_calls: Mutex<Vec<i64>>,
}

impl MockListingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employer(mut self, employer_id: i64, name: &str) -> Self {
        self.names.insert(employer_id, name.to_string());
        self
    }

    pub fn with_vacancy(mut self, employer_id: i64, vacancy: Vacancy) -> Self {
        self.vacancies
            .entry(employer_id)
            .or_default()
            .push(vacancy);
        self
    }

    /// Employer ids that were asked for a name, in call order.
    pub fn name_calls(&self) -> Vec<i64> {
        self.name_calls.lock().unwrap().clone()
    }

    /// Employer ids that were asked for vacancies, in call order.
    pub fn vacancy_calls(&self) -> Vec<i64> {
        self.vacancy_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseListingApi for MockListingApi {
    async fn employer_name(&self, employer_id: i64) -> Option<String> {
        self.name_calls.lock().unwrap().push(employer_id);
        self.names.get(&employer_id).cloned()
    }

    async fn employer_vacancies(&self, employer_id: i64) -> Vec<Vacancy> {
        self.vacancy_calls.lock().unwrap().push(employer_id);
        self.vacancies.get(&employer_id).cloned().unwrap_or_default()
    }
}

/// Build a wire-format vacancy for test scripts.
pub fn make_vacancy(id: i64, name: &str, salary_from: Option<i32>) -> Vacancy {
    Vacancy {
        id,
        name: name.to_string(),
        salary: salary_from.map(|from| Salary {
            from: Some(from),
            to: None,
            currency: Some("RUR".to_string()),
        }),
        alternate_url: Some(format!("https://hh.example/vacancy/{id}")),
        snippet: Some(Snippet {
            requirement: Some("Requirements snippet".to_string()),
        }),
    }
}

use serde::Deserialize;

/// Employer info as returned by `GET /employers/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerInfo {
    pub id: i64,
    pub name: String,
}

/// Salary range attached to a vacancy. Any field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Salary {
    pub from: Option<i32>,
    pub to: Option<i32>,
    pub currency: Option<String>,
}

/// Short highlighted fragments of the vacancy text.
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub requirement: Option<String>,
}

/// A single vacancy from the `/vacancies` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    pub id: i64,
    pub name: String,
    pub salary: Option<Salary>,
    pub alternate_url: Option<String>,
    pub snippet: Option<Snippet>,
}

/// One page of the paginated `/vacancies` response.
#[derive(Debug, Clone, Deserialize)]
pub struct VacanciesPage {
    pub items: Vec<Vacancy>,
    pub page: u32,
    pub pages: u32,
}

//! Integration tests for the two-pass ingestion workflow.

mod common;

use test_context::test_context;

use collector_core::ingest::IngestionWorkflow;
use collector_core::models::{Employer, Vacancy};
use collector_core::test_dependencies::{make_vacancy, MockListingApi};
use common::TestHarness;

#[test_context(TestHarness)]
#[tokio::test]
async fn unresolved_employer_writes_nothing(ctx: &TestHarness) {
    // Employer 42 is unknown to the listing API but has scripted vacancies;
    // none of them may reach the store.
    let api = MockListingApi::new().with_vacancy(42, make_vacancy(1, "Ghost", None));

    let stats = IngestionWorkflow::new(&api, &ctx.pool, &[42]).run().await;

    assert_eq!(stats.employers_inserted, 0);
    assert_eq!(stats.vacancies_inserted, 0);
    assert_eq!(Employer::count(&ctx.pool).await.unwrap(), 0);
    assert_eq!(Vacancy::count(&ctx.pool).await.unwrap(), 0);
    // The vacancy fetch must not even be attempted for a skipped employer.
    assert_eq!(api.vacancy_calls(), Vec::<i64>::new());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn stores_employers_and_vacancies(ctx: &TestHarness) {
    let api = MockListingApi::new()
        .with_employer(42, "Acme")
        .with_employer(43, "Globex")
        .with_vacancy(42, make_vacancy(1, "Engineer", Some(1000)))
        .with_vacancy(42, make_vacancy(2, "Designer", None))
        .with_vacancy(43, make_vacancy(3, "Manager", Some(2000)));

    let stats = IngestionWorkflow::new(&api, &ctx.pool, &[42, 43]).run().await;

    assert_eq!(stats.employers_inserted, 2);
    assert_eq!(stats.vacancies_inserted, 3);

    // Pass 1 resolves every employer before pass 2 fetches any vacancies.
    assert_eq!(api.name_calls(), vec![42, 43]);
    assert_eq!(api.vacancy_calls(), vec![42, 43]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn maps_optional_fields_to_nullable_columns(ctx: &TestHarness) {
    let api = MockListingApi::new()
        .with_employer(42, "Acme")
        .with_vacancy(42, make_vacancy(7, "Backend Developer", Some(1500)));

    IngestionWorkflow::new(&api, &ctx.pool, &[42]).run().await;

    let row: Vacancy = sqlx::query_as("SELECT * FROM vacancies WHERE vacancy_id = $1")
        .bind(7_i64)
        .fetch_one(&ctx.pool)
        .await
        .unwrap();

    assert_eq!(row.employer_id, 42);
    assert_eq!(row.vacancy_name, "Backend Developer");
    assert_eq!(row.salary_from, Some(1500));
    assert_eq!(row.salary_to, None);
    assert_eq!(row.currency.as_deref(), Some("RUR"));
    assert_eq!(row.vacancy_url.as_deref(), Some("https://hh.example/vacancy/7"));
    assert_eq!(row.description.as_deref(), Some("Requirements snippet"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rerunning_ingestion_is_idempotent(ctx: &TestHarness) {
    let api = MockListingApi::new()
        .with_employer(42, "Acme")
        .with_vacancy(42, make_vacancy(1, "Engineer", Some(1000)))
        .with_vacancy(42, make_vacancy(2, "Designer", None));

    let first = IngestionWorkflow::new(&api, &ctx.pool, &[42]).run().await;
    assert_eq!(first.employers_inserted, 1);
    assert_eq!(first.vacancies_inserted, 2);

    let second = IngestionWorkflow::new(&api, &ctx.pool, &[42]).run().await;
    assert_eq!(second.employers_inserted, 0);
    assert_eq!(second.vacancies_inserted, 0);

    assert_eq!(Employer::count(&ctx.pool).await.unwrap(), 1);
    assert_eq!(Vacancy::count(&ctx.pool).await.unwrap(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn resolved_employers_survive_an_unresolved_one(ctx: &TestHarness) {
    // Only 43 resolves; 42 and 44 are skipped without aborting the run.
    let api = MockListingApi::new()
        .with_employer(43, "Globex")
        .with_vacancy(43, make_vacancy(3, "Manager", Some(2000)));

    let stats = IngestionWorkflow::new(&api, &ctx.pool, &[42, 43, 44]).run().await;

    assert_eq!(stats.employers_inserted, 1);
    assert_eq!(stats.vacancies_inserted, 1);
    assert_eq!(Employer::count(&ctx.pool).await.unwrap(), 1);
    assert!(Employer::exists(43, &ctx.pool).await.unwrap());
}

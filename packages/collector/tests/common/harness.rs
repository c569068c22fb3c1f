//! Test harness with testcontainers for integration testing.
//!
//! One Postgres container is started for the whole test run; every test
//! provisions its own uniquely-named database through the production
//! `ensure_database`/`ensure_schema` path, so tests stay isolated while the
//! container is shared.

use std::sync::atomic::{AtomicUsize, Ordering};

use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use collector_core::{db, Config};

struct SharedTestInfra {
    host: String,
    port: u16,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();
static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl SharedTestInfra {
    async fn init() -> Self {
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .expect("Failed to start Postgres container");

        let host = postgres
            .get_host()
            .await
            .expect("Failed to resolve container host")
            .to_string();
        let port = postgres
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to resolve container port");

        Self {
            host,
            port,
            _postgres: postgres,
        }
    }

    async fn get() -> &'static Self {
        SHARED_INFRA.get_or_init(Self::init).await
    }
}

/// Per-test context: a freshly provisioned database in the shared container.
pub struct TestHarness {
    pub config: Config,
    pub pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        let infra = SharedTestInfra::get().await;
        let n = DB_COUNTER.fetch_add(1, Ordering::SeqCst);

        let config = Config {
            db_host: infra.host.clone(),
            db_port: infra.port,
            db_user: "postgres".to_string(),
            db_password: "postgres".to_string(),
            db_name: format!("collector_test_{n}"),
            hh_base_url: None,
            employer_ids: Vec::new(),
            max_vacancies_per_employer: None,
        };

        db::ensure_database(&config)
            .await
            .expect("Failed to provision test database");
        let pool = db::connect(&config)
            .await
            .expect("Failed to connect to test database");
        db::ensure_schema(&pool)
            .await
            .expect("Failed to provision test schema");

        Self { config, pool }
    }

    async fn teardown(self) {
        self.pool.close().await;
    }
}

use axum::routing::{get, post};
use axum::Router;
use payments_orchestrator::backends::mock::MockBackend;
use payments_orchestrator::config::AppConfig;
use payments_orchestrator::ledger::postgres::PostgresLedger;
use payments_orchestrator::service::payment_service::PaymentTransactionService;
use payments_orchestrator::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let ledger = PostgresLedger { pool: pool.clone() };
    // Deployments plug a real gateway adapter here; the mock stands in for
    // dev and conformance runs.
    let backend = MockBackend {
        backend_name: "mock".to_string(),
        behavior: cfg.mock_backend_behavior.clone(),
    };
    let transaction_service = PaymentTransactionService {
        backend: Arc::new(backend),
        ledger: Arc::new(ledger),
    };

    let state = AppState {
        transaction_service,
    };

    let app = Router::new()
        .route(
            "/health",
            get(payments_orchestrator::http::handlers::transactions::health),
        )
        .route(
            "/transactions/authorize",
            post(payments_orchestrator::http::handlers::transactions::authorize),
        )
        .route(
            "/transactions/authorize-and-debit",
            post(payments_orchestrator::http::handlers::transactions::authorize_and_debit),
        )
        .route(
            "/transactions/balance",
            post(payments_orchestrator::http::handlers::transactions::balance),
        )
        .route(
            "/transactions/credit",
            post(payments_orchestrator::http::handlers::transactions::credit),
        )
        .route(
            "/transactions/debit",
            post(payments_orchestrator::http::handlers::transactions::debit),
        )
        .route(
            "/transactions/void",
            post(payments_orchestrator::http::handlers::transactions::void_payment),
        )
        .route(
            "/backend/candidate/:payment_type",
            get(payments_orchestrator::http::handlers::transactions::is_valid_candidate),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

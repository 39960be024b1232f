use library_app::{
    adapters::{
        memory::{
            BookRepository as MemoryBookRepository, MemoryDatabase,
            UserLoanHistoryRepository as MemoryUserLoanHistoryRepository,
            UserRepository as MemoryUserRepository,
        },
        postgres::{
            PostgresBookRepository, PostgresUserLoanHistoryRepository, PostgresUserRepository,
            run_migrations,
        },
    },
    api::{handlers::AppState, router::create_router},
    application::ServiceDependencies,
    config::Config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_app=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let service_deps = match &config.database_url {
        Some(database_url) => postgres_dependencies(database_url, config.max_connections).await?,
        None => {
            tracing::warn!("DATABASE_URL is not set, using the in-memory store");
            memory_dependencies()
        }
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;
    Ok(())
}

async fn postgres_dependencies(
    database_url: &str,
    max_connections: u32,
) -> Result<ServiceDependencies, BoxError> {
    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    run_migrations(&pool).await?;
    tracing::info!("Connected to PostgreSQL, migrations applied");

    Ok(ServiceDependencies {
        book_repository: Arc::new(PostgresBookRepository::new(pool.clone())),
        user_repository: Arc::new(PostgresUserRepository::new(pool.clone())),
        loan_history_repository: Arc::new(PostgresUserLoanHistoryRepository::new(pool)),
    })
}

fn memory_dependencies() -> ServiceDependencies {
    let db = MemoryDatabase::new();

    ServiceDependencies {
        book_repository: Arc::new(MemoryBookRepository::new(db.clone())),
        user_repository: Arc::new(MemoryUserRepository::new(db.clone())),
        loan_history_repository: Arc::new(MemoryUserLoanHistoryRepository::new(db)),
    }
}

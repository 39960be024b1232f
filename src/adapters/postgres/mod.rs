pub mod book_repository;
pub mod user_loan_history_repository;
pub mod user_repository;

pub use book_repository::BookRepository as PostgresBookRepository;
pub use user_loan_history_repository::UserLoanHistoryRepository as PostgresUserLoanHistoryRepository;
pub use user_repository::UserRepository as PostgresUserRepository;

use sqlx::PgPool;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Wrap a malformed column value as a database error
fn invalid_data(message: String) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message))
}

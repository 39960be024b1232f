use crate::application::errors::{ApplicationError, Result};
use crate::application::ServiceDependencies;
use crate::domain::UserLoanStatus;
use crate::ports::BookTypeCount;

/// Number of books currently on loan, across all users
pub async fn count_loaned_book(deps: &ServiceDependencies) -> Result<i64> {
    deps.loan_history_repository
        .count_by_status(UserLoanStatus::Loaned)
        .await
        .map_err(ApplicationError::RepositoryError)
}

/// Book count per type
///
/// Types without books are omitted. Order is unspecified.
pub async fn get_book_statistics(deps: &ServiceDependencies) -> Result<Vec<BookTypeCount>> {
    deps.book_repository
        .get_stats()
        .await
        .map_err(ApplicationError::RepositoryError)
}

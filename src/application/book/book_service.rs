use tracing::{info, warn};

use crate::application::errors::{ApplicationError, Result, return_error};
use crate::application::ServiceDependencies;
use crate::domain::{Book, BookId, UserLoanStatus, commands::*};

/// Register a book
///
/// No duplicate check: several books may share a name.
pub async fn save_book(deps: &ServiceDependencies, cmd: SaveBook) -> Result<BookId> {
    let book = Book::new(cmd.name, cmd.book_type)?;

    deps.book_repository
        .save(&book)
        .await
        .map_err(ApplicationError::RepositoryError)?;

    info!(book_id = %book.id().value(), name = book.name(), "Book registered");
    Ok(book.id())
}

/// Lend a book to a user
///
/// Business rules:
/// - The book must exist
/// - Nobody may currently hold a LOANED history for this book name
///   (checked across every user, one physical copy per name)
/// - The user must exist
///
/// The availability check and the write are separate store calls, so two
/// simultaneous loans of the same book can both succeed.
pub async fn loan_book(deps: &ServiceDependencies, cmd: LoanBook) -> Result<()> {
    // 1. Book lookup
    let book = deps
        .book_repository
        .find_by_name(&cmd.book_name)
        .await
        .map_err(ApplicationError::RepositoryError)?
        .ok_or_else(|| ApplicationError::BookNotFound {
            name: cmd.book_name.clone(),
        })?;

    // 2. Availability across all users
    let already_loaned = deps
        .loan_history_repository
        .exists_by_book_name_and_status(book.name(), UserLoanStatus::Loaned)
        .await
        .map_err(ApplicationError::RepositoryError)?;

    if already_loaned {
        warn!(book_name = book.name(), "Loan rejected: book already loaned");
        return Err(ApplicationError::BookAlreadyLoaned {
            book_name: cmd.book_name,
        });
    }

    // 3. User lookup
    let mut user = deps
        .user_repository
        .find_by_name(&cmd.user_name)
        .await
        .map_err(ApplicationError::RepositoryError)?
        .ok_or_else(|| ApplicationError::UserNotFound {
            key: cmd.user_name.clone(),
        })?;

    // 4. Record the loan on the aggregate and persist it
    user.loan_book(&book);
    deps.user_repository
        .save(&user)
        .await
        .map_err(ApplicationError::RepositoryError)?;

    info!(
        user_id = %user.id().value(),
        book_name = book.name(),
        "Book loaned"
    );
    Ok(())
}

/// Return a book
///
/// Flips the user's first still-loaned history for the book name to
/// RETURNED. Availability is derived from that status, nothing else changes.
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<()> {
    let mut user = deps
        .user_repository
        .find_by_name(&cmd.user_name)
        .await
        .map_err(ApplicationError::RepositoryError)?
        .ok_or_else(|| ApplicationError::UserNotFound {
            key: cmd.user_name.clone(),
        })?;

    user.return_book(&cmd.book_name)
        .map_err(|e| return_error(&cmd.user_name, e))?;

    deps.user_repository
        .save(&user)
        .await
        .map_err(ApplicationError::RepositoryError)?;

    info!(
        user_id = %user.id().value(),
        book_name = %cmd.book_name,
        "Book returned"
    );
    Ok(())
}

use thiserror::Error;

use crate::domain::{NameError, ReturnBookError};

/// Application layer error shared by the book and user services
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Entity name failed validation
    #[error("Name must not be blank")]
    Validation(NameError),

    /// No book with this name
    #[error("Book not found")]
    BookNotFound { name: String },

    /// No user with this name or ID
    #[error("User not found")]
    UserNotFound { key: String },

    /// Some user already holds this book
    #[error("This book is already loaned")]
    BookAlreadyLoaned { book_name: String },

    /// The user never borrowed a book with this name
    #[error("No loan history for book '{book_name}'")]
    LoanHistoryNotFound { user_name: String, book_name: String },

    /// Persistence failure
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<NameError> for ApplicationError {
    fn from(err: NameError) -> Self {
        ApplicationError::Validation(err)
    }
}

/// Application layer Result type
pub type Result<T> = std::result::Result<T, ApplicationError>;

pub(crate) fn return_error(user_name: &str, err: ReturnBookError) -> ApplicationError {
    match err {
        ReturnBookError::NoHistory { book_name } => ApplicationError::LoanHistoryNotFound {
            user_name: user_name.to_string(),
            book_name,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ApplicationError::from(NameError::Blank).to_string(),
            "Name must not be blank"
        );
        assert_eq!(
            ApplicationError::BookNotFound {
                name: "A".to_string()
            }
            .to_string(),
            "Book not found"
        );
        assert_eq!(
            ApplicationError::BookAlreadyLoaned {
                book_name: "A".to_string()
            }
            .to_string(),
            "This book is already loaned"
        );
    }

    #[test]
    fn test_return_error_keeps_names() {
        let err = return_error(
            "Alice",
            ReturnBookError::NoHistory {
                book_name: "A".to_string(),
            },
        );

        match err {
            ApplicationError::LoanHistoryNotFound {
                user_name,
                book_name,
            } => {
                assert_eq!(user_name, "Alice");
                assert_eq!(book_name, "A");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

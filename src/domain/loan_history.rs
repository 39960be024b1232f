use super::{UserId, UserLoanHistoryId, UserLoanStatus};

/// Loan history entry - one user borrowing one named book
///
/// Owned by the `User` aggregate. The link to `Book` is the book name only,
/// not a reference to a book ID.
///
/// Business rules:
/// - Created as LOANED by `User::loan_book`
/// - Moves to RETURNED only through `User::return_book`, never back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLoanHistory {
    id: UserLoanHistoryId,
    user_id: UserId,
    book_name: String,
    status: UserLoanStatus,
}

impl UserLoanHistory {
    pub(super) fn loaned(user_id: UserId, book_name: impl Into<String>) -> Self {
        Self {
            id: UserLoanHistoryId::new(),
            user_id,
            book_name: book_name.into(),
            status: UserLoanStatus::Loaned,
        }
    }

    pub(crate) fn restore(
        id: UserLoanHistoryId,
        user_id: UserId,
        book_name: String,
        status: UserLoanStatus,
    ) -> Self {
        Self {
            id,
            user_id,
            book_name,
            status,
        }
    }

    /// Test data builder
    ///
    /// Lets tests seed histories in any status directly through the
    /// loan history repository.
    pub fn fixture(user_id: UserId, book_name: &str, status: UserLoanStatus) -> Self {
        Self {
            id: UserLoanHistoryId::new(),
            user_id,
            book_name: book_name.to_string(),
            status,
        }
    }

    pub(super) fn do_return(&mut self) {
        self.status = UserLoanStatus::Returned;
    }

    pub fn id(&self) -> UserLoanHistoryId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn book_name(&self) -> &str {
        &self.book_name
    }

    pub fn status(&self) -> UserLoanStatus {
        self.status
    }

    pub fn is_returned(&self) -> bool {
        self.status.is_returned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaned_history_starts_loaned() {
        let history = UserLoanHistory::loaned(UserId::new(), "Clean Code");
        assert_eq!(history.status(), UserLoanStatus::Loaned);
        assert!(!history.is_returned());
    }

    #[test]
    fn test_do_return_is_idempotent() {
        let mut history = UserLoanHistory::loaned(UserId::new(), "Clean Code");
        history.do_return();
        history.do_return();
        assert_eq!(history.status(), UserLoanStatus::Returned);
    }

    #[test]
    fn test_fixture_keeps_given_status() {
        let user_id = UserId::new();
        let history = UserLoanHistory::fixture(user_id, "A", UserLoanStatus::Returned);
        assert_eq!(history.user_id(), user_id);
        assert_eq!(history.book_name(), "A");
        assert!(history.is_returned());
    }
}

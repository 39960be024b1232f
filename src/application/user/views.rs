use crate::domain::{User, UserId, UserLoanHistory};

/// User projection for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub age: Option<u32>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            age: user.age(),
        }
    }
}

/// One book in a user's loan history report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookHistoryView {
    pub name: String,
    pub is_return: bool,
}

impl From<&UserLoanHistory> for BookHistoryView {
    fn from(history: &UserLoanHistory) -> Self {
        Self {
            name: history.book_name().to_string(),
            is_return: history.is_returned(),
        }
    }
}

/// Loan history report of one user
///
/// `books` is empty, not absent, for users who never borrowed anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLoanHistoryView {
    pub name: String,
    pub books: Vec<BookHistoryView>,
}

impl From<&User> for UserLoanHistoryView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            books: user
                .loan_histories()
                .iter()
                .map(BookHistoryView::from)
                .collect(),
        }
    }
}

use super::{
    Book, NameError, ReturnBookError, UserId, UserLoanHistory, UserLoanStatus,
    errors::validate_name,
};

/// User aggregate
///
/// Owns its loan histories exclusively: saving the user saves them and
/// deleting the user deletes them.
///
/// Business rules:
/// - The name must not be blank, at construction and on rename
/// - Age is optional
/// - Loan histories keep insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    age: Option<u32>,
    loan_histories: Vec<UserLoanHistory>,
}

impl User {
    pub fn new(name: impl Into<String>, age: Option<u32>) -> Result<Self, NameError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            id: UserId::new(),
            name,
            age,
            loan_histories: Vec::new(),
        })
    }

    /// Rebuild the aggregate from persisted state
    pub(crate) fn restore(
        id: UserId,
        name: String,
        age: Option<u32>,
        loan_histories: Vec<UserLoanHistory>,
    ) -> Self {
        Self {
            id,
            name,
            age,
            loan_histories,
        }
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), NameError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Record a new loan of `book`
    ///
    /// Whether the book is already loaned elsewhere is decided by the caller,
    /// which can see every user's history.
    pub fn loan_book(&mut self, book: &Book) {
        let history = UserLoanHistory::loaned(self.id, book.name());
        self.loan_histories.push(history);
    }

    /// Mark the first history for `book_name` as returned
    ///
    /// First match by name wins, whatever its status. An entry that is
    /// already RETURNED stays RETURNED and later entries are not touched.
    pub fn return_book(&mut self, book_name: &str) -> Result<(), ReturnBookError> {
        let history = self
            .loan_histories
            .iter_mut()
            .find(|history| history.book_name() == book_name)
            .ok_or_else(|| ReturnBookError::NoHistory {
                book_name: book_name.to_string(),
            })?;

        history.do_return();
        Ok(())
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn loan_histories(&self) -> &[UserLoanHistory] {
        &self.loan_histories
    }
}

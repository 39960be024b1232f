use crate::domain::{UserLoanHistory, UserLoanStatus};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Loan history repository port
///
/// Queries across all users. Histories are written as part of the user
/// aggregate; `save` and `save_all` exist for seeding data directly and
/// require the owning user to be stored already.
#[async_trait]
pub trait UserLoanHistoryRepository: Send + Sync {
    async fn save(&self, history: &UserLoanHistory) -> Result<()>;

    async fn save_all(&self, histories: &[UserLoanHistory]) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<UserLoanHistory>>;

    /// Whether any user holds a history for `book_name` in `status`
    async fn exists_by_book_name_and_status(
        &self,
        book_name: &str,
        status: UserLoanStatus,
    ) -> Result<bool>;

    async fn count_by_status(&self, status: UserLoanStatus) -> Result<i64>;
}

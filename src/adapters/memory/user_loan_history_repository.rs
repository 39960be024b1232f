use super::{MemoryDatabase, Result};
use crate::domain::{UserLoanHistory, UserLoanStatus};
use crate::ports::user_loan_history_repository::UserLoanHistoryRepository as UserLoanHistoryRepositoryTrait;
use async_trait::async_trait;

/// In-memory implementation of UserLoanHistoryRepository
pub struct UserLoanHistoryRepository {
    db: MemoryDatabase,
}

impl UserLoanHistoryRepository {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserLoanHistoryRepositoryTrait for UserLoanHistoryRepository {
    async fn save(&self, history: &UserLoanHistory) -> Result<()> {
        self.save_all(std::slice::from_ref(history)).await
    }

    /// Rejects the whole batch if any owner is missing, like a foreign key
    async fn save_all(&self, histories: &[UserLoanHistory]) -> Result<()> {
        let mut tables = self.db.lock()?;

        if let Some(orphan) = histories
            .iter()
            .find(|history| !tables.user_exists(history.user_id()))
        {
            return Err(format!(
                "loan history {} references unknown user {}",
                orphan.id().value(),
                orphan.user_id().value()
            )
            .into());
        }

        for history in histories {
            tables.upsert_history(history.clone());
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<UserLoanHistory>> {
        Ok(self.db.lock()?.loan_histories.clone())
    }

    async fn exists_by_book_name_and_status(
        &self,
        book_name: &str,
        status: UserLoanStatus,
    ) -> Result<bool> {
        let tables = self.db.lock()?;
        Ok(tables
            .loan_histories
            .iter()
            .any(|history| history.book_name() == book_name && history.status() == status))
    }

    async fn count_by_status(&self, status: UserLoanStatus) -> Result<i64> {
        let tables = self.db.lock()?;
        let count = tables
            .loan_histories
            .iter()
            .filter(|history| history.status() == status)
            .count();
        Ok(count as i64)
    }
}

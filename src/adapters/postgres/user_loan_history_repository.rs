use super::{Result, invalid_data};
use crate::domain::{UserId, UserLoanHistory, UserLoanHistoryId, UserLoanStatus};
use crate::ports::user_loan_history_repository::UserLoanHistoryRepository as UserLoanHistoryRepositoryTrait;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// Convert a `user_loan_history` row into the entity
pub(super) fn map_row_to_loan_history(row: &PgRow) -> Result<UserLoanHistory> {
    let status_str: &str = row.get("status");
    let status = UserLoanStatus::from_str(status_str).map_err(invalid_data)?;

    Ok(UserLoanHistory::restore(
        UserLoanHistoryId::from_uuid(row.get("id")),
        UserId::from_uuid(row.get("user_id")),
        row.get("book_name"),
        status,
    ))
}

/// Insert a history or update its status
///
/// Only the status can change after creation.
pub(super) async fn upsert_loan_history(
    conn: &mut PgConnection,
    history: &UserLoanHistory,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_loan_history (id, user_id, book_name, status)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id)
        DO UPDATE SET status = EXCLUDED.status
        "#,
    )
    .bind(history.id().value())
    .bind(history.user_id().value())
    .bind(history.book_name())
    .bind(history.status().as_str())
    .execute(conn)
    .await?;

    Ok(())
}

/// PostgreSQL implementation of UserLoanHistoryRepository
pub struct UserLoanHistoryRepository {
    pool: PgPool,
}

impl UserLoanHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLoanHistoryRepositoryTrait for UserLoanHistoryRepository {
    async fn save(&self, history: &UserLoanHistory) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        upsert_loan_history(&mut conn, history).await
    }

    async fn save_all(&self, histories: &[UserLoanHistory]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for history in histories {
            upsert_loan_history(&mut tx, history).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<UserLoanHistory>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, book_name, status
            FROM user_loan_history
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_loan_history).collect()
    }

    async fn exists_by_book_name_and_status(
        &self,
        book_name: &str,
        status: UserLoanStatus,
    ) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM user_loan_history
                WHERE book_name = $1 AND status = $2
            )
            "#,
        )
        .bind(book_name)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn count_by_status(&self, status: UserLoanStatus) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM user_loan_history
            WHERE status = $1
            "#,
        )
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

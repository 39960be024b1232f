use super::{
    Result, invalid_data,
    user_loan_history_repository::{map_row_to_loan_history, upsert_loan_history},
};
use crate::domain::{User, UserId, UserLoanHistory};
use crate::ports::user_repository::UserRepository as UserRepositoryTrait;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Row, postgres::PgRow};
use std::collections::HashMap;
use uuid::Uuid;

/// Convert a `users` row plus its loan histories into the User aggregate
///
/// `age` is stored as BIGINT; values outside `u32` are rejected.
fn map_row_to_user(row: &PgRow, loan_histories: Vec<UserLoanHistory>) -> Result<User> {
    let age: Option<i64> = row.get("age");
    let age = age
        .map(|age| {
            u32::try_from(age).map_err(|_| invalid_data(format!("age out of range: {}", age)))
        })
        .transpose()?;

    Ok(User::restore(
        UserId::from_uuid(row.get("id")),
        row.get("name"),
        age,
        loan_histories,
    ))
}

async fn upsert_user(conn: &mut PgConnection, user: &User) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (id, name, age)
        VALUES ($1, $2, $3)
        ON CONFLICT (id)
        DO UPDATE SET
            name = EXCLUDED.name,
            age = EXCLUDED.age
        "#,
    )
    .bind(user.id().value())
    .bind(user.name())
    .bind(user.age().map(i64::from))
    .execute(&mut *conn)
    .await?;

    for history in user.loan_histories() {
        upsert_loan_history(&mut *conn, history).await?;
    }

    Ok(())
}

/// PostgreSQL implementation of UserRepository
///
/// Users live in `users`, their histories in `user_loan_history`. Every
/// write runs in one transaction.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_histories(&self, user_id: UserId) -> Result<Vec<UserLoanHistory>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, book_name, status
            FROM user_loan_history
            WHERE user_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_loan_history).collect()
    }

    async fn load_user(&self, row: Option<PgRow>) -> Result<Option<User>> {
        let Some(row) = row else {
            return Ok(None);
        };

        let user_id = UserId::from_uuid(row.get("id"));
        let histories = self.load_histories(user_id).await?;
        map_row_to_user(&row, histories).map(Some)
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn save(&self, user: &User) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        upsert_user(&mut tx, user).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn save_all(&self, users: &[User]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for user in users {
            upsert_user(&mut tx, user).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, age
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        self.load_user(row).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, age
            FROM users
            WHERE name = $1
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        self.load_user(row).await
    }

    /// Two queries: all users, then all histories grouped by owner
    async fn find_all(&self) -> Result<Vec<User>> {
        let user_rows = sqlx::query(
            r#"
            SELECT id, name, age
            FROM users
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let history_rows = sqlx::query(
            r#"
            SELECT id, user_id, book_name, status
            FROM user_loan_history
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut histories_by_user: HashMap<Uuid, Vec<UserLoanHistory>> = HashMap::new();
        for row in &history_rows {
            let history = map_row_to_loan_history(row)?;
            histories_by_user
                .entry(history.user_id().value())
                .or_default()
                .push(history);
        }

        user_rows
            .iter()
            .map(|row| {
                let user_id: Uuid = row.get("id");
                let histories = histories_by_user.remove(&user_id).unwrap_or_default();
                map_row_to_user(row, histories)
            })
            .collect()
    }

    /// Histories are deleted explicitly before the user row, in the same
    /// transaction, even though the foreign key also cascades.
    async fn delete(&self, user: &User) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_loan_history WHERE user_id = $1")
            .bind(user.id().value())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id().value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_loan_history")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }
}

use super::{MemoryDatabase, Result};
use crate::domain::{User, UserId};
use crate::ports::user_repository::UserRepository as UserRepositoryTrait;
use async_trait::async_trait;

/// In-memory implementation of UserRepository
pub struct UserRepository {
    db: MemoryDatabase,
}

impl UserRepository {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn save(&self, user: &User) -> Result<()> {
        self.db.lock()?.upsert_user(user);
        Ok(())
    }

    async fn save_all(&self, users: &[User]) -> Result<()> {
        let mut tables = self.db.lock()?;
        for user in users {
            tables.upsert_user(user);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let tables = self.db.lock()?;
        Ok(tables
            .users
            .iter()
            .find(|row| row.id == id)
            .map(|row| tables.load_user(row)))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let tables = self.db.lock()?;
        Ok(tables
            .users
            .iter()
            .find(|row| row.name == name)
            .map(|row| tables.load_user(row)))
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let tables = self.db.lock()?;
        Ok(tables.users.iter().map(|row| tables.load_user(row)).collect())
    }

    async fn delete(&self, user: &User) -> Result<()> {
        let mut tables = self.db.lock()?;
        let user_id = user.id();
        tables
            .loan_histories
            .retain(|history| history.user_id() != user_id);
        tables.users.retain(|row| row.id != user_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut tables = self.db.lock()?;
        tables.loan_histories.clear();
        tables.users.clear();
        Ok(())
    }
}

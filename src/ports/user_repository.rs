use crate::domain::{User, UserId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// User repository port
///
/// Works on the whole aggregate: every user returned carries its loan
/// histories in insertion order, and every write covers the user row and
/// its histories atomically.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update the user together with its loan histories
    async fn save(&self, user: &User) -> Result<()>;

    async fn save_all(&self, users: &[User]) -> Result<()>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Find a user by exact name
    ///
    /// When several users share the name, the one saved first is returned.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>>;

    /// All users with their loan histories loaded
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Delete the user and every loan history it owns
    async fn delete(&self, user: &User) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;
}

//! In-memory adapters
//!
//! All three repositories share one set of tables behind a single mutex, so
//! they see the same rows the way PostgreSQL repositories share a database.
//! Holding the guard for a whole call makes every multi-row write atomic.

pub mod book_repository;
pub mod user_loan_history_repository;
pub mod user_repository;

pub use book_repository::BookRepository;
pub use user_loan_history_repository::UserLoanHistoryRepository;
pub use user_repository::UserRepository;

use crate::domain::{Book, User, UserId, UserLoanHistory};
use std::sync::{Arc, Mutex, MutexGuard};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Row of the users table (histories live in their own table)
#[derive(Debug, Clone)]
struct UserRow {
    id: UserId,
    name: String,
    age: Option<u32>,
}

/// Tables kept in insertion order
#[derive(Debug, Default)]
struct Tables {
    books: Vec<Book>,
    users: Vec<UserRow>,
    loan_histories: Vec<UserLoanHistory>,
}

impl Tables {
    fn load_user(&self, row: &UserRow) -> User {
        let histories = self
            .loan_histories
            .iter()
            .filter(|history| history.user_id() == row.id)
            .cloned()
            .collect();

        User::restore(row.id, row.name.clone(), row.age, histories)
    }

    fn upsert_user(&mut self, user: &User) {
        let row = UserRow {
            id: user.id(),
            name: user.name().to_string(),
            age: user.age(),
        };

        match self.users.iter_mut().find(|existing| existing.id == row.id) {
            Some(existing) => *existing = row,
            None => self.users.push(row),
        }

        for history in user.loan_histories() {
            self.upsert_history(history.clone());
        }
    }

    fn upsert_history(&mut self, history: UserLoanHistory) {
        match self
            .loan_histories
            .iter_mut()
            .find(|existing| existing.id() == history.id())
        {
            Some(existing) => *existing = history,
            None => self.loan_histories.push(history),
        }
    }

    fn user_exists(&self, id: UserId) -> bool {
        self.users.iter().any(|row| row.id == id)
    }
}

/// Shared in-memory database handle
///
/// Cloning is cheap; clones point at the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| "in-memory database lock poisoned".into())
    }
}

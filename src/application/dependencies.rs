use std::sync::Arc;

use crate::ports::{BookRepository, UserLoanHistoryRepository, UserRepository};

/// Service dependencies
///
/// Plain data passed to every service function, so each operation names
/// the stores it touches and tests can swap in any adapter.
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub loan_history_repository: Arc<dyn UserLoanHistoryRepository>,
}

pub mod book_repository;
pub mod user_loan_history_repository;
pub mod user_repository;

pub use book_repository::{BookRepository, BookTypeCount};
pub use user_loan_history_repository::UserLoanHistoryRepository;
pub use user_repository::UserRepository;

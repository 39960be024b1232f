mod book_service;
mod statistics;

pub use book_service::{loan_book, return_book, save_book};
pub use statistics::{count_loaned_book, get_book_statistics};

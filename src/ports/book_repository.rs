use crate::domain::{Book, BookType};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Book count of one type (group-by result)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookTypeCount {
    pub book_type: BookType,
    pub count: i64,
}

/// Book repository port
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert or update a book
    async fn save(&self, book: &Book) -> Result<()>;

    async fn save_all(&self, books: &[Book]) -> Result<()>;

    /// Find a book by exact name
    ///
    /// Names are not unique. When several books share the name, the one
    /// saved first is returned.
    async fn find_by_name(&self, name: &str) -> Result<Option<Book>>;

    async fn find_all(&self) -> Result<Vec<Book>>;

    /// Count books per type
    ///
    /// Only types with at least one book appear. Order is unspecified.
    async fn get_stats(&self) -> Result<Vec<BookTypeCount>>;

    async fn delete_all(&self) -> Result<()>;
}

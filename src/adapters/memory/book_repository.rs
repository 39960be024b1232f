use super::{MemoryDatabase, Result};
use crate::domain::{Book, BookType};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, BookTypeCount};
use async_trait::async_trait;
use std::collections::HashMap;

/// In-memory implementation of BookRepository
pub struct BookRepository {
    db: MemoryDatabase,
}

impl BookRepository {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn save(&self, book: &Book) -> Result<()> {
        self.save_all(std::slice::from_ref(book)).await
    }

    async fn save_all(&self, books: &[Book]) -> Result<()> {
        let mut tables = self.db.lock()?;
        for book in books {
            match tables.books.iter_mut().find(|existing| existing.id() == book.id()) {
                Some(existing) => *existing = book.clone(),
                None => tables.books.push(book.clone()),
            }
        }
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Book>> {
        let tables = self.db.lock()?;
        Ok(tables.books.iter().find(|book| book.name() == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.db.lock()?.books.clone())
    }

    async fn get_stats(&self) -> Result<Vec<BookTypeCount>> {
        let tables = self.db.lock()?;

        let mut counts: HashMap<BookType, i64> = HashMap::new();
        for book in &tables.books {
            *counts.entry(book.book_type()).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(book_type, count)| BookTypeCount { book_type, count })
            .collect())
    }

    async fn delete_all(&self) -> Result<()> {
        self.db.lock()?.books.clear();
        Ok(())
    }
}

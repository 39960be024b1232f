use super::{BookId, BookType, NameError, errors::validate_name};

/// Book aggregate
///
/// Business rules:
/// - The name must not be blank (checked once, at construction)
/// - Names are not unique; several books may share one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    name: String,
    book_type: BookType,
}

impl Book {
    pub fn new(name: impl Into<String>, book_type: BookType) -> Result<Self, NameError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            id: BookId::new(),
            name,
            book_type,
        })
    }

    /// Rebuild a book from persisted state
    ///
    /// Rows were validated when first written, so no check is repeated here.
    pub(crate) fn restore(id: BookId, name: String, book_type: BookType) -> Self {
        Self {
            id,
            name,
            book_type,
        }
    }

    /// Test data builder with defaults
    ///
    /// # Panics
    /// Panics if `name` is blank.
    pub fn fixture(name: &str, book_type: BookType) -> Self {
        Self::new(name, book_type).expect("fixture name must not be blank")
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn book_type(&self) -> BookType {
        self.book_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_new() {
        let book = Book::new("Effective Java", BookType::Computer).unwrap();
        assert_eq!(book.name(), "Effective Java");
        assert_eq!(book.book_type(), BookType::Computer);
    }

    #[test]
    fn test_book_new_rejects_blank_name() {
        assert_eq!(Book::new("", BookType::Science), Err(NameError::Blank));
        assert_eq!(Book::new("   ", BookType::Science), Err(NameError::Blank));
    }

    #[test]
    fn test_books_get_distinct_ids() {
        let a = Book::fixture("A", BookType::Computer);
        let b = Book::fixture("A", BookType::Computer);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_book_restore_keeps_identity() {
        let id = BookId::new();
        let book = Book::restore(id, "Cosmos".to_string(), BookType::Science);
        assert_eq!(book.id(), id);
        assert_eq!(book.name(), "Cosmos");
    }
}

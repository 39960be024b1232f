use super::{Result, invalid_data};
use crate::domain::{Book, BookId, BookType};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, BookTypeCount};
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Row, postgres::PgRow};
use std::str::FromStr;

fn parse_book_type(row: &PgRow) -> Result<BookType> {
    let type_str: &str = row.get("type");
    BookType::from_str(type_str).map_err(invalid_data)
}

/// Convert a `book` row into the Book entity
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    Ok(Book::restore(
        BookId::from_uuid(row.get("id")),
        row.get("name"),
        parse_book_type(row)?,
    ))
}

async fn upsert_book(conn: &mut PgConnection, book: &Book) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO book (id, name, type)
        VALUES ($1, $2, $3)
        ON CONFLICT (id)
        DO UPDATE SET
            name = EXCLUDED.name,
            type = EXCLUDED.type
        "#,
    )
    .bind(book.id().value())
    .bind(book.name())
    .bind(book.book_type().as_str())
    .execute(conn)
    .await?;

    Ok(())
}

/// PostgreSQL implementation of BookRepository
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn save(&self, book: &Book) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        upsert_book(&mut conn, book).await
    }

    /// All books are written in one transaction
    async fn save_all(&self, books: &[Book]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for book in books {
            upsert_book(&mut tx, book).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, type
            FROM book
            WHERE name = $1
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, type
            FROM book
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_book).collect()
    }

    async fn get_stats(&self) -> Result<Vec<BookTypeCount>> {
        let rows = sqlx::query(
            r#"
            SELECT type, COUNT(*) AS count
            FROM book
            GROUP BY type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<BookTypeCount> {
                Ok(BookTypeCount {
                    book_type: parse_book_type(row)?,
                    count: row.get("count"),
                })
            })
            .collect()
    }

    async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM book").execute(&self.pool).await?;
        Ok(())
    }
}

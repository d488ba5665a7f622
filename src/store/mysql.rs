use async_trait::async_trait;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions},
    Connection, FromRow,
};

use crate::model::{Book, BookInput};

use super::{BookStore, StoreError};

const CREATE_BOOK_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS book
(
    book_id BIGINT NOT NULL AUTO_INCREMENT,
    name CHAR(100),
    page INT,
    author CHAR(100),
    PRIMARY KEY (book_id)
) DEFAULT CHARSET = utf8mb4
"#;

const INSERT_BOOK: &str = "INSERT INTO book (name, page, author) VALUES (?, ?, ?)";
const UPDATE_BOOK: &str = "UPDATE book SET name = ?, page = ?, author = ? WHERE book_id = ?";
const SELECT_BOOK: &str = "SELECT name, author, page FROM book WHERE book_id = ?";
const SELECT_BOOKS: &str = "SELECT name, author, page FROM book";
const DELETE_BOOK: &str = "DELETE FROM book WHERE book_id = ?";

#[derive(Debug, FromRow)]
struct BookRow {
    name: Option<String>,
    author: Option<String>,
    page: Option<i32>,
}

impl BookRow {
    fn into_book(self, book_id: Option<i64>) -> Book {
        Book {
            book_id,
            name: self.name,
            page: self.page,
            author: self.author,
        }
    }
}

/// [`BookStore`] backed by a MySQL connection pool.
#[derive(Debug, Clone)]
pub struct MySqlBookStore {
    pool: MySqlPool,
}

impl MySqlBookStore {
    /// Creates the pool lazily and verifies that the database is reachable.
    pub async fn connect(
        options: MySqlConnectOptions,
        max_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);

        let store = Self { pool };

        store.ping().await?;

        Ok(store)
    }

    #[tracing::instrument(skip_all)]
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;

        conn.ping().await?;

        tracing::debug!("Database reachable");

        Ok(())
    }

    /// Creates the `book` table if it does not exist.
    #[tracing::instrument(skip_all)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_BOOK_TABLE).execute(&self.pool).await?;

        tracing::debug!("Schema ensured");

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl BookStore for MySqlBookStore {
    async fn create(&self, book: &BookInput) -> Result<i64, StoreError> {
        let result = sqlx::query(INSERT_BOOK)
            .bind(&book.name)
            .bind(book.page)
            .bind(&book.author)
            .execute(&self.pool)
            .await?;

        let book_id = result.last_insert_id();

        i64::try_from(book_id).map_err(|_| StoreError::IdOverflow(book_id))
    }

    async fn update(&self, book_id: i64, book: &BookInput) -> Result<(), StoreError> {
        let result = sqlx::query(UPDATE_BOOK)
            .bind(&book.name)
            .bind(book.page)
            .bind(&book.author)
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        tracing::trace!(book_id, rows_affected = result.rows_affected(), "Updated");

        Ok(())
    }

    async fn get(&self, book_id: i64) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(SELECT_BOOK)
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.into_book(Some(book_id))))
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query_as::<_, BookRow>(SELECT_BOOKS)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|row| row.into_book(None)).collect())
    }

    async fn delete(&self, book_id: i64) -> Result<(), StoreError> {
        let result = sqlx::query(DELETE_BOOK)
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        tracing::trace!(book_id, rows_affected = result.rows_affected(), "Deleted");

        Ok(())
    }
}

use async_trait::async_trait;

use crate::model::{Book, BookInput};

#[cfg(test)]
pub mod memory;
pub mod mysql;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Generated id {0} does not fit into a signed 64-bit integer")]
    IdOverflow(u64),
}

/// Storage of books.
///
/// Implementations are shared by all in-flight requests and must be safe for concurrent use.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Inserts a book and returns the id assigned by the storage.
    async fn create(&self, book: &BookInput) -> Result<i64, StoreError>;

    /// Overwrites all mutable fields of the book with the given id.
    ///
    /// Succeeds even if no book has the given id.
    async fn update(&self, book_id: i64, book: &BookInput) -> Result<(), StoreError>;

    /// Returns the book with the given id, `book_id` populated.
    async fn get(&self, book_id: i64) -> Result<Option<Book>, StoreError>;

    /// Returns all books, without `book_id`.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    /// Succeeds even if no book has the given id.
    async fn delete(&self, book_id: i64) -> Result<(), StoreError>;
}

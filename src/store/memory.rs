use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::model::{Book, BookInput};

use super::{BookStore, StoreError};

/// [`BookStore`] keeping books in memory, counting every call it receives.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: Mutex<Books>,
    calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct Books {
    last_id: i64,
    rows: BTreeMap<i64, BookInput>,
}

impl InMemoryBookStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn books(&self) -> std::sync::MutexGuard<'_, Books> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.books.lock().expect("Poisoned")
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn create(&self, book: &BookInput) -> Result<i64, StoreError> {
        let mut books = self.books();

        books.last_id += 1;
        let book_id = books.last_id;
        books.rows.insert(book_id, book.clone());

        Ok(book_id)
    }

    async fn update(&self, book_id: i64, book: &BookInput) -> Result<(), StoreError> {
        if let Some(row) = self.books().rows.get_mut(&book_id) {
            *row = book.clone();
        }

        Ok(())
    }

    async fn get(&self, book_id: i64) -> Result<Option<Book>, StoreError> {
        let books = self.books();

        Ok(books
            .rows
            .get(&book_id)
            .map(|row| row.clone().into_book(Some(book_id))))
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let books = self.books();

        Ok(books
            .rows
            .values()
            .map(|row| row.clone().into_book(None))
            .collect())
    }

    async fn delete(&self, book_id: i64) -> Result<(), StoreError> {
        self.books().rows.remove(&book_id);

        Ok(())
    }
}

/// [`BookStore`] failing every call, as a database that went away would.
#[derive(Debug, Default)]
pub struct UnavailableBookStore;

impl UnavailableBookStore {
    fn error() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl BookStore for UnavailableBookStore {
    async fn create(&self, _: &BookInput) -> Result<i64, StoreError> {
        Err(Self::error())
    }

    async fn update(&self, _: i64, _: &BookInput) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn get(&self, _: i64) -> Result<Option<Book>, StoreError> {
        Err(Self::error())
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Err(Self::error())
    }

    async fn delete(&self, _: i64) -> Result<(), StoreError> {
        Err(Self::error())
    }
}

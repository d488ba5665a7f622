use serde::{Deserialize, Serialize};

/// A stored book.
///
/// `book_id` is only present when the book was read by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    pub name: Option<String>,
    pub page: Option<i32>,
    pub author: Option<String>,
}

/// The mutable fields of a book, as sent by clients on create and update.
///
/// Missing fields are stored as `NULL`. Unknown fields, `book_id` included, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookInput {
    pub name: Option<String>,
    pub page: Option<i32>,
    pub author: Option<String>,
}

impl BookInput {
    pub fn into_book(self, book_id: Option<i64>) -> Book {
        Book {
            book_id,
            name: self.name,
            page: self.page,
            author: self.author,
        }
    }
}

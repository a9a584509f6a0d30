//! Repository layer for in-memory storage

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding the shared stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository whose book store starts with `books`
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::with_books(books),
        }
    }
}

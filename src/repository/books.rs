//! In-memory book storage

use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Book collection guarded by a single reader/writer lock.
///
/// Clones share the same underlying collection.
#[derive(Clone, Default)]
pub struct BooksRepository {
    storage: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with `books`, in order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(books)),
        }
    }

    /// List all books in insertion order
    pub async fn list_all(&self) -> Vec<Book> {
        self.storage.read().await.clone()
    }

    /// Append a book, rejecting it if a required detail is missing
    pub async fn add(&self, book: Book) -> AppResult<()> {
        if let Err(errors) = book.validate() {
            tracing::debug!("Book id={} failed validation: {}", book.id, errors);
            return Err(AppError::Validation(
                "the provided book details is empty".to_string(),
            ));
        }

        self.storage.write().await.push(book);
        Ok(())
    }

    /// First book with the given id, or `None` when nothing matches
    pub async fn find(&self, id: i64) -> AppResult<Option<Book>> {
        if id < 0 {
            return Err(AppError::InvalidArgument(
                "the provided book id is negative".to_string(),
            ));
        }

        let storage = self.storage.read().await;
        Ok(storage.iter().find(|book| book.id == id).cloned())
    }

    /// First book with the given id, or the zero-value book when nothing matches.
    ///
    /// A miss is indistinguishable from a stored all-empty book; use
    /// [`BooksRepository::find`] when the difference matters.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Book> {
        self.find(id).await.map(Option::unwrap_or_default)
    }

    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

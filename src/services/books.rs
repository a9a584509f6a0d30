//! Book catalog service

use crate::{
    error::AppResult,
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list_all().await
    }

    /// Store a new book and return the stored copy
    pub async fn create(&self, book: Book) -> AppResult<Book> {
        match self.repository.books.add(book.clone()).await {
            Ok(()) => {
                tracing::info!("Book added: {}", book);
                Ok(book)
            }
            Err(e) => {
                tracing::warn!("Rejected book id={}: {}", book.id, e);
                Err(e)
            }
        }
    }

    /// Get a book by ID, falling back to the zero-value book
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    /// Get a book by ID, `None` when absent
    pub async fn find(&self, id: i64) -> AppResult<Option<Book>> {
        self.repository.books.find(id).await
    }

    pub async fn count(&self) -> usize {
        self.repository.books.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::book::demo_books};

    #[tokio::test]
    async fn test_create_returns_stored_copy() {
        let service = BooksService::new(Repository::default());
        let book = Book::new(3, "Dune", "Frank Herbert", "English", &["SciFi"]);

        let created = service.create(book.clone()).await.unwrap();
        assert_eq!(created, book);
        assert_eq!(service.list().await, vec![book]);
    }

    #[tokio::test]
    async fn test_create_rejects_empty() {
        let service = BooksService::new(Repository::new(demo_books()));
        let result = service.create(Book::default()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(service.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_lookups() {
        let service = BooksService::new(Repository::new(demo_books()));

        assert_eq!(service.get_by_id(2).await.unwrap().title, "Karnali Blues");
        assert_eq!(service.get_by_id(42).await.unwrap(), Book::default());
        assert!(service.find(42).await.unwrap().is_none());
    }
}

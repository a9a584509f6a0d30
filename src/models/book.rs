//! Book model

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book record
///
/// Missing fields decode to their zero value, so a partial JSON object is
/// accepted here and rejected later by [`Book::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Caller-supplied identifier (not unique)
    #[validate(range(min = 0, message = "Book id must not be negative"))]
    pub id: i64,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Language is required"))]
    pub language: String,
    /// Genre labels; `null` and `[]` are distinct
    #[validate(required(message = "Genres are required"))]
    pub genres: Option<Vec<String>>,
}

impl Book {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        language: impl Into<String>,
        genres: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            language: language.into(),
            genres: Some(genres.iter().map(|g| g.to_string()).collect()),
        }
    }

    /// True when the book is missing a required detail.
    ///
    /// An empty `genres` list is accepted; only an absent one is rejected.
    pub fn is_empty(&self) -> bool {
        self.validate().is_err()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genres = self.genres.as_deref().unwrap_or_default().join(" ");
        write!(
            f,
            "Book ID: {}, Title: {}, Author: {}, Language: {}, Genres: [{}]",
            self.id, self.title, self.author, self.language, genres
        )
    }
}

/// Records loaded at startup when `store.seed_demo_data` is set
pub fn demo_books() -> Vec<Book> {
    vec![
        Book::new(1, "1984", "George Orwell", "English", &["Dystopian", "Fiction"]),
        Book::new(2, "Karnali Blues", "BuddhiSagar", "Nepali", &["Novel", "Fiction"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_required_fields() {
        let book = Book::new(3, "Dune", "Frank Herbert", "English", &["SciFi"]);
        assert!(!book.is_empty());

        assert!(Book { title: String::new(), ..book.clone() }.is_empty());
        assert!(Book { author: String::new(), ..book.clone() }.is_empty());
        assert!(Book { language: String::new(), ..book.clone() }.is_empty());
        assert!(Book { id: -1, ..book.clone() }.is_empty());
        assert!(Book { genres: None, ..book.clone() }.is_empty());
        assert!(Book::default().is_empty());
    }

    #[test]
    fn test_validation_reports_failing_fields() {
        let book = Book {
            id: -1,
            title: String::new(),
            genres: None,
            ..Book::new(3, "Dune", "Frank Herbert", "English", &[])
        };
        let errors = book.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("id"));
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("genres"));
        assert!(!fields.contains_key("author"));
        assert!(!fields.contains_key("language"));
    }

    #[test]
    fn test_empty_genres_accepted() {
        let book = Book::new(0, "Untitled", "Anonymous", "English", &[]);
        assert_eq!(book.genres, Some(vec![]));
        assert!(!book.is_empty());
    }

    #[test]
    fn test_decode_missing_fields() {
        let book: Book = serde_json::from_value(json!({ "id": 7, "title": "Partial" })).unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Partial");
        assert_eq!(book.author, "");
        assert_eq!(book.genres, None);

        let book: Book = serde_json::from_value(json!({ "genres": [] })).unwrap();
        assert_eq!(book.genres, Some(vec![]));
    }

    #[test]
    fn test_zero_value_encoding() {
        let value = serde_json::to_value(Book::default()).unwrap();
        assert_eq!(
            value,
            json!({ "id": 0, "title": "", "author": "", "language": "", "genres": null })
        );
    }

    #[test]
    fn test_display() {
        let books = demo_books();
        assert_eq!(
            books[0].to_string(),
            "Book ID: 1, Title: 1984, Author: George Orwell, Language: English, Genres: [Dystopian Fiction]"
        );
        assert_eq!(
            Book::default().to_string(),
            "Book ID: 0, Title: , Author: , Language: , Genres: []"
        );
    }
}

//! Book endpoints

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    responses(
        (status = 200, description = "All stored books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Create a book
///
/// The body is decoded as JSON whatever its content type.
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book,
            headers(("Location" = String, description = "Path of the created book"))),
        (status = 415, description = "Malformed JSON body", body = crate::error::ErrorResponse),
        (status = 500, description = "Missing book details or unreadable body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Book>)> {
    let body = body.map_err(|e| AppError::BodyRead(e.body_text()))?;
    let book: Book = serde_json::from_slice(&body)
        .map_err(|e| AppError::UnsupportedMediaType(e.to_string()))?;

    let book = state
        .services
        .books
        .create(book)
        .await
        .map_err(|e| status_policy(&state, e))?;

    let location = format!("/book/{}", book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// Get a book by ID
///
/// An unknown ID yields the zero-value book unless strict status codes are on.
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details (zero-value book when absent)", body = Book),
        (status = 404, description = "Negative ID, or unknown ID in strict mode", body = crate::error::ErrorResponse),
        (status = 500, description = "Non-numeric ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    lookup_book(&state, &id).await.map(Json)
}

/// `/book/` with an empty ID segment, which never parses
pub async fn get_book_empty_id(State(state): State<AppState>) -> AppResult<Json<Book>> {
    lookup_book(&state, "").await.map(Json)
}

async fn lookup_book(state: &AppState, raw_id: &str) -> AppResult<Book> {
    let id: i64 = raw_id
        .parse()
        .map_err(|e| AppError::Internal(format!("invalid book id {:?}: {}", raw_id, e)))?;

    if state.config.api.strict_status_codes {
        state
            .services
            .books
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    } else {
        state.services.books.get_by_id(id).await
    }
}

/// Fallback for unsupported methods on `/book`
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
}

fn status_policy(state: &AppState, error: AppError) -> AppError {
    if state.config.api.strict_status_codes {
        error.strict()
    } else {
        error
    }
}

//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod home;
pub mod openapi;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home::home_page))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route(
            "/book",
            get(books::list_books)
                .post(books::create_book)
                .head(books::method_not_allowed)
                .fallback(books::method_not_allowed),
        )
        .route("/book/", get(books::get_book_empty_id))
        .route("/book/:id", get(books::get_book))
        // OpenAPI documentation
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

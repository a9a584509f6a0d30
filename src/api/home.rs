//! Home page

/// Plain-text welcome message
pub async fn home_page() -> &'static str {
    "Welcome to home page."
}

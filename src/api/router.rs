use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, count_loaned_book, delete_user, get_book_statistics, get_user_loan_histories,
    get_users, loan_book, return_book, save_book, save_user, update_user_name,
};

/// Creates the API router
///
/// Book endpoints:
/// - POST /book - Register a book
/// - POST /book/loan - Lend a book
/// - GET /book/loan - Count books on loan
/// - PUT /book/return - Return a book
/// - GET /book/stat - Book count per type
///
/// User endpoints:
/// - POST /user, GET /user, PUT /user, DELETE /user?name=
/// - GET /user/loan - Loan history of every user
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Book endpoints
        .route("/book", post(save_book))
        .route("/book/loan", post(loan_book).get(count_loaned_book))
        .route("/book/return", put(return_book))
        .route("/book/stat", get(get_book_statistics))
        // User endpoints
        .route(
            "/user",
            post(save_user)
                .get(get_users)
                .put(update_user_name)
                .delete(delete_user),
        )
        .route("/user/loan", get(get_user_loan_histories))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

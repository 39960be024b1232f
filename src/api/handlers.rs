use crate::application::{
    ServiceDependencies,
    book::{
        count_loaned_book as execute_count_loaned_book,
        get_book_statistics as execute_get_book_statistics, loan_book as execute_loan_book,
        return_book as execute_return_book, save_book as execute_save_book,
    },
    user::{
        delete_user as execute_delete_user,
        get_user_loan_histories as execute_get_user_loan_histories,
        get_users as execute_get_users, save_user as execute_save_user,
        update_user_name as execute_update_user_name,
    },
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    extractors::{AppJson, AppQuery},
    types::{
        BookLoanRequest, BookRequest, BookReturnRequest, BookStatResponse, DeleteUserQuery,
        UserCreateRequest, UserLoanHistoryResponse, UserResponse, UserUpdateRequest,
    },
};

// ============================================================================
// State
// ============================================================================

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Book handlers
// ============================================================================

/// POST /book - register a book
pub async fn save_book(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<BookRequest>,
) -> Result<StatusCode, ApiError> {
    execute_save_book(&state.service_deps, req.into_command()).await?;
    Ok(StatusCode::CREATED)
}

/// POST /book/loan - lend a book to a user
///
/// Rejected with 409 while anyone holds the book.
pub async fn loan_book(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<BookLoanRequest>,
) -> Result<StatusCode, ApiError> {
    execute_loan_book(&state.service_deps, req.into_command()).await?;
    Ok(StatusCode::OK)
}

/// PUT /book/return - return a book
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<BookReturnRequest>,
) -> Result<StatusCode, ApiError> {
    execute_return_book(&state.service_deps, req.into_command()).await?;
    Ok(StatusCode::OK)
}

/// GET /book/loan - number of books currently on loan
pub async fn count_loaned_book(State(state): State<Arc<AppState>>) -> Result<Json<i64>, ApiError> {
    let count = execute_count_loaned_book(&state.service_deps).await?;
    Ok(Json(count))
}

/// GET /book/stat - book count per type
pub async fn get_book_statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookStatResponse>>, ApiError> {
    let stats = execute_get_book_statistics(&state.service_deps).await?;
    Ok(Json(stats.into_iter().map(BookStatResponse::from).collect()))
}

// ============================================================================
// User handlers
// ============================================================================

/// POST /user - register a user
pub async fn save_user(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<UserCreateRequest>,
) -> Result<StatusCode, ApiError> {
    execute_save_user(&state.service_deps, req.into_command()).await?;
    Ok(StatusCode::CREATED)
}

/// GET /user - list users
pub async fn get_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = execute_get_users(&state.service_deps).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PUT /user - rename a user
pub async fn update_user_name(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<UserUpdateRequest>,
) -> Result<StatusCode, ApiError> {
    execute_update_user_name(&state.service_deps, req.into_command()).await?;
    Ok(StatusCode::OK)
}

/// DELETE /user?name= - delete a user and its loan histories
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<DeleteUserQuery>,
) -> Result<StatusCode, ApiError> {
    execute_delete_user(&state.service_deps, &query.name).await?;
    Ok(StatusCode::OK)
}

/// GET /user/loan - loan history of every user
pub async fn get_user_loan_histories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserLoanHistoryResponse>>, ApiError> {
    let histories = execute_get_user_loan_histories(&state.service_deps).await?;
    Ok(Json(
        histories
            .into_iter()
            .map(UserLoanHistoryResponse::from)
            .collect(),
    ))
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::user::{BookHistoryView, UserLoanHistoryView, UserView};
use crate::domain::{BookType, UserId, commands::*};
use crate::ports::BookTypeCount;

// ============================================================================
// Requests
// ============================================================================

/// POST /book
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub book_type: BookType,
}

impl BookRequest {
    pub fn into_command(self) -> SaveBook {
        SaveBook {
            name: self.name,
            book_type: self.book_type,
        }
    }
}

/// POST /book/loan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookLoanRequest {
    pub user_name: String,
    pub book_name: String,
}

impl BookLoanRequest {
    pub fn into_command(self) -> LoanBook {
        LoanBook {
            user_name: self.user_name,
            book_name: self.book_name,
        }
    }
}

/// PUT /book/return
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookReturnRequest {
    pub user_name: String,
    pub book_name: String,
}

impl BookReturnRequest {
    pub fn into_command(self) -> ReturnBook {
        ReturnBook {
            user_name: self.user_name,
            book_name: self.book_name,
        }
    }
}

/// POST /user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
}

impl UserCreateRequest {
    pub fn into_command(self) -> SaveUser {
        SaveUser {
            name: self.name,
            age: self.age,
        }
    }
}

/// PUT /user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub id: Uuid,
    pub name: String,
}

impl UserUpdateRequest {
    pub fn into_command(self) -> UpdateUserName {
        UpdateUserName {
            id: UserId::from_uuid(self.id),
            name: self.name,
        }
    }
}

/// DELETE /user?name=
#[derive(Debug, Deserialize)]
pub struct DeleteUserQuery {
    pub name: String,
}

// ============================================================================
// Responses
// ============================================================================

/// GET /book/stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStatResponse {
    #[serde(rename = "type")]
    pub book_type: BookType,
    pub count: i64,
}

impl From<BookTypeCount> for BookStatResponse {
    fn from(stat: BookTypeCount) -> Self {
        Self {
            book_type: stat.book_type,
            count: stat.count,
        }
    }
}

/// GET /user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub age: Option<u32>,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            id: view.id.value(),
            name: view.name,
            age: view.age,
        }
    }
}

/// GET /user/loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLoanHistoryResponse {
    pub name: String,
    pub books: Vec<BookHistoryResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookHistoryResponse {
    pub name: String,
    pub is_return: bool,
}

impl From<BookHistoryView> for BookHistoryResponse {
    fn from(view: BookHistoryView) -> Self {
        Self {
            name: view.name,
            is_return: view.is_return,
        }
    }
}

impl From<UserLoanHistoryView> for UserLoanHistoryResponse {
    fn from(view: UserLoanHistoryView) -> Self {
        Self {
            name: view.name,
            books: view.books.into_iter().map(BookHistoryResponse::from).collect(),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

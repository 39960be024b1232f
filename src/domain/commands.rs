use super::{BookType, UserId};

/// Command: register a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveBook {
    pub name: String,
    pub book_type: BookType,
}

/// Command: lend a book to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanBook {
    pub user_name: String,
    pub book_name: String,
}

/// Command: a user returns a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnBook {
    pub user_name: String,
    pub book_name: String,
}

/// Command: register a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveUser {
    pub name: String,
    pub age: Option<u32>,
}

/// Command: rename a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserName {
    pub id: UserId,
    pub name: String,
}

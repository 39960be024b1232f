use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Book ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

/// User ID - aggregate root ID of the user context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// Loan history ID - an entity inside the user aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserLoanHistoryId(Uuid);

impl UserLoanHistoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserLoanHistoryId {
    fn default() -> Self {
        Self::new()
    }
}

/// Book category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookType {
    Computer,
    Economy,
    Society,
    Language,
    Science,
}

impl BookType {
    /// Name stored in the database column
    pub fn as_str(&self) -> &'static str {
        match self {
            BookType::Computer => "COMPUTER",
            BookType::Economy => "ECONOMY",
            BookType::Society => "SOCIETY",
            BookType::Language => "LANGUAGE",
            BookType::Science => "SCIENCE",
        }
    }
}

impl std::str::FromStr for BookType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPUTER" => Ok(BookType::Computer),
            "ECONOMY" => Ok(BookType::Economy),
            "SOCIETY" => Ok(BookType::Society),
            "LANGUAGE" => Ok(BookType::Language),
            "SCIENCE" => Ok(BookType::Science),
            _ => Err(format!("Invalid book type: {}", s)),
        }
    }
}

/// Loan status of a single loan history entry
///
/// Only ever moves from `Loaned` to `Returned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserLoanStatus {
    /// Currently on loan
    Loaned,
    /// Returned
    Returned,
}

impl UserLoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserLoanStatus::Loaned => "LOANED",
            UserLoanStatus::Returned => "RETURNED",
        }
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, UserLoanStatus::Returned)
    }
}

impl std::str::FromStr for UserLoanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOANED" => Ok(UserLoanStatus::Loaned),
            "RETURNED" => Ok(UserLoanStatus::Returned),
            _ => Err(format!("Invalid loan status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_id_creation() {
        let id1 = UserId::new();
        let id2 = UserId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_user_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.value(), uuid);
    }

    #[test]
    fn test_book_type_parses_stored_name() {
        for book_type in [
            BookType::Computer,
            BookType::Economy,
            BookType::Society,
            BookType::Language,
            BookType::Science,
        ] {
            assert_eq!(BookType::from_str(book_type.as_str()), Ok(book_type));
        }
    }

    #[test]
    fn test_book_type_rejects_unknown_name() {
        assert!(BookType::from_str("computer").is_err());
        assert!(BookType::from_str("NOVEL").is_err());
    }

    #[test]
    fn test_book_type_serializes_as_upper_case() {
        let json = serde_json::to_string(&BookType::Computer).unwrap();
        assert_eq!(json, "\"COMPUTER\"");
    }

    #[test]
    fn test_loan_status_is_returned() {
        assert!(!UserLoanStatus::Loaned.is_returned());
        assert!(UserLoanStatus::Returned.is_returned());
    }

    #[test]
    fn test_loan_status_from_str() {
        assert_eq!(UserLoanStatus::from_str("LOANED"), Ok(UserLoanStatus::Loaned));
        assert_eq!(UserLoanStatus::from_str("RETURNED"), Ok(UserLoanStatus::Returned));
        assert!(UserLoanStatus::from_str("OVERDUE").is_err());
    }
}

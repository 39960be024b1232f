/// Name validation error
///
/// Raised when a book or user would be created (or renamed) with a blank name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Empty or whitespace-only name
    Blank,
}

/// Return error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// The user has no loan history for this book name
    NoHistory { book_name: String },
}

/// Shared non-blank rule for entity names
pub(crate) fn validate_name(name: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Blank);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_text() {
        assert_eq!(validate_name("A"), Ok(()));
        assert_eq!(validate_name("  padded  "), Ok(()));
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        for blank in ["", " ", "\t", "\n  "] {
            assert_eq!(validate_name(blank), Err(NameError::Blank));
        }
    }
}

//! Validation rules for operation inputs.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{EditError, Result};

/// Validates text to search for.
pub fn validate_search_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(EditError::InvalidInput(
            text.to_string(),
            "search text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates a 1-based occurrence index.
pub fn validate_occurrence(occurrence: usize) -> Result<()> {
    if occurrence == 0 {
        return Err(EditError::InvalidInput(
            occurrence.to_string(),
            "occurrence is 1-based".to_string(),
        ));
    }
    Ok(())
}

/// Validates a file-scoping glob.
///
/// ## Rules
/// - Not empty
/// - Relative to the project root (no leading `/` or drive letter)
/// - No `..` segments (cannot navigate outside the root)
pub fn validate_glob(glob: &str) -> Result<()> {
    if glob.trim().is_empty() {
        return Err(EditError::InvalidInput(
            glob.to_string(),
            "file pattern cannot be empty".to_string(),
        ));
    }

    if glob.starts_with('/') || glob.starts_with('\\') || glob.chars().nth(1) == Some(':') {
        return Err(EditError::InvalidInput(
            glob.to_string(),
            "file pattern must be relative to the project root".to_string(),
        ));
    }

    if glob.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(EditError::InvalidInput(
            glob.to_string(),
            "file pattern cannot navigate outside the project root".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text() {
        assert!(validate_search_text("foo").is_ok());
        assert!(validate_search_text(" ").is_ok());
        assert!(validate_search_text("").is_err());
    }

    #[test]
    fn test_occurrence() {
        assert!(validate_occurrence(1).is_ok());
        assert!(validate_occurrence(42).is_ok());
        assert!(validate_occurrence(0).is_err());
    }

    #[test]
    fn test_valid_globs() {
        for glob in ["**/*", "**/*.{cpp,h}", "src/*.rs", "*.md", "a/b/**"] {
            assert!(validate_glob(glob).is_ok(), "{glob} should be valid");
        }
    }

    #[test]
    fn test_invalid_globs() {
        for glob in ["", "   ", "/etc/**", "../**/*", "src/../../x", "C:/src/*"] {
            assert!(validate_glob(glob).is_err(), "{glob} should be invalid");
        }
    }
}

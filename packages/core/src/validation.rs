// ABOUTME: Input validation shared by task and note operations
// ABOUTME: Required-text and required-id checks surfaced as client-visible errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
}

/// Reject missing or blank text.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(ValidationError::Required(field)),
    }
}

/// Pick the first identifier present, in priority order.
pub fn require_id<'a>(
    field: &'static str,
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Result<String, ValidationError> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::Required(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_accepts_content() {
        assert_eq!(
            require_text("Text", Some("buy milk")).unwrap(),
            "buy milk".to_string()
        );
    }

    #[test]
    fn test_require_text_rejects_missing_and_blank() {
        assert_eq!(
            require_text("Text", None),
            Err(ValidationError::Required("Text"))
        );
        assert!(require_text("Text", Some("")).is_err());
        assert!(require_text("Text", Some("   \n")).is_err());
    }

    #[test]
    fn test_require_id_prefers_first_candidate() {
        let id = require_id("Task id", [Some("from-path"), Some("from-query")]).unwrap();
        assert_eq!(id, "from-path");

        let id = require_id("Task id", [None, Some(""), Some("from-body")]).unwrap();
        assert_eq!(id, "from-body");
    }

    #[test]
    fn test_require_id_missing() {
        let err = require_id("Task id", [None, None]).unwrap_err();
        assert_eq!(err.to_string(), "Task id is required.");
    }
}

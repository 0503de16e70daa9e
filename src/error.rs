//! Crate-wide error type.
//!
//! User-correctable failures carry the exact message shown to the user.
//! Storage and desktop failures carry a short description of the cause and
//! are expected to be logged rather than displayed.

/// Errors produced by the shortening workflow, the history store and the
/// desktop integrations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please enter a URL")]
    EmptyInput,

    #[error("Please enter a valid URL")]
    InvalidUrl { url: String },

    #[error("This URL has already been shortened")]
    DuplicateUrl { url: String },

    #[error("Failed to parse stored history: {0}")]
    StorageParse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("Failed to open URL: {0}")]
    Open(String),

    #[error("No shortened URL with id {id}")]
    NotFound { id: String },
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    pub fn duplicate_url(url: impl Into<String>) -> Self {
        Self::DuplicateUrl { url: url.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Stable machine-readable code for the error category.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyInput | AppError::InvalidUrl { .. } => "validation_error",
            AppError::DuplicateUrl { .. } => "conflict",
            AppError::NotFound { .. } => "not_found",
            AppError::StorageParse(_) | AppError::Storage(_) => "storage_error",
            AppError::Clipboard(_) | AppError::Open(_) => "external_error",
        }
    }

    /// Returns true if the user can fix the failure by changing their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyInput
                | AppError::InvalidUrl { .. }
                | AppError::DuplicateUrl { .. }
                | AppError::NotFound { .. }
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::StorageParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(AppError::EmptyInput.to_string(), "Please enter a URL");
        assert_eq!(
            AppError::invalid_url("nope").to_string(),
            "Please enter a valid URL"
        );
        assert_eq!(
            AppError::duplicate_url("https://example.com").to_string(),
            "This URL has already been shortened"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::invalid_url("x").code(), "validation_error");
        assert_eq!(AppError::duplicate_url("x").code(), "conflict");
        assert_eq!(AppError::not_found("1").code(), "not_found");
        assert_eq!(AppError::storage("disk full").code(), "storage_error");
        assert_eq!(AppError::Open("no browser".into()).code(), "external_error");
    }

    #[test]
    fn test_user_errors_are_distinguished() {
        assert!(AppError::EmptyInput.is_user_error());
        assert!(AppError::duplicate_url("x").is_user_error());
        assert!(!AppError::storage("x").is_user_error());
        assert!(!AppError::Clipboard("x".into()).is_user_error());
    }

    #[test]
    fn test_serde_error_maps_to_parse_failure() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::StorageParse(_)));
    }
}

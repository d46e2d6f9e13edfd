use std::io;

use thiserror::Error;

/// Library-wide error type for kyomu operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The caller asked for a prompt before the inputs it depends on exist.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Category name does not match any known task category.
    #[error("Unsupported category '{0}'. Run 'kyomu categories' to list the available ones")]
    UnsupportedCategory(String),

    /// A required question of the active category has no answer.
    #[error("Missing answer for '{label}' (required by {category})")]
    MissingAnswer { category: String, label: String },

    /// An answer was supplied for a question the category does not ask.
    #[error("'{label}' is not a question of {category}")]
    UnknownField { category: String, label: String },

    /// A raw answer value lies outside the question's domain.
    #[error("Invalid answer for '{label}': {reason}")]
    InvalidAnswer { label: String, reason: String },

    /// Embedded template failed to render.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// Terminal interaction failed.
    #[error("Prompt interaction failed: {0}")]
    Prompt(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_answer(label: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidAnswer { label: label.into(), reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidState(_)
            | AppError::UnsupportedCategory(_)
            | AppError::MissingAnswer { .. }
            | AppError::UnknownField { .. }
            | AppError::InvalidAnswer { .. }
            | AppError::TomlParse(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateRender { .. } | AppError::Prompt(_) | AppError::Clipboard(_) => {
                io::ErrorKind::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answer_message_names_label_and_category() {
        let err = AppError::MissingAnswer {
            category: "メール文面の作成".to_string(),
            label: "宛先".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("宛先"));
        assert!(message.contains("メール文面の作成"));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn clipboard_errors_are_not_input_errors() {
        let err = AppError::Clipboard("no display".to_string());
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}

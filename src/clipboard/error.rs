//! Error types for clipboard operations

use crate::error::AppError;

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard program could be started
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard program refused the write
    #[error("Clipboard command `{command}` failed with status {status}")]
    CommandFailed { command: String, status: String },

    /// Write rejected by the backend (permission denied, unsupported)
    #[error("Clipboard write denied: {0}")]
    Denied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ClipboardError> for AppError {
    fn from(err: ClipboardError) -> Self {
        AppError::Clipboard(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_errors_keep_their_message() {
        let err: AppError = ClipboardError::CommandFailed {
            command: "xclip".to_string(),
            status: "exit status: 1".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "CLIPBOARD_ERROR");
        assert_eq!(
            err.to_string(),
            "Clipboard error: Clipboard command `xclip` failed with status exit status: 1"
        );
    }
}

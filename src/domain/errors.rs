use std::io;
use thiserror::Error;

/// Reasons a submitted form is rejected.
///
/// The `Display` text of each variant is exactly the message shown to the
/// user, so callers can store `err.to_string()` as the form's error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The "Number" field is not a finite number.
    #[error("Please enter a valid number to multiply.")]
    InvalidBase,
    /// The "Multiply till" field is not a finite number greater than zero.
    #[error("Please enter a valid positive multiplier limit (e.g. 10).")]
    InvalidLimit,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Export write failed: {0}")]
    Io(#[from] io::Error),
}

impl ExportError {
    /// True when the reader went away mid-export, e.g. output piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        let kind = match self {
            ExportError::Io(err) => Some(err.kind()),
            ExportError::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(io_err) => Some(io_err.kind()),
                _ => None,
            },
            ExportError::Json(err) => err.io_error_kind(),
            ExportError::Utf8(_) => None,
        };
        kind == Some(io::ErrorKind::BrokenPipe)
    }
}

pub type DomainResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvalidBase.to_string(),
            "Please enter a valid number to multiply."
        );
        assert_eq!(
            ValidationError::InvalidLimit.to_string(),
            "Please enter a valid positive multiplier limit (e.g. 10)."
        );
    }

    #[test]
    fn test_broken_pipe_detection() {
        let broken = ExportError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(broken.is_broken_pipe());

        let denied = ExportError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!denied.is_broken_pipe());
    }

    #[test]
    fn test_broken_pipe_inside_csv_and_json_errors() {
        let pipe = || io::Error::from(io::ErrorKind::BrokenPipe);
        assert!(ExportError::from(csv::Error::from(pipe())).is_broken_pipe());
        assert!(ExportError::from(serde_json::Error::io(pipe())).is_broken_pipe());

        let syntax = serde_json::from_str::<u8>("x").unwrap_err();
        assert!(!ExportError::from(syntax).is_broken_pipe());
    }
}

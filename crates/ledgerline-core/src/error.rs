//! Error types for the statement import flow

use thiserror::Error;

use crate::Notification;

/// Recoverable failure of an intake, wizard or encoding operation.
///
/// None of these are fatal. Each one leaves the previous state untouched and
/// maps to exactly one user-facing notification via [`ImportError::notification`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Unsupported file format: {file_name}")]
    UnsupportedFormat { file_name: String },

    #[error("Cannot leave the {stage} step: {reason}")]
    StageLocked { stage: String, reason: String },

    #[error("No step after {stage}")]
    NoFurtherStage { stage: String },

    #[error("Invalid encoding: {value}")]
    InvalidEncoding { value: String },
}

impl ImportError {
    /// The toast shown to the user for this failure
    pub fn notification(&self) -> Notification {
        match self {
            Self::UnsupportedFormat { .. } => Notification::error(
                "Invalid file type",
                "Please upload a supported bank statement file.",
            ),
            Self::StageLocked { reason, .. } => Notification::error("Cannot continue", reason.clone()),
            Self::NoFurtherStage { stage } => Notification::error(
                "No further step",
                format!("{stage} is the last step of the import."),
            ),
            Self::InvalidEncoding { value } => Notification::error(
                "Invalid encoding",
                format!("\"{value}\" is not an available character encoding."),
            ),
        }
    }
}

/// Result type alias for import operations
pub type ImportResult<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationKind;

    #[test]
    fn test_unsupported_format_uses_fixed_copy() {
        let err = ImportError::UnsupportedFormat {
            file_name: "statement.docx".to_string(),
        };
        let toast = err.notification();

        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.title, "Invalid file type");
        assert_eq!(
            toast.description,
            "Please upload a supported bank statement file."
        );
        assert!(err.to_string().contains("statement.docx"));
    }

    #[test]
    fn test_stage_locked_carries_reason() {
        let err = ImportError::StageLocked {
            stage: "Configure".to_string(),
            reason: "Select a supported bank statement file first.".to_string(),
        };

        assert_eq!(
            err.notification().description,
            "Select a supported bank statement file first."
        );
        assert!(err.to_string().starts_with("Cannot leave the Configure step"));
    }

    #[test]
    fn test_every_error_is_an_error_toast() {
        let errors = [
            ImportError::NoFurtherStage {
                stage: "Preview".to_string(),
            },
            ImportError::InvalidEncoding {
                value: "latin1".to_string(),
            },
        ];

        for err in errors {
            assert_eq!(err.notification().kind, NotificationKind::Error);
        }
    }
}

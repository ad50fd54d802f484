use thiserror::Error;

use crate::domain::menu_analysis::entities::MenuAnalysisError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input")]
    Invalid,

    #[error("File too large")]
    FileTooLarge,

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Object storage error: {0}")]
    ObjectStorageError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error(transparent)]
    Analysis(#[from] MenuAnalysisError),
}

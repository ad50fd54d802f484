use thiserror::Error;

/// Every way a menu analysis can fail. Callers match on the variant to pick a
/// user-facing message; none of them is fatal, the whole analysis can be
/// retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuAnalysisError {
    /// The inference call never completed, or the provider rejected it.
    #[error("vision service request failed: {message}")]
    TransportFailure { message: String },

    /// The provider answered successfully but without any text.
    #[error("vision service returned an empty completion")]
    EmptyCompletion,

    /// The completion contains no `[` or `{` at all.
    #[error("no JSON payload found in completion")]
    NoJsonFound,

    /// A JSON candidate was found but could not be parsed. The complete
    /// completion text is kept for diagnosis.
    #[error("malformed JSON in completion: {reason}")]
    MalformedJson { reason: String, raw_response: String },
}

impl MenuAnalysisError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            MenuAnalysisError::TransportFailure { .. } => "transport_failure",
            MenuAnalysisError::EmptyCompletion => "empty_completion",
            MenuAnalysisError::NoJsonFound => "no_json_found",
            MenuAnalysisError::MalformedJson { .. } => "malformed_json",
        }
    }

    pub fn raw_response(&self) -> Option<&str> {
        match self {
            MenuAnalysisError::MalformedJson { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

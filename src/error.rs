use std::fmt;

use thiserror::Error;

/// Startup configuration errors. These are fatal and never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors raised by a generative backend for a single request
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Prompt blocked by backend: {0}")]
    Blocked(String),

    #[error("Backend response had no text")]
    EmptyResponse,

    #[error("Malformed backend response: {0}")]
    Malformed(String),
}

/// Shape errors found while reading the SEO response body
#[derive(Debug, Error)]
pub enum SeoParseError {
    #[error("Response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Which operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Translate,
    GenerateSeo,
}

/// Underlying reason for an operation failure. Kept for logs and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    Network,
    Backend,
    Parse,
    Validation,
}

impl From<&LlmError> for FailureCause {
    fn from(err: &LlmError) -> Self {
        match err {
            LlmError::Network(_) => FailureCause::Network,
            LlmError::Status { .. }
            | LlmError::Blocked(_)
            | LlmError::EmptyResponse
            | LlmError::Malformed(_) => FailureCause::Backend,
        }
    }
}

impl From<&SeoParseError> for FailureCause {
    fn from(err: &SeoParseError) -> Self {
        match err {
            SeoParseError::Json(_) => FailureCause::Parse,
            _ => FailureCause::Validation,
        }
    }
}

/// The single error kind each operation surfaces to its caller.
///
/// `Display` only ever shows the generic per-operation message.
#[derive(Debug)]
pub struct OperationError {
    operation: Operation,
    cause: FailureCause,
}

impl OperationError {
    pub fn new(operation: Operation, cause: FailureCause) -> Self {
        Self { operation, cause }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn cause(&self) -> FailureCause {
        self.cause
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Operation::Translate => {
                write!(f, "Failed to communicate with the translation service.")
            }
            Operation::GenerateSeo => write!(f, "Failed to generate SEO content."),
        }
    }
}

impl std::error::Error for OperationError {}

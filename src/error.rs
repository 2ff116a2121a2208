//! Unified error types for the Gamma client.

use std::fmt;

use thiserror::Error;

/// Unified error type for every client operation.
#[derive(Error, Debug)]
pub enum GammaError {
    /// The upstream returned 404.
    #[error("resource not found: {path} (HTTP {status})")]
    NotFound {
        /// Status code (always 404).
        status: u16,
        /// Request path that was not found.
        path: String,
    },

    /// The upstream returned a non-2xx status other than 404.
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// Status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Caller input rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// A response body did not satisfy the entity schema.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be decoded into the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The client was used after `close()`.
    #[error("client is closed")]
    Closed,
}

impl GammaError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GammaError::NotFound { status, .. } | GammaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 404 from the upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GammaError::NotFound { .. })
    }

    /// Short class name, used as a metrics label.
    pub fn label(&self) -> &'static str {
        match self {
            GammaError::NotFound { .. } => "not_found",
            GammaError::Api { .. } => "api",
            GammaError::Validation(_) => "validation",
            GammaError::Model(_) => "model",
            GammaError::Transport(_) => "transport",
            GammaError::Decode(_) => "decode",
            GammaError::Closed => "closed",
        }
    }
}

/// Failures raised below the HTTP layer.
///
/// Only the description of the underlying client error is kept so that no
/// `reqwest` type leaks through the public API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The configured timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Any other failure while sending or reading the body.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A mandatory field is absent.
    Missing,
    /// The value has the wrong JSON type.
    WrongType {
        /// Expected kind.
        expected: &'static str,
        /// What was found instead.
        found: &'static str,
    },
    /// A timestamp string could not be parsed.
    BadTimestamp(String),
    /// Rejected during deserialization.
    Invalid(String),
}

/// One failing field, addressed by its path from the model root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path, e.g. `markets[0].conditionId`.
    pub path: String,
    /// Failure reason.
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Missing => write!(f, "{}: field required", self.path),
            FieldErrorKind::WrongType { expected, found } => {
                write!(f, "{}: expected {expected}, found {found}", self.path)
            }
            FieldErrorKind::BadTimestamp(raw) => {
                write!(f, "{}: invalid timestamp {raw}", self.path)
            }
            FieldErrorKind::Invalid(reason) => write!(f, "{}: {reason}", self.path),
        }
    }
}

/// Model construction failure listing every field error found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{model} failed validation ({}): {}", .errors.len(), join(.errors))]
pub struct ModelError {
    /// Entity name.
    pub model: &'static str,
    /// All field errors, in schema order.
    pub errors: Vec<FieldError>,
}

impl ModelError {
    /// Prefix every path with a sequence index, for errors inside list bodies.
    pub fn at_index(mut self, index: usize) -> Self {
        for error in &mut self.errors {
            error.path = if error.path.is_empty() {
                format!("[{index}]")
            } else {
                format!("[{index}].{}", error.path)
            };
        }
        self
    }

    /// Whether a field at `path` was reported missing.
    pub fn is_missing(&self, path: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.path == path && e.kind == FieldErrorKind::Missing)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, GammaError>;

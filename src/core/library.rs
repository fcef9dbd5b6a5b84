use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// LibraryError is raised by the entity store and infrastructure; services translate it
// into their own named failures.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("{message} {reason_code:?} {retryable}")]
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    // A delete or insert was refused because a dependent row still references the target.
    #[error("{message}")]
    ForeignKeyViolation {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn foreign_key_violation(message: &str) -> LibraryError {
        LibraryError::ForeignKeyViolation { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Database { retryable, .. } => { *retryable }
            LibraryError::NotFound { .. } => { false }
            LibraryError::ForeignKeyViolation { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

/// A specialized Result type for Repository .
pub type LibraryResult<T> = Result<T, LibraryError>;

// BorrowStatus is derived from date_of_return: a borrow is open until it has been returned.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BorrowStatus {
    Open,
    Closed,
}

impl Display for BorrowStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BorrowStatus::Open => write!(f, "Open"),
            BorrowStatus::Closed => write!(f, "Closed"),
        }
    }
}

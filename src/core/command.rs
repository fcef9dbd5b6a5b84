use async_trait::async_trait;
use crate::authors::domain::AuthorError;
use crate::borrows::domain::BorrowError;
use crate::catalog::domain::BookError;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    // well-formed request refused by a referential guard or business rule
    Rejected {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Database { message, .. } => message,
            CommandError::NotFound { message } => message,
            CommandError::Rejected { message } => message,
            CommandError::Runtime { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message, .. } => message,
        }
    }

    pub fn validation(message: &str) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code: Some("422".to_string()) }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

// Checks a string field against its column width.
pub(crate) fn check_max_length(field: &str, value: &str, max: usize) -> Result<(), CommandError> {
    let len = value.chars().count();
    if len > max {
        return Err(CommandError::validation(
            format!("{} must be at most {} characters, got {}", field, max, len).as_str()));
    }
    Ok(())
}

pub(crate) fn check_range(field: &str, value: i64, min: i64, max: i64) -> Result<(), CommandError> {
    if value < min || value > max {
        return Err(CommandError::validation(
            format!("{} must be between {} and {}, got {}", field, min, max, value).as_str()));
    }
    Ok(())
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::ForeignKeyViolation { message } => {
                CommandError::Rejected { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

impl From<AuthorError> for CommandError {
    fn from(other: AuthorError) -> Self {
        let message = other.to_string();
        match other {
            AuthorError::NotFound(_) | AuthorError::NotFoundOnDelete(_) => {
                CommandError::NotFound { message }
            }
            AuthorError::StillReferenced(_) => {
                CommandError::Rejected { message }
            }
            AuthorError::Repository(err) => {
                CommandError::Database { message, reason_code: None, retryable: err.retryable() }
            }
        }
    }
}

impl From<BookError> for CommandError {
    fn from(other: BookError) -> Self {
        let message = other.to_string();
        match other {
            BookError::BookNotFound(_) | BookError::AuthorNotFound(_) | BookError::BookNotFoundOnDelete(_) => {
                CommandError::NotFound { message }
            }
            BookError::StillHasBorrows(_) => {
                CommandError::Rejected { message }
            }
            BookError::Repository(err) => {
                CommandError::Database { message, reason_code: None, retryable: err.retryable() }
            }
        }
    }
}

impl From<BorrowError> for CommandError {
    fn from(other: BorrowError) -> Self {
        let message = other.to_string();
        match other {
            BorrowError::BorrowNotFound(_) | BorrowError::BookNotFound(_) => {
                CommandError::NotFound { message }
            }
            BorrowError::BookExhausted(_) | BorrowError::AlreadyClosed(_) => {
                CommandError::Rejected { message }
            }
            BorrowError::Repository(err) => {
                CommandError::Database { message, reason_code: None, retryable: err.retryable() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::authors::domain::AuthorError;
    use crate::borrows::domain::BorrowError;
    use crate::catalog::domain::BookError;
    use crate::core::command::{check_max_length, check_range, CommandError};
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::Database { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Rejected { message: "test".to_string() };
        assert_eq!("test", CommandError::validation("test").message());
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::foreign_key_violation("x")), CommandError::Rejected { .. }));
        assert!(matches!(CommandError::from(LibraryError::database("x", None, false)), CommandError::Database { .. }));
    }

    #[tokio::test]
    async fn test_should_convert_domain_errors() {
        assert!(matches!(CommandError::from(AuthorError::NotFound(1)), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(AuthorError::StillReferenced(1)), CommandError::Rejected { .. }));
        assert!(matches!(CommandError::from(BookError::AuthorNotFound(1)), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(BookError::StillHasBorrows(1)), CommandError::Rejected { .. }));
        assert!(matches!(CommandError::from(BorrowError::BookExhausted(1)), CommandError::Rejected { .. }));
        assert!(matches!(CommandError::from(BorrowError::AlreadyClosed(1)), CommandError::Rejected { .. }));
        let err = CommandError::from(BorrowError::Repository(LibraryError::database("boom", None, false)));
        assert!(matches!(err, CommandError::Database { .. }));
        assert!(err.message().starts_with("Borrow service failed with repository error."));
    }

    #[tokio::test]
    async fn test_should_check_fields() {
        assert!(check_max_length("name", "abc", 3).is_ok());
        assert!(check_max_length("name", "abcd", 3).is_err());
        assert!(check_range("remaining_amount", 1, 1, 20000).is_ok());
        assert!(check_range("remaining_amount", 0, 1, 20000).is_err());
        assert!(check_range("remaining_amount", 20001, 1, 20000).is_err());
    }
}

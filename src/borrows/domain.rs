pub mod model;
pub mod service;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use crate::borrows::dto::BorrowDto;
use crate::core::domain::Identifiable;
use crate::core::library::{BorrowStatus, LibraryError};

#[derive(Error, Debug)]
pub enum BorrowError {
    #[error("Borrow with ID {0} not found.")]
    BorrowNotFound(i64),
    #[error("Book with ID {0} not found.")]
    BookNotFound(i64),
    #[error("Can't borrow: book with ID {0} are over - no book left.")]
    BookExhausted(i64),
    #[error("Can't close borrow: borrow with ID {0} already closed.")]
    AlreadyClosed(i64),
    #[error("Borrow service failed with repository error. {0}")]
    Repository(#[from] LibraryError),
}

pub(crate) type BorrowResult<T> = Result<T, BorrowError>;

/// Lifecycle of borrow records.
///
/// Opening a borrow takes one copy of the book and closing it gives the copy back; both
/// happen in the same unit of work as the borrow row change, so the book counter always
/// equals its stock minus the open borrows.
#[async_trait]
pub(crate) trait BorrowService: Sync + Send {
    async fn add_borrow(&self, borrow: &BorrowDto) -> BorrowResult<BorrowDto>;
    async fn find_borrow_by_id(&self, id: i64) -> BorrowResult<BorrowDto>;
    async fn find_borrows(&self) -> BorrowResult<Vec<BorrowDto>>;
    async fn close_borrow(&self, id: i64) -> BorrowResult<BorrowDto>;
}

pub(crate) trait Borrow: Identifiable {
    fn book_id(&self) -> i64;
    fn date_of_return(&self) -> Option<NaiveDate>;

    fn status(&self) -> BorrowStatus {
        if self.date_of_return().is_some() {
            BorrowStatus::Closed
        } else {
            BorrowStatus::Open
        }
    }
}

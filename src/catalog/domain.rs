pub mod service;

use async_trait::async_trait;
use thiserror::Error;
use crate::books::domain::model::BookPatch;
use crate::books::dto::BookDto;
use crate::core::library::LibraryError;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Book with ID {0} not found.")]
    BookNotFound(i64),
    #[error("Author with ID {0} not found.")]
    AuthorNotFound(i64),
    #[error("0 book(s) deleted. Book with ID {0} not found.")]
    BookNotFoundOnDelete(i64),
    #[error("Can't delete book: Book with ID {0} still has related borrows in table (borrow).")]
    StillHasBorrows(i64),
    #[error("Book service failed with repository error. {0}")]
    Repository(#[from] LibraryError),
}

pub(crate) type BookResult<T> = Result<T, BookError>;

// CatalogService manages the book lifecycle; the remaining_amount counter is only
// moved by the borrow lifecycle outside of an explicit update.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> BookResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> BookResult<BookDto>;
    async fn find_books(&self) -> BookResult<Vec<BookDto>>;
    async fn update_book(&self, id: i64, patch: &BookPatch) -> BookResult<usize>;
    async fn remove_book(&self, id: i64) -> BookResult<usize>;
}

pub mod sql_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, BookPatch};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// CounterAdjustment is the outcome of a guarded change to a book's remaining_amount.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum CounterAdjustment {
    Applied { remaining_amount: i64 },
    Exhausted,
    Missing,
}

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity, BookPatch> {
    async fn exists_by_author(&self, author_id: i64) -> LibraryResult<bool>;
}

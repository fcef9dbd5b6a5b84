pub mod sql_borrow_repository;

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::borrows::domain::model::{BorrowEntity, BorrowPatch};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum OpenOutcome {
    Opened(BorrowEntity),
    BookMissing,
    BookExhausted,
}

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum CloseOutcome {
    Closed(BorrowEntity),
    BorrowMissing,
    AlreadyClosed,
    BookMissing(i64),
}

// BorrowRepository couples every change of a borrow's open state with the book counter.
// Only open and close may change that state: the inherited create, update and delete leave
// remaining_amount untouched, and BorrowPatch cannot set date_of_return.
#[async_trait]
pub(crate) trait BorrowRepository: Repository<BorrowEntity, BorrowPatch> {
    // takes one copy of the book and inserts the open borrow, or changes nothing
    async fn open(&self, borrow: &BorrowEntity) -> LibraryResult<OpenOutcome>;

    // stamps date_of_return on an open borrow and gives its copy back, or changes nothing
    async fn close(&self, id: i64, date_of_return: NaiveDate) -> LibraryResult<CloseOutcome>;
}

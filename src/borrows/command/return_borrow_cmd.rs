use std::sync::Arc;
use async_trait::async_trait;
use crate::borrows::domain::BorrowService;
use crate::borrows::dto::BorrowDto;
use crate::core::command::{Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct ReturnBorrowCommand {
    borrow_service: Arc<dyn BorrowService>,
}

impl ReturnBorrowCommand {
    pub(crate) fn new(borrow_service: Arc<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReturnBorrowCommandRequest {
    pub borrow_id: i64,
}

impl ReturnBorrowCommandRequest {
    pub fn new(borrow_id: i64) -> Self {
        Self {
            borrow_id,
        }
    }
}

pub(crate) type ReturnBorrowCommandResponse = ResponseEnvelope<BorrowDto>;

#[async_trait]
impl Command<ReturnBorrowCommandRequest, ReturnBorrowCommandResponse> for ReturnBorrowCommand {
    async fn execute(&self, req: ReturnBorrowCommandRequest) -> Result<ReturnBorrowCommandResponse, CommandError> {
        self.borrow_service.close_borrow(req.borrow_id).await.map_err(CommandError::from)
            .map(|borrow| ResponseEnvelope::success("Borrow closed successfully.", borrow))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::dto::AuthorDto;
    use crate::books::dto::BookDto;
    use crate::borrows::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::borrows::command::return_borrow_cmd::{ReturnBorrowCommand, ReturnBorrowCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_return_borrow() {
        let state = AppState::new(Configuration::new_local()).await.expect("should build state");
        let author = state.author_service.add_author(&AuthorDto::new("Umberto", "Eco",
                                                                     NaiveDate::from_ymd_opt(1932, 1, 5).unwrap()))
            .await.expect("should add author");
        let book = state.catalog_service.add_book(&BookDto::new("The Name of the Rose", "abbey", author.id, 1))
            .await.expect("should add book");
        let borrow_cmd = BorrowBookCommand::new(state.borrow_service.clone());
        let return_cmd = ReturnBorrowCommand::new(state.borrow_service);

        let res = borrow_cmd.execute(BorrowBookCommandRequest::new(book.id, "Adso")).await.expect("should borrow book");
        let borrow = res.data.expect("should return borrow");

        let res = return_cmd.execute(ReturnBorrowCommandRequest::new(borrow.id)).await.expect("should return borrow");
        assert!(res.data.and_then(|b| b.date_of_return).is_some());

        let res = return_cmd.execute(ReturnBorrowCommandRequest::new(borrow.id)).await;
        assert!(matches!(res, Err(CommandError::Rejected { .. })));
    }
}

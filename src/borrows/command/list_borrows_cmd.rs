use std::sync::Arc;
use async_trait::async_trait;
use crate::borrows::domain::BorrowService;
use crate::borrows::dto::BorrowDto;
use crate::core::command::{Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct ListBorrowsCommand {
    borrow_service: Arc<dyn BorrowService>,
}

impl ListBorrowsCommand {
    pub(crate) fn new(borrow_service: Arc<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBorrowsCommandRequest {}

pub(crate) type ListBorrowsCommandResponse = ResponseEnvelope<Vec<BorrowDto>>;

#[async_trait]
impl Command<ListBorrowsCommandRequest, ListBorrowsCommandResponse> for ListBorrowsCommand {
    async fn execute(&self, _req: ListBorrowsCommandRequest) -> Result<ListBorrowsCommandResponse, CommandError> {
        self.borrow_service.find_borrows().await.map_err(CommandError::from)
            .map(|borrows| ResponseEnvelope::success("Borrows fetched successfully.", borrows))
    }
}

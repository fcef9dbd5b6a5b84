use std::sync::Arc;
use async_trait::async_trait;
use crate::borrows::domain::BorrowService;
use crate::borrows::dto::BorrowDto;
use crate::core::command::{Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct GetBorrowCommand {
    borrow_service: Arc<dyn BorrowService>,
}

impl GetBorrowCommand {
    pub(crate) fn new(borrow_service: Arc<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetBorrowCommandRequest {
    pub borrow_id: i64,
}

impl GetBorrowCommandRequest {
    pub fn new(borrow_id: i64) -> Self {
        Self {
            borrow_id,
        }
    }
}

pub(crate) type GetBorrowCommandResponse = ResponseEnvelope<BorrowDto>;

#[async_trait]
impl Command<GetBorrowCommandRequest, GetBorrowCommandResponse> for GetBorrowCommand {
    async fn execute(&self, req: GetBorrowCommandRequest) -> Result<GetBorrowCommandResponse, CommandError> {
        self.borrow_service.find_borrow_by_id(req.borrow_id).await.map_err(CommandError::from)
            .map(|borrow| ResponseEnvelope::success("Borrow information fetched successfully.", borrow))
    }
}

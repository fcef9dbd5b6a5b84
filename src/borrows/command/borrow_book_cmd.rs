use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::borrows::domain::BorrowService;
use crate::borrows::dto::BorrowDto;
use crate::core::command::{check_max_length, Command, CommandError};
use crate::core::controller::ResponseEnvelope;
use crate::utils::date::today;

pub(crate) struct BorrowBookCommand {
    borrow_service: Arc<dyn BorrowService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(borrow_service: Arc<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BorrowBookCommandRequest {
    pub book_id: i64,
    pub reader_name: String,
}

impl BorrowBookCommandRequest {
    pub fn new(book_id: i64, reader_name: &str) -> Self {
        Self {
            book_id,
            reader_name: reader_name.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        check_max_length("reader_name", self.reader_name.as_str(), 200)
    }

    pub fn build_borrow(&self) -> BorrowDto {
        BorrowDto::new(self.book_id, self.reader_name.as_str(), today())
    }
}

pub(crate) type BorrowBookCommandResponse = ResponseEnvelope<BorrowDto>;

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        req.validate()?;
        self.borrow_service.add_borrow(&req.build_borrow()).await.map_err(CommandError::from)
            .map(|borrow| ResponseEnvelope::success("Borrow created successfully.", borrow))
    }
}

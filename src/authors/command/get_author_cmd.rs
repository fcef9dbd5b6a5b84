use std::sync::Arc;
use async_trait::async_trait;
use crate::authors::domain::AuthorService;
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct GetAuthorCommand {
    author_service: Arc<dyn AuthorService>,
}

impl GetAuthorCommand {
    pub(crate) fn new(author_service: Arc<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetAuthorCommandRequest {
    pub(crate) author_id: i64,
}

impl GetAuthorCommandRequest {
    pub fn new(author_id: i64) -> Self {
        Self {
            author_id,
        }
    }
}

pub(crate) type GetAuthorCommandResponse = ResponseEnvelope<AuthorDto>;

#[async_trait]
impl Command<GetAuthorCommandRequest, GetAuthorCommandResponse> for GetAuthorCommand {
    async fn execute(&self, req: GetAuthorCommandRequest) -> Result<GetAuthorCommandResponse, CommandError> {
        self.author_service.find_author_by_id(req.author_id).await.map_err(CommandError::from)
            .map(|author| ResponseEnvelope::success("Author information fetched successfully.", author))
    }
}

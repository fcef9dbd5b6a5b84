use std::sync::Arc;
use async_trait::async_trait;
use crate::authors::domain::AuthorService;
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct ListAuthorsCommand {
    author_service: Arc<dyn AuthorService>,
}

impl ListAuthorsCommand {
    pub(crate) fn new(author_service: Arc<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListAuthorsCommandRequest {}

pub(crate) type ListAuthorsCommandResponse = ResponseEnvelope<Vec<AuthorDto>>;

#[async_trait]
impl Command<ListAuthorsCommandRequest, ListAuthorsCommandResponse> for ListAuthorsCommand {
    async fn execute(&self, _req: ListAuthorsCommandRequest) -> Result<ListAuthorsCommandResponse, CommandError> {
        self.author_service.find_authors().await.map_err(CommandError::from)
            .map(|authors| ResponseEnvelope::success("Authors fetched successfully.", authors))
    }
}

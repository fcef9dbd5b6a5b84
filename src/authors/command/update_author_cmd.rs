use std::sync::Arc;
use async_trait::async_trait;
use crate::authors::domain::AuthorService;
use crate::authors::domain::model::AuthorPatch;
use crate::core::command::{check_max_length, Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct UpdateAuthorCommand {
    author_service: Arc<dyn AuthorService>,
}

impl UpdateAuthorCommand {
    pub(crate) fn new(author_service: Arc<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateAuthorCommandRequest {
    pub author_id: i64,
    pub patch: AuthorPatch,
}

impl UpdateAuthorCommandRequest {
    pub fn new(author_id: i64, patch: AuthorPatch) -> Self {
        Self {
            author_id,
            patch,
        }
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        if let Some(name) = &self.patch.name {
            check_max_length("name", name, 200)?;
        }
        if let Some(surname) = &self.patch.surname {
            check_max_length("surname", surname, 200)?;
        }
        Ok(())
    }
}

pub(crate) type UpdateAuthorCommandResponse = ResponseEnvelope<usize>;

#[async_trait]
impl Command<UpdateAuthorCommandRequest, UpdateAuthorCommandResponse> for UpdateAuthorCommand {
    async fn execute(&self, req: UpdateAuthorCommandRequest) -> Result<UpdateAuthorCommandResponse, CommandError> {
        req.validate()?;
        self.author_service.update_author(req.author_id, &req.patch).await.map_err(CommandError::from)
            .map(|updated| ResponseEnvelope::success(format!("{} author(s) updated.", updated).as_str(), updated))
    }
}

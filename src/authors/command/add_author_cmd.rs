use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use crate::authors::domain::AuthorService;
use crate::authors::dto::AuthorDto;
use crate::core::command::{check_max_length, Command, CommandError};
use crate::core::controller::ResponseEnvelope;
use crate::utils::date::serializer;

pub(crate) struct AddAuthorCommand {
    author_service: Arc<dyn AuthorService>,
}

impl AddAuthorCommand {
    pub(crate) fn new(author_service: Arc<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AddAuthorCommandRequest {
    pub name: String,
    pub surname: String,
    #[serde(with = "serializer")]
    pub birth_date: NaiveDate,
}

impl AddAuthorCommandRequest {
    pub fn new(name: &str, surname: &str, birth_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            surname: surname.to_string(),
            birth_date,
        }
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        check_max_length("name", self.name.as_str(), 200)?;
        check_max_length("surname", self.surname.as_str(), 200)
    }

    pub fn build_author(&self) -> AuthorDto {
        AuthorDto::new(self.name.as_str(), self.surname.as_str(), self.birth_date)
    }
}

pub(crate) type AddAuthorCommandResponse = ResponseEnvelope<AuthorDto>;

#[async_trait]
impl Command<AddAuthorCommandRequest, AddAuthorCommandResponse> for AddAuthorCommand {
    async fn execute(&self, req: AddAuthorCommandRequest) -> Result<AddAuthorCommandResponse, CommandError> {
        req.validate()?;
        self.author_service.add_author(&req.build_author()).await.map_err(CommandError::from)
            .map(|author| ResponseEnvelope::success("Author created successfully.", author))
    }
}

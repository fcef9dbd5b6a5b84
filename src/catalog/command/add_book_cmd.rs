use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{check_max_length, check_range, Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) author_id: i64,
    pub(crate) remaining_amount: i64,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, description: &str, author_id: i64, remaining_amount: i64) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            author_id,
            remaining_amount,
        }
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        check_max_length("title", self.title.as_str(), 200)?;
        check_max_length("description", self.description.as_str(), 1024)?;
        check_range("remaining_amount", self.remaining_amount, 1, i64::MAX)
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.description.as_str(), self.author_id, self.remaining_amount)
    }
}

pub(crate) type AddBookCommandResponse = ResponseEnvelope<BookDto>;

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.add_book(&req.build_book()).await.map_err(CommandError::from)
            .map(|book| ResponseEnvelope::success("Book created successfully.", book))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::domain::model::AuthorEntity;
    use crate::authors::repository::sql_author_repository::SqlAuthorRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::Repository;
    use crate::utils::db::build_test_pool;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let pool = build_test_pool().await;
        let author = SqlAuthorRepository::new(pool.clone())
            .create(&AuthorEntity::new("Kurt", "Vonnegut", NaiveDate::from_ymd_opt(1922, 11, 11).unwrap()))
            .await.expect("should create author");
        let cmd = AddBookCommand::new(factory::create_catalog_service(&Configuration::new_local(), &pool));

        let res = cmd.execute(AddBookCommandRequest::new("Cat's Cradle", "ice-nine", author.id, 2))
            .await.expect("should add book");
        assert_eq!("Book created successfully.", res.message.as_str());
        assert_eq!(2, res.data.expect("should return book").remaining_amount);

        let res = cmd.execute(AddBookCommandRequest::new("Cat's Cradle", "ice-nine", author.id + 1, 2)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_validate_add_book() {
        assert!(AddBookCommandRequest::new("t", "d", 1, 1).validate().is_ok());
        assert!(AddBookCommandRequest::new("t", "d", 1, 0).validate().is_err());
        assert!(AddBookCommandRequest::new("t".repeat(201).as_str(), "d", 1, 1).validate().is_err());
        assert!(AddBookCommandRequest::new("t", "d".repeat(1025).as_str(), 1, 1).validate().is_err());
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookPatch;
use crate::catalog::domain::CatalogService;
use crate::core::command::{check_max_length, check_range, Command, CommandError};
use crate::core::controller::ResponseEnvelope;

const MAX_REMAINING_AMOUNT: i64 = 20000;

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub(crate) book_id: i64,
    pub(crate) patch: BookPatch,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, patch: BookPatch) -> Self {
        Self {
            book_id,
            patch,
        }
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        if let Some(title) = &self.patch.title {
            check_max_length("title", title, 200)?;
        }
        if let Some(description) = &self.patch.description {
            check_max_length("description", description, 1024)?;
        }
        if let Some(remaining_amount) = self.patch.remaining_amount {
            check_range("remaining_amount", remaining_amount, 1, MAX_REMAINING_AMOUNT)?;
        }
        Ok(())
    }
}

pub(crate) type UpdateBookCommandResponse = ResponseEnvelope<usize>;

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.update_book(req.book_id, &req.patch).await.map_err(CommandError::from)
            .map(|updated| ResponseEnvelope::success(format!("{} book(s) updated.", updated).as_str(), updated))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::domain::model::AuthorEntity;
    use crate::authors::repository::sql_author_repository::SqlAuthorRepository;
    use crate::books::domain::model::BookPatch;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::Repository;
    use crate::utils::db::build_test_pool;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let pool = build_test_pool().await;
        let author = SqlAuthorRepository::new(pool.clone())
            .create(&AuthorEntity::new("Kurt", "Vonnegut", NaiveDate::from_ymd_opt(1922, 11, 11).unwrap()))
            .await.expect("should create author");
        let svc = factory::create_catalog_service(&Configuration::new_local(), &pool);
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("Player Piano", "automation", author.id, 1))
            .await.expect("should add book");
        let book = res.data.expect("should return book");

        let patch = BookPatch { description: Some("machines".to_string()), ..BookPatch::default() };
        let res = update_cmd.execute(UpdateBookCommandRequest::new(book.id, patch)).await.expect("should update book");
        assert_eq!("1 book(s) updated.", res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_validate_update_book() {
        let over = BookPatch { remaining_amount: Some(20001), ..BookPatch::default() };
        assert!(matches!(UpdateBookCommandRequest::new(1, over).validate(), Err(CommandError::Validation { .. })));
        let zero = BookPatch { remaining_amount: Some(0), ..BookPatch::default() };
        assert!(UpdateBookCommandRequest::new(1, zero).validate().is_err());
        let max = BookPatch { remaining_amount: Some(20000), ..BookPatch::default() };
        assert!(UpdateBookCommandRequest::new(1, max).validate().is_ok());
        assert!(UpdateBookCommandRequest::new(1, BookPatch::default()).validate().is_ok());
    }
}

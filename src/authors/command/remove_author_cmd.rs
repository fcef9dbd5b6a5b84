use std::sync::Arc;
use async_trait::async_trait;
use crate::authors::domain::AuthorService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::ResponseEnvelope;

pub(crate) struct RemoveAuthorCommand {
    author_service: Arc<dyn AuthorService>,
}

impl RemoveAuthorCommand {
    pub(crate) fn new(author_service: Arc<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveAuthorCommandRequest {
    pub author_id: i64,
}

impl RemoveAuthorCommandRequest {
    pub fn new(author_id: i64) -> Self {
        Self {
            author_id,
        }
    }
}

pub(crate) type RemoveAuthorCommandResponse = ResponseEnvelope<usize>;

#[async_trait]
impl Command<RemoveAuthorCommandRequest, RemoveAuthorCommandResponse> for RemoveAuthorCommand {
    async fn execute(&self, req: RemoveAuthorCommandRequest) -> Result<RemoveAuthorCommandResponse, CommandError> {
        self.author_service.remove_author(req.author_id).await.map_err(CommandError::from)
            .map(|deleted| ResponseEnvelope::success(format!("{} author(s) deleted.", deleted).as_str(), deleted))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest};
    use crate::authors::command::remove_author_cmd::{RemoveAuthorCommand, RemoveAuthorCommandRequest};
    use crate::authors::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::utils::db::build_test_pool;

    #[tokio::test]
    async fn test_should_run_remove_author() {
        let pool = build_test_pool().await;
        let svc = factory::create_author_service(&Configuration::new_local(), &pool);
        let add_cmd = AddAuthorCommand::new(svc.clone());
        let remove_cmd = RemoveAuthorCommand::new(svc);

        let res = add_cmd.execute(AddAuthorCommandRequest::new("Ted", "Chiang",
                                                               NaiveDate::from_ymd_opt(1967, 10, 20).unwrap()))
            .await.expect("should add author");
        let author = res.data.expect("should return author");

        let res = remove_cmd.execute(RemoveAuthorCommandRequest::new(author.id)).await.expect("should remove author");
        assert_eq!(Some(1), res.data);

        let res = remove_cmd.execute(RemoveAuthorCommandRequest::new(author.id)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}

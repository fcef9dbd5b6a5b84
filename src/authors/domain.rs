pub mod model;
pub mod service;

use async_trait::async_trait;
use thiserror::Error;
use crate::authors::domain::model::AuthorPatch;
use crate::authors::dto::AuthorDto;
use crate::core::library::LibraryError;

#[derive(Error, Debug)]
pub enum AuthorError {
    #[error("Author with ID {0} not found.")]
    NotFound(i64),
    #[error("0 author(s) deleted. Author with ID {0} not found.")]
    NotFoundOnDelete(i64),
    #[error("Can't delete author: Author with ID {0} still has related books in table (book).")]
    StillReferenced(i64),
    #[error("Author service failed with repository error. {0}")]
    Repository(#[from] LibraryError),
}

pub(crate) type AuthorResult<T> = Result<T, AuthorError>;

#[async_trait]
pub(crate) trait AuthorService: Sync + Send {
    async fn add_author(&self, author: &AuthorDto) -> AuthorResult<AuthorDto>;
    async fn find_author_by_id(&self, id: i64) -> AuthorResult<AuthorDto>;
    async fn find_authors(&self) -> AuthorResult<Vec<AuthorDto>>;
    async fn update_author(&self, id: i64, patch: &AuthorPatch) -> AuthorResult<usize>;
    async fn remove_author(&self, id: i64) -> AuthorResult<usize>;
}

use async_trait::async_trait;
use crate::authors::domain::{AuthorError, AuthorResult, AuthorService};
use crate::authors::domain::model::{AuthorEntity, AuthorPatch};
use crate::authors::dto::AuthorDto;
use crate::authors::repository::AuthorRepository;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

pub(crate) struct AuthorServiceImpl {
    author_repository: Box<dyn AuthorRepository>,
    book_repository: Box<dyn BookRepository>,
}

impl AuthorServiceImpl {
    pub(crate) fn new(_config: &Configuration, author_repository: Box<dyn AuthorRepository>,
                      book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            author_repository,
            book_repository,
        }
    }
}

#[async_trait]
impl AuthorService for AuthorServiceImpl {
    async fn add_author(&self, author: &AuthorDto) -> AuthorResult<AuthorDto> {
        let created = self.author_repository.create(&AuthorEntity::from(author)).await?;
        tracing::info!(author_id = created.id, "author created");
        Ok(AuthorDto::from(&created))
    }

    async fn find_author_by_id(&self, id: i64) -> AuthorResult<AuthorDto> {
        match self.author_repository.get(id).await {
            Ok(author) => Ok(AuthorDto::from(&author)),
            Err(LibraryError::NotFound { .. }) => Err(AuthorError::NotFound(id)),
            Err(err) => Err(AuthorError::from(err)),
        }
    }

    async fn find_authors(&self) -> AuthorResult<Vec<AuthorDto>> {
        let res = self.author_repository.find_all().await?;
        Ok(res.iter().map(AuthorDto::from).collect())
    }

    async fn update_author(&self, id: i64, patch: &AuthorPatch) -> AuthorResult<usize> {
        if !self.author_repository.exists(id).await? {
            return Err(AuthorError::NotFound(id));
        }
        if patch.is_empty() {
            return Ok(0);
        }
        let updated = self.author_repository.update(id, patch).await?;
        tracing::info!(author_id = id, updated, "author updated");
        Ok(updated)
    }

    async fn remove_author(&self, id: i64) -> AuthorResult<usize> {
        if self.book_repository.exists_by_author(id).await? {
            tracing::warn!(author_id = id, "author still referenced by books");
            return Err(AuthorError::StillReferenced(id));
        }
        // a book inserted after the check still trips the foreign key
        let deleted = match self.author_repository.delete(id).await {
            Ok(deleted) => deleted,
            Err(LibraryError::ForeignKeyViolation { .. }) => {
                tracing::warn!(author_id = id, "author still referenced by books");
                return Err(AuthorError::StillReferenced(id));
            }
            Err(err) => {
                tracing::error!(author_id = id, "failed to delete author: {}", err);
                return Err(AuthorError::from(err));
            }
        };
        if deleted == 0 {
            return Err(AuthorError::NotFoundOnDelete(id));
        }
        tracing::info!(author_id = id, "author deleted");
        Ok(deleted)
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> Self {
        Self {
            id: other.id,
            name: other.name.to_string(),
            surname: other.surname.to_string(),
            birth_date: other.birth_date,
        }
    }
}

impl From<&AuthorDto> for AuthorEntity {
    fn from(other: &AuthorDto) -> Self {
        Self {
            id: other.id,
            name: other.name.to_string(),
            surname: other.surname.to_string(),
            birth_date: other.birth_date,
        }
    }
}

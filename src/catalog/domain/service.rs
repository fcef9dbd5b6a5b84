use async_trait::async_trait;
use crate::authors::repository::AuthorRepository;
use crate::books::domain::model::{BookEntity, BookPatch};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{BookError, BookResult, CatalogService};
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    author_repository: Box<dyn AuthorRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      author_repository: Box<dyn AuthorRepository>) -> Self {
        Self {
            book_repository,
            author_repository,
        }
    }

    async fn check_author(&self, author_id: i64) -> BookResult<()> {
        if self.author_repository.exists(author_id).await? {
            Ok(())
        } else {
            Err(BookError::AuthorNotFound(author_id))
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> BookResult<BookDto> {
        self.check_author(book.author_id).await?;
        let created = match self.book_repository.create(&BookEntity::from(book)).await {
            Ok(created) => created,
            // author removed between the check and the insert
            Err(LibraryError::ForeignKeyViolation { .. }) => return Err(BookError::AuthorNotFound(book.author_id)),
            Err(err) => return Err(BookError::from(err)),
        };
        tracing::info!(book_id = created.id, author_id = created.author_id,
            remaining_amount = created.remaining_amount, "book created");
        Ok(BookDto::from(&created))
    }

    async fn find_book_by_id(&self, id: i64) -> BookResult<BookDto> {
        match self.book_repository.get(id).await {
            Ok(book) => Ok(BookDto::from(&book)),
            Err(LibraryError::NotFound { .. }) => Err(BookError::BookNotFound(id)),
            Err(err) => Err(BookError::from(err)),
        }
    }

    async fn find_books(&self) -> BookResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn update_book(&self, id: i64, patch: &BookPatch) -> BookResult<usize> {
        if !self.book_repository.exists(id).await? {
            return Err(BookError::BookNotFound(id));
        }
        if patch.is_empty() {
            return Ok(0);
        }
        if let Some(author_id) = patch.author_id {
            self.check_author(author_id).await?;
        }
        let updated = match self.book_repository.update(id, patch).await {
            Ok(updated) => updated,
            Err(LibraryError::ForeignKeyViolation { .. }) => {
                return Err(BookError::AuthorNotFound(patch.author_id.unwrap_or_default()));
            }
            Err(err) => return Err(BookError::from(err)),
        };
        tracing::info!(book_id = id, updated, "book updated");
        Ok(updated)
    }

    async fn remove_book(&self, id: i64) -> BookResult<usize> {
        let deleted = match self.book_repository.delete(id).await {
            Ok(deleted) => deleted,
            Err(LibraryError::ForeignKeyViolation { .. }) => {
                tracing::warn!(book_id = id, "book still referenced by borrows");
                return Err(BookError::StillHasBorrows(id));
            }
            Err(err) => {
                tracing::error!(book_id = id, "failed to delete book: {}", err);
                return Err(BookError::from(err));
            }
        };
        if deleted == 0 {
            return Err(BookError::BookNotFoundOnDelete(id));
        }
        tracing::info!(book_id = id, "book deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use sqlx::SqlitePool;
    use crate::authors::domain::model::AuthorEntity;
    use crate::authors::repository::sql_author_repository::SqlAuthorRepository;
    use crate::books::domain::model::BookPatch;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::{BookError, CatalogService};
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::repository::Repository;
    use crate::utils::db::build_test_pool;

    async fn build_service() -> (SqlitePool, Arc<dyn CatalogService>, i64) {
        let pool = build_test_pool().await;
        let author = SqlAuthorRepository::new(pool.clone())
            .create(&AuthorEntity::new("Ray", "Bradbury", NaiveDate::from_ymd_opt(1920, 8, 22).unwrap()))
            .await.expect("should create author");
        let svc = factory::create_catalog_service(&Configuration::new_local(), &pool);
        (pool, svc, author.id)
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let (_, catalog_svc, author_id) = build_service().await;

        let book = catalog_svc.add_book(&BookDto::new("Fahrenheit 451", "firemen", author_id, 4))
            .await.expect("should add book");
        assert!(book.id > 0);

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!(book, loaded);
        assert_eq!(4, loaded.remaining_amount);
        assert_eq!(1, catalog_svc.find_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_not_add_book_for_missing_author() {
        let (_, catalog_svc, author_id) = build_service().await;

        let err = catalog_svc.add_book(&BookDto::new("Dandelion Wine", "summer", author_id + 100, 1))
            .await.expect_err("should not add book");
        assert!(matches!(err, BookError::AuthorNotFound(_)));
        assert_eq!(0, catalog_svc.find_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_not_find_missing_book() {
        let (_, catalog_svc, _) = build_service().await;
        let err = catalog_svc.find_book_by_id(12).await.expect_err("should not find book");
        assert_eq!("Book with ID 12 not found.", err.to_string());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let (pool, catalog_svc, author_id) = build_service().await;
        let book = catalog_svc.add_book(&BookDto::new("Fahrenheit 451", "firemen", author_id, 4))
            .await.expect("should add book");
        let other = SqlAuthorRepository::new(pool)
            .create(&AuthorEntity::new("Ursula", "Le Guin", NaiveDate::from_ymd_opt(1929, 10, 21).unwrap()))
            .await.expect("should create author");

        let patch = BookPatch { author_id: Some(other.id), remaining_amount: Some(9), ..BookPatch::default() };
        let updated = catalog_svc.update_book(book.id, &patch).await.expect("should update book");
        assert_eq!(1, updated);
        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!(other.id, loaded.author_id);
        assert_eq!(9, loaded.remaining_amount);
        assert_eq!("Fahrenheit 451", loaded.title.as_str());

        let patch = BookPatch { author_id: Some(other.id + 100), ..BookPatch::default() };
        let err = catalog_svc.update_book(book.id, &patch).await.expect_err("should not update author");
        assert!(matches!(err, BookError::AuthorNotFound(_)));

        let patch = BookPatch { title: Some("x".to_string()), ..BookPatch::default() };
        let err = catalog_svc.update_book(book.id + 100, &patch).await.expect_err("should not update missing book");
        assert!(matches!(err, BookError::BookNotFound(_)));
        assert_eq!(0, catalog_svc.update_book(book.id, &BookPatch::default()).await.expect("should skip empty patch"));
        let err = catalog_svc.update_book(book.id + 100, &BookPatch::default()).await.expect_err("should check book before empty patch");
        assert!(matches!(err, BookError::BookNotFound(_)));
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let (_, catalog_svc, author_id) = build_service().await;
        let book = catalog_svc.add_book(&BookDto::new("Fahrenheit 451", "firemen", author_id, 4))
            .await.expect("should add book");

        assert_eq!(1, catalog_svc.remove_book(book.id).await.expect("should remove book"));
        let err = catalog_svc.remove_book(book.id).await.expect_err("should not remove twice");
        assert!(matches!(err, BookError::BookNotFoundOnDelete(_)));
        assert!(catalog_svc.find_book_by_id(book.id).await.is_err());
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::borrows::domain::{Borrow, BorrowError, BorrowResult, BorrowService};
use crate::borrows::domain::model::BorrowEntity;
use crate::borrows::dto::BorrowDto;
use crate::borrows::repository::{BorrowRepository, CloseOutcome, OpenOutcome};
use crate::catalog::domain::{BookError, CatalogService};
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;
use crate::utils::date::today;

pub(crate) struct BorrowServiceImpl {
    borrow_repository: Box<dyn BorrowRepository>,
    catalog_service: Arc<dyn CatalogService>,
}

impl BorrowServiceImpl {
    pub(crate) fn new(_config: &Configuration, borrow_repository: Box<dyn BorrowRepository>,
                      catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            borrow_repository,
            catalog_service,
        }
    }

    async fn find_book(&self, book_id: i64) -> BorrowResult<BookDto> {
        match self.catalog_service.find_book_by_id(book_id).await {
            Ok(book) => Ok(book),
            Err(BookError::Repository(err)) => Err(BorrowError::Repository(err)),
            Err(_) => Err(BorrowError::BookNotFound(book_id)),
        }
    }
}

#[async_trait]
impl BorrowService for BorrowServiceImpl {
    async fn add_borrow(&self, borrow: &BorrowDto) -> BorrowResult<BorrowDto> {
        let book = self.find_book(borrow.book_id).await?;
        if book.is_exhausted() {
            tracing::warn!(book_id = borrow.book_id, "no copies left to borrow");
            return Err(BorrowError::BookExhausted(borrow.book_id));
        }
        let entity = BorrowEntity::new(borrow.book_id, borrow.reader_name.as_str(), today());
        // the counter is checked again inside the transaction, a concurrent borrow may have taken the last copy
        match self.borrow_repository.open(&entity).await? {
            OpenOutcome::Opened(opened) => {
                tracing::info!(borrow_id = opened.id, book_id = opened.book_id, "borrow opened");
                Ok(BorrowDto::from(&opened))
            }
            OpenOutcome::BookExhausted => {
                tracing::warn!(book_id = borrow.book_id, "no copies left to borrow");
                Err(BorrowError::BookExhausted(borrow.book_id))
            }
            OpenOutcome::BookMissing => Err(BorrowError::BookNotFound(borrow.book_id)),
        }
    }

    async fn find_borrow_by_id(&self, id: i64) -> BorrowResult<BorrowDto> {
        match self.borrow_repository.get(id).await {
            Ok(borrow) => Ok(BorrowDto::from(&borrow)),
            Err(LibraryError::NotFound { .. }) => Err(BorrowError::BorrowNotFound(id)),
            Err(err) => Err(BorrowError::from(err)),
        }
    }

    async fn find_borrows(&self) -> BorrowResult<Vec<BorrowDto>> {
        let res = self.borrow_repository.find_all().await?;
        Ok(res.iter().map(BorrowDto::from).collect())
    }

    async fn close_borrow(&self, id: i64) -> BorrowResult<BorrowDto> {
        match self.borrow_repository.close(id, today()).await? {
            CloseOutcome::Closed(closed) => {
                tracing::info!(borrow_id = id, book_id = closed.book_id, status = %closed.status(), "borrow closed");
                Ok(BorrowDto::from(&closed))
            }
            CloseOutcome::AlreadyClosed => {
                tracing::warn!(borrow_id = id, "borrow already closed");
                Err(BorrowError::AlreadyClosed(id))
            }
            CloseOutcome::BorrowMissing => Err(BorrowError::BorrowNotFound(id)),
            CloseOutcome::BookMissing(book_id) => {
                tracing::error!(borrow_id = id, book_id, "borrowed book vanished, close rolled back");
                Err(BorrowError::BookNotFound(book_id))
            }
        }
    }
}

use std::sync::Arc;
use sqlx::SqlitePool;
use crate::authors::domain::AuthorService;
use crate::authors::domain::service::AuthorServiceImpl;
use crate::authors::repository::AuthorRepository;
use crate::authors::repository::sql_author_repository::SqlAuthorRepository;
use crate::books::factory::create_book_repository;
use crate::core::domain::Configuration;

pub(crate) fn create_author_repository(pool: &SqlitePool) -> Box<dyn AuthorRepository> {
    Box::new(SqlAuthorRepository::new(pool.clone()))
}

pub(crate) fn create_author_service(config: &Configuration, pool: &SqlitePool) -> Arc<dyn AuthorService> {
    let author_repo = create_author_repository(pool);
    let book_repo = create_book_repository(pool);
    Arc::new(AuthorServiceImpl::new(config, author_repo, book_repo))
}

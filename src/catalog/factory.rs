use std::sync::Arc;
use sqlx::SqlitePool;
use crate::authors::factory::create_author_repository;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub(crate) fn create_catalog_service(config: &Configuration, pool: &SqlitePool) -> Arc<dyn CatalogService> {
    let book_repo = create_book_repository(pool);
    let author_repo = create_author_repository(pool);
    Arc::new(CatalogServiceImpl::new(config, book_repo, author_repo))
}

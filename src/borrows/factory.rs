use std::sync::Arc;
use sqlx::SqlitePool;
use crate::borrows::domain::BorrowService;
use crate::borrows::domain::service::BorrowServiceImpl;
use crate::borrows::repository::BorrowRepository;
use crate::borrows::repository::sql_borrow_repository::SqlBorrowRepository;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;

pub(crate) fn create_borrow_repository(pool: &SqlitePool) -> Box<dyn BorrowRepository> {
    Box::new(SqlBorrowRepository::new(pool.clone()))
}

pub(crate) fn create_borrow_service(config: &Configuration, pool: &SqlitePool) -> Arc<dyn BorrowService> {
    let borrow_repo = create_borrow_repository(pool);
    let catalog_svc = create_catalog_service(config, pool);
    Arc::new(BorrowServiceImpl::new(config, borrow_repo, catalog_svc))
}

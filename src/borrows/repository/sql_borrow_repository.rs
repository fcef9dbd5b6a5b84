use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::books::repository::CounterAdjustment;
use crate::books::repository::sql_book_repository::adjust_remaining_amount;
use crate::borrows::domain::model::{BorrowEntity, BorrowPatch};
use crate::borrows::repository::{BorrowRepository, CloseOutcome, OpenOutcome};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const BORROW_COLUMNS: &str = "id, book_id, reader_name, date_of_issue, date_of_return";

#[derive(Debug)]
pub(crate) struct SqlBorrowRepository {
    pool: SqlitePool,
}

impl SqlBorrowRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
        }
    }
}

#[async_trait]
impl Repository<BorrowEntity, BorrowPatch> for SqlBorrowRepository {
    async fn create(&self, entity: &BorrowEntity) -> LibraryResult<BorrowEntity> {
        sqlx::query_as::<_, BorrowEntity>(format!(
            "INSERT INTO borrow (book_id, reader_name, date_of_issue, date_of_return) VALUES (?, ?, ?, ?)
             RETURNING {}", BORROW_COLUMNS).as_str())
            .bind(entity.book_id)
            .bind(entity.reader_name.as_str())
            .bind(entity.date_of_issue)
            .bind(entity.date_of_return)
            .fetch_one(&self.pool)
            .await.map_err(LibraryError::from)
    }

    async fn update(&self, id: i64, patch: &BorrowPatch) -> LibraryResult<usize> {
        if patch.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE borrow SET ");
        let mut fields = builder.separated(", ");
        if let Some(reader_name) = &patch.reader_name {
            fields.push("reader_name = ").push_bind_unseparated(reader_name.clone());
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.build()
            .execute(&self.pool)
            .await.map(|res| res.rows_affected() as usize).map_err(LibraryError::from)
    }

    async fn get(&self, id: i64) -> LibraryResult<BorrowEntity> {
        sqlx::query_as::<_, BorrowEntity>(format!("SELECT {} FROM borrow WHERE id = ?", BORROW_COLUMNS).as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await.map_err(LibraryError::from).and_then(|row| {
            row.ok_or_else(|| LibraryError::not_found(format!("borrow not found for {}", id).as_str()))
        })
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        sqlx::query("DELETE FROM borrow WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await.map(|res| res.rows_affected() as usize).map_err(LibraryError::from)
    }

    async fn exists(&self, id: i64) -> LibraryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM borrow WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await.map_err(LibraryError::from)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BorrowEntity>> {
        sqlx::query_as::<_, BorrowEntity>(format!("SELECT {} FROM borrow ORDER BY id", BORROW_COLUMNS).as_str())
            .fetch_all(&self.pool)
            .await.map_err(LibraryError::from)
    }
}

#[async_trait]
impl BorrowRepository for SqlBorrowRepository {
    async fn open(&self, borrow: &BorrowEntity) -> LibraryResult<OpenOutcome> {
        let mut tx = self.pool.begin().await?;
        match adjust_remaining_amount(&mut tx, borrow.book_id, -1).await? {
            CounterAdjustment::Applied { .. } => {}
            CounterAdjustment::Exhausted => {
                tx.rollback().await?;
                return Ok(OpenOutcome::BookExhausted);
            }
            CounterAdjustment::Missing => {
                tx.rollback().await?;
                return Ok(OpenOutcome::BookMissing);
            }
        }
        // an error here drops the transaction, which rolls the decrement back
        let opened = sqlx::query_as::<_, BorrowEntity>(format!(
            "INSERT INTO borrow (book_id, reader_name, date_of_issue, date_of_return) VALUES (?, ?, ?, NULL)
             RETURNING {}", BORROW_COLUMNS).as_str())
            .bind(borrow.book_id)
            .bind(borrow.reader_name.as_str())
            .bind(borrow.date_of_issue)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(OpenOutcome::Opened(opened))
    }

    async fn close(&self, id: i64, date_of_return: NaiveDate) -> LibraryResult<CloseOutcome> {
        let mut tx = self.pool.begin().await?;
        let closed = sqlx::query_as::<_, BorrowEntity>(format!(
            "UPDATE borrow SET date_of_return = ? WHERE id = ? AND date_of_return IS NULL
             RETURNING {}", BORROW_COLUMNS).as_str())
            .bind(date_of_return)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let closed = match closed {
            Some(closed) => closed,
            None => {
                let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM borrow WHERE id = ?)")
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
                tx.rollback().await?;
                return Ok(if exists { CloseOutcome::AlreadyClosed } else { CloseOutcome::BorrowMissing });
            }
        };
        match adjust_remaining_amount(&mut tx, closed.book_id, 1).await? {
            CounterAdjustment::Applied { .. } => {}
            CounterAdjustment::Exhausted | CounterAdjustment::Missing => {
                tx.rollback().await?;
                return Ok(CloseOutcome::BookMissing(closed.book_id));
            }
        }
        tx.commit().await?;
        Ok(CloseOutcome::Closed(closed))
    }
}

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use crate::books::domain::model::{BookEntity, BookPatch};
use crate::books::repository::{BookRepository, CounterAdjustment};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const BOOK_COLUMNS: &str = "id, title, description, author_id, remaining_amount";

#[derive(Debug)]
pub(crate) struct SqlBookRepository {
    pool: SqlitePool,
}

impl SqlBookRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
        }
    }
}

/// Moves `remaining_amount` of a book by `delta` inside the caller's connection or transaction.
///
/// The change is a single conditional statement, so concurrent callers can never drive the
/// counter below zero: a decrement on an exhausted book matches no row and reports
/// [`CounterAdjustment::Exhausted`].
pub(crate) async fn adjust_remaining_amount(conn: &mut SqliteConnection,
                                            book_id: i64, delta: i64) -> LibraryResult<CounterAdjustment> {
    let updated = sqlx::query_scalar::<_, i64>(
        "UPDATE book SET remaining_amount = remaining_amount + ?
         WHERE id = ? AND remaining_amount + ? >= 0
         RETURNING remaining_amount")
        .bind(delta)
        .bind(book_id)
        .bind(delta)
        .fetch_optional(&mut *conn)
        .await?;
    if let Some(remaining_amount) = updated {
        return Ok(CounterAdjustment::Applied { remaining_amount });
    }
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM book WHERE id = ?)")
        .bind(book_id)
        .fetch_one(&mut *conn)
        .await?;
    if exists {
        Ok(CounterAdjustment::Exhausted)
    } else {
        Ok(CounterAdjustment::Missing)
    }
}

#[async_trait]
impl Repository<BookEntity, BookPatch> for SqlBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        sqlx::query_as::<_, BookEntity>(format!(
            "INSERT INTO book (title, description, author_id, remaining_amount) VALUES (?, ?, ?, ?)
             RETURNING {}", BOOK_COLUMNS).as_str())
            .bind(entity.title.as_str())
            .bind(entity.description.as_str())
            .bind(entity.author_id)
            .bind(entity.remaining_amount)
            .fetch_one(&self.pool)
            .await.map_err(LibraryError::from)
    }

    async fn update(&self, id: i64, patch: &BookPatch) -> LibraryResult<usize> {
        if patch.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE book SET ");
        let mut fields = builder.separated(", ");
        if let Some(title) = &patch.title {
            fields.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(description) = &patch.description {
            fields.push("description = ").push_bind_unseparated(description.clone());
        }
        if let Some(author_id) = patch.author_id {
            fields.push("author_id = ").push_bind_unseparated(author_id);
        }
        if let Some(remaining_amount) = patch.remaining_amount {
            fields.push("remaining_amount = ").push_bind_unseparated(remaining_amount);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.build()
            .execute(&self.pool)
            .await.map(|res| res.rows_affected() as usize).map_err(LibraryError::from)
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        sqlx::query_as::<_, BookEntity>(format!("SELECT {} FROM book WHERE id = ?", BOOK_COLUMNS).as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await.map_err(LibraryError::from).and_then(|row| {
            row.ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
        })
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        sqlx::query("DELETE FROM book WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await.map(|res| res.rows_affected() as usize).map_err(LibraryError::from)
    }

    async fn exists(&self, id: i64) -> LibraryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM book WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await.map_err(LibraryError::from)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        sqlx::query_as::<_, BookEntity>(format!("SELECT {} FROM book ORDER BY id", BOOK_COLUMNS).as_str())
            .fetch_all(&self.pool)
            .await.map_err(LibraryError::from)
    }
}

#[async_trait]
impl BookRepository for SqlBookRepository {
    async fn exists_by_author(&self, author_id: i64) -> LibraryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM book WHERE author_id = ?)")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await.map_err(LibraryError::from)
    }
}

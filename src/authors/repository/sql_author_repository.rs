use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::authors::domain::model::{AuthorEntity, AuthorPatch};
use crate::authors::repository::AuthorRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
pub(crate) struct SqlAuthorRepository {
    pool: SqlitePool,
}

impl SqlAuthorRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
        }
    }
}

#[async_trait]
impl Repository<AuthorEntity, AuthorPatch> for SqlAuthorRepository {
    async fn create(&self, entity: &AuthorEntity) -> LibraryResult<AuthorEntity> {
        sqlx::query_as::<_, AuthorEntity>(
            "INSERT INTO author (name, surname, birth_date) VALUES (?, ?, ?)
             RETURNING id, name, surname, birth_date")
            .bind(entity.name.as_str())
            .bind(entity.surname.as_str())
            .bind(entity.birth_date)
            .fetch_one(&self.pool)
            .await.map_err(LibraryError::from)
    }

    async fn update(&self, id: i64, patch: &AuthorPatch) -> LibraryResult<usize> {
        if patch.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE author SET ");
        let mut fields = builder.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(surname) = &patch.surname {
            fields.push("surname = ").push_bind_unseparated(surname.clone());
        }
        if let Some(birth_date) = patch.birth_date {
            fields.push("birth_date = ").push_bind_unseparated(birth_date);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.build()
            .execute(&self.pool)
            .await.map(|res| res.rows_affected() as usize).map_err(LibraryError::from)
    }

    async fn get(&self, id: i64) -> LibraryResult<AuthorEntity> {
        sqlx::query_as::<_, AuthorEntity>(
            "SELECT id, name, surname, birth_date FROM author WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await.map_err(LibraryError::from).and_then(|row| {
            row.ok_or_else(|| LibraryError::not_found(format!("author not found for {}", id).as_str()))
        })
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        sqlx::query("DELETE FROM author WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await.map(|res| res.rows_affected() as usize).map_err(LibraryError::from)
    }

    async fn exists(&self, id: i64) -> LibraryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM author WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await.map_err(LibraryError::from)
    }

    async fn find_all(&self) -> LibraryResult<Vec<AuthorEntity>> {
        sqlx::query_as::<_, AuthorEntity>(
            "SELECT id, name, surname, birth_date FROM author ORDER BY id")
            .fetch_all(&self.pool)
            .await.map_err(LibraryError::from)
    }
}

impl AuthorRepository for SqlAuthorRepository {}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository is the generic entity store; each entity repository extends it with its own queries.
#[async_trait]
pub trait Repository<Entity, Patch>: Sync + Send {
    // create an entity and return it with its store-assigned id
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // applies the non-empty fields of patch, returns affected rows
    async fn update(&self, id: i64, patch: &Patch) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity, returns affected rows
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    async fn exists(&self, id: i64) -> LibraryResult<bool>;

    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Sqlite,
    LocalSqlite,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "local" | "localsqlite" | "memory" => RepositoryStore::LocalSqlite,
            _ => RepositoryStore::Sqlite,
        }
    }
}

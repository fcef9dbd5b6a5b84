use std::env;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

const DEFAULT_DATABASE_URL: &str = "sqlite://library.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub database_url: String,
    pub max_connections: u32,
    pub dev_mode: bool,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(database_url: &str, store: RepositoryStore) -> Self {
        Configuration {
            database_url: database_url.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            dev_mode: true,
            store,
        }
    }

    pub fn new_local() -> Self {
        Configuration::new("sqlite::memory:", RepositoryStore::LocalSqlite)
    }

    /// Reads `LIBRARY_*` variables, after loading an optional `.env` file.
    pub fn from_env() -> LibraryResult<Self> {
        // a missing .env file is fine, the process environment is used as-is
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> LibraryResult<Self> {
        let store = lookup("LIBRARY_STORE").map(RepositoryStore::from).unwrap_or(RepositoryStore::Sqlite);
        let database_url = lookup("LIBRARY_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_connections = match lookup("LIBRARY_MAX_CONNECTIONS") {
            Some(val) => val.parse::<u32>().map_err(|err| LibraryError::validation(
                format!("invalid LIBRARY_MAX_CONNECTIONS {} due to {}", val, err).as_str(), None))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let dev_mode = match lookup("LIBRARY_DEV_MODE") {
            Some(val) => val.parse::<bool>().map_err(|err| LibraryError::validation(
                format!("invalid LIBRARY_DEV_MODE {} due to {}", val, err).as_str(), None))?,
            None => true,
        };
        Ok(Configuration {
            database_url,
            max_connections,
            dev_mode,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new_local();
        assert_eq!(RepositoryStore::LocalSqlite, config.store);
        assert_eq!(5, config.max_connections);
        assert!(config.dev_mode);
    }

    #[tokio::test]
    async fn test_should_load_defaults() {
        let config = Configuration::from_lookup(|_| None).expect("should load config");
        assert_eq!(RepositoryStore::Sqlite, config.store);
        assert_eq!("sqlite://library.db?mode=rwc", config.database_url.as_str());
        assert_eq!(5, config.max_connections);
    }

    #[tokio::test]
    async fn test_should_load_overrides() {
        let vars = HashMap::from([
            ("LIBRARY_STORE", "local"),
            ("LIBRARY_DATABASE_URL", "sqlite://other.db"),
            ("LIBRARY_MAX_CONNECTIONS", "9"),
            ("LIBRARY_DEV_MODE", "false"),
        ]);
        let config = Configuration::from_lookup(|k| vars.get(k).map(|v| v.to_string())).expect("should load config");
        assert_eq!(RepositoryStore::LocalSqlite, config.store);
        assert_eq!("sqlite://other.db", config.database_url.as_str());
        assert_eq!(9, config.max_connections);
        assert!(!config.dev_mode);
    }

    #[tokio::test]
    async fn test_should_reject_bad_connections() {
        let res = Configuration::from_lookup(|k| if k == "LIBRARY_MAX_CONNECTIONS" { Some("many".to_string()) } else { None });
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
    }
}

use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing_subscriber::EnvFilter;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

const SCHEMA: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS author (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(200) NOT NULL,
        surname VARCHAR(200) NOT NULL,
        birth_date DATE NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS book (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(200) NOT NULL,
        description VARCHAR(1024) NOT NULL,
        author_id INTEGER NOT NULL REFERENCES author(id),
        remaining_amount INTEGER NOT NULL CHECK (remaining_amount >= 0)
    )",
    "CREATE TABLE IF NOT EXISTS borrow (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        book_id INTEGER NOT NULL REFERENCES book(id),
        reader_name VARCHAR(200) NOT NULL,
        date_of_issue DATE NOT NULL,
        date_of_return DATE
    )",
    "CREATE INDEX IF NOT EXISTS book_author_ndx ON book (author_id)",
    "CREATE INDEX IF NOT EXISTS borrow_book_ndx ON borrow (book_id)",
];

// helper method to build the connection pool for the configured store
pub(crate) async fn build_db_pool(config: &Configuration) -> LibraryResult<SqlitePool> {
    match config.store {
        RepositoryStore::Sqlite => {
            let options = SqliteConnectOptions::from_str(config.database_url.as_str())?
                .create_if_missing(true)
                .foreign_keys(true);
            Ok(SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?)
        }
        RepositoryStore::LocalSqlite => {
            // each in-memory connection is a separate database, so the pool keeps exactly one alive
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?
                .foreign_keys(true);
            Ok(SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?)
        }
    }
}

pub(crate) async fn create_tables(pool: &SqlitePool) -> LibraryResult<()> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await.map_err(|err| {
            tracing::error!("failed to create schema due to {}", err);
            LibraryError::from(err)
        })?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) async fn build_test_pool() -> SqlitePool {
    let pool = build_db_pool(&Configuration::new_local()).await.expect("should build local pool");
    create_tables(&pool).await.expect("should create tables");
    pool
}

// JSON logs without ANSI codes or timestamps, the log collector adds ingestion time.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

impl From<sqlx::Error> for LibraryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                LibraryError::not_found(format!("{}", err).as_str())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                LibraryError::foreign_key_violation(db_err.message())
            }
            sqlx::Error::Database(db_err) => {
                LibraryError::database(format!("sqlite database error {}", db_err.message()).as_str(),
                                       db_err.code().map(|c| c.to_string()), false)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                LibraryError::database(format!("sqlite database unavailable {}", err).as_str(), None, true)
            }
            sqlx::Error::Configuration(_) => {
                LibraryError::validation(format!("invalid database configuration {}", err).as_str(), None)
            }
            _ => {
                LibraryError::database(format!("sqlite database error {}", err).as_str(), None, false)
            }
        }
    }
}

use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::authors::domain::AuthorService;
use crate::authors::factory::create_author_service;
use crate::borrows::domain::BorrowService;
use crate::borrows::factory::create_borrow_service;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::utils::db::{build_db_pool, create_tables};

// AppState carries the lifecycle managers built once at startup and shared by every handler.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) author_service: Arc<dyn AuthorService>,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
    pub(crate) borrow_service: Arc<dyn BorrowService>,
}

impl AppState {
    pub async fn new(config: Configuration) -> LibraryResult<AppState> {
        let pool = build_db_pool(&config).await?;
        create_tables(&pool).await?;
        Ok(AppState {
            author_service: create_author_service(&config, &pool),
            catalog_service: create_catalog_service(&config, &pool),
            borrow_service: create_borrow_service(&config, &pool),
            config,
        })
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ResponseStatus {
    Success,
    Fail,
    Error,
}

// ResponseEnvelope is the body shape shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ResponseEnvelope<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(message: &str, data: T) -> Self {
        ResponseEnvelope {
            status: ResponseStatus::Success,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ResponseEnvelope<()> {
    pub fn failure(status: StatusCode, message: &str) -> Self {
        ResponseEnvelope {
            status: if status.is_server_error() { ResponseStatus::Error } else { ResponseStatus::Fail },
            message: message.to_string(),
            data: None,
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<ResponseEnvelope<()>>);

fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(ResponseEnvelope::failure(status, message)))
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::UNPROCESSABLE_ENTITY, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Rejected { .. } => StatusCode::BAD_REQUEST,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Serialization { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CommandError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "request failed: {}", err.message());
        }
        server_error(status, err.message())
    }
}

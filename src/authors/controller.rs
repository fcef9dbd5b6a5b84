use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value};
use crate::authors::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest, AddAuthorCommandResponse};
use crate::authors::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest, GetAuthorCommandResponse};
use crate::authors::command::list_authors_cmd::{ListAuthorsCommand, ListAuthorsCommandRequest, ListAuthorsCommandResponse};
use crate::authors::command::remove_author_cmd::{RemoveAuthorCommand, RemoveAuthorCommandRequest};
use crate::authors::command::update_author_cmd::{UpdateAuthorCommand, UpdateAuthorCommandRequest, UpdateAuthorCommandResponse};
use crate::authors::domain::model::AuthorPatch;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) async fn add_author(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddAuthorCommandResponse>), ServerError> {
    let req: AddAuthorCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddAuthorCommand::new(state.author_service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_authors(
    State(state): State<AppState>) -> Result<Json<ListAuthorsCommandResponse>, ServerError> {
    let res = ListAuthorsCommand::new(state.author_service).execute(ListAuthorsCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_author_by_id(
    State(state): State<AppState>,
    Path(author_id): Path<i64>) -> Result<Json<GetAuthorCommandResponse>, ServerError> {
    let req = GetAuthorCommandRequest::new(author_id);
    let res = GetAuthorCommand::new(state.author_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    json: Json<Value>) -> Result<Json<UpdateAuthorCommandResponse>, ServerError> {
    let patch: AuthorPatch = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateAuthorCommandRequest::new(author_id, patch);
    let res = UpdateAuthorCommand::new(state.author_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveAuthorCommandRequest::new(author_id);
    let _ = RemoveAuthorCommand::new(state.author_service).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

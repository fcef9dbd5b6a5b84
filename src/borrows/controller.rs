use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value};
use crate::borrows::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::borrows::command::get_borrow_cmd::{GetBorrowCommand, GetBorrowCommandRequest, GetBorrowCommandResponse};
use crate::borrows::command::list_borrows_cmd::{ListBorrowsCommand, ListBorrowsCommandRequest, ListBorrowsCommandResponse};
use crate::borrows::command::return_borrow_cmd::{ReturnBorrowCommand, ReturnBorrowCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) async fn borrow_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BorrowBookCommandResponse>), ServerError> {
    let req: BorrowBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = BorrowBookCommand::new(state.borrow_service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_borrows(
    State(state): State<AppState>) -> Result<Json<ListBorrowsCommandResponse>, ServerError> {
    let res = ListBorrowsCommand::new(state.borrow_service).execute(ListBorrowsCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_borrow_by_id(
    State(state): State<AppState>,
    Path(borrow_id): Path<i64>) -> Result<Json<GetBorrowCommandResponse>, ServerError> {
    let req = GetBorrowCommandRequest::new(borrow_id);
    let res = GetBorrowCommand::new(state.borrow_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_borrow(
    State(state): State<AppState>,
    Path(borrow_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = ReturnBorrowCommandRequest::new(borrow_id);
    let _ = ReturnBorrowCommand::new(state.borrow_service).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

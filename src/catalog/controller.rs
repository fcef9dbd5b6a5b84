use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value};
use crate::books::domain::model::BookPatch;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog_service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let patch: BookPatch = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(book_id, patch);
    let res = UpdateBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let _ = RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::Json;
    use serde_json::json;
    use crate::authors::controller::add_author;
    use crate::catalog::controller::{add_book, find_book_by_id, find_books, remove_book, update_book};
    use crate::core::controller::{AppState, ResponseStatus};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_serve_book_lifecycle() {
        let state = AppState::new(Configuration::new_local()).await.expect("should build state");
        let (_, Json(author)) = add_author(State(state.clone()),
                                           Json(json!({"name": "Jules", "surname": "Verne", "birth_date": "1828-02-08"})))
            .await.expect("should add author");
        let author_id = author.data.expect("should return author").id;

        let (status, Json(created)) = add_book(State(state.clone()),
                                               Json(json!({"title": "Nautilus", "description": "sea", "author_id": author_id, "remaining_amount": 2})))
            .await.expect("should add book");
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!("Book created successfully.", created.message.as_str());
        let book_id = created.data.expect("should return book").id;

        let Json(updated) = update_book(State(state.clone()), Path(book_id), Json(json!({"remaining_amount": 5})))
            .await.expect("should update book");
        assert_eq!(Some(1), updated.data);

        let Json(loaded) = find_book_by_id(State(state.clone()), Path(book_id)).await.expect("should get book");
        assert_eq!(5, loaded.data.expect("should return book").remaining_amount);

        let Json(all) = find_books(State(state.clone())).await.expect("should list books");
        assert_eq!(ResponseStatus::Success, all.status);

        let status = remove_book(State(state.clone()), Path(book_id)).await.expect("should remove book");
        assert_eq!(StatusCode::NO_CONTENT, status);
        let (status, _) = remove_book(State(state), Path(book_id)).await.expect_err("should not remove twice");
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_reject_bad_book_payloads() {
        let state = AppState::new(Configuration::new_local()).await.expect("should build state");

        let (status, body) = add_book(State(state.clone()),
                                      Json(json!({"title": "t", "description": "d", "author_id": 9, "remaining_amount": 1})))
            .await.expect_err("should reject missing author");
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("Author with ID 9 not found.", body.message.as_str());

        let (status, _) = add_book(State(state.clone()),
                                   Json(json!({"title": "t", "description": "d", "author_id": 9, "remaining_amount": 0})))
            .await.expect_err("should reject empty stock");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);

        let (status, _) = update_book(State(state), Path(1), Json(json!({"remaining_amount": 20001})))
            .await.expect_err("should reject large stock");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    }
}

include!("../../lib.rs");
use axum::{
    routing::get,
    Router,
};
use lambda_http::{run, Error};
use crate::utils::db::setup_tracing;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::catalog::controller::{add_book, find_book_by_id, find_books, remove_book, update_book};

// See https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    if config.dev_mode {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }
    let state = AppState::new(config).await?;
    tracing::info!(store = ?state.config.store, dev_mode = state.config.dev_mode, "starting catalog service");

    let app = Router::new()
        .route("/books", get(find_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state);

    run(app).await
}

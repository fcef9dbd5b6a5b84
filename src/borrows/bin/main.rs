include!("../../lib.rs");
use axum::{
    routing::{get, patch},
    Router,
};
use lambda_http::{run, Error};
use crate::utils::db::setup_tracing;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::borrows::controller::{borrow_book, find_borrow_by_id, find_borrows, return_borrow};

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
    tracing::info!(store = ?state.config.store, dev_mode = state.config.dev_mode, "starting borrows service");

    let app = Router::new()
        .route("/borrows", get(find_borrows).post(borrow_book))
        .route("/borrows/:id", get(find_borrow_by_id))
        .route("/borrows/:id/return", patch(return_borrow))
        .with_state(state);

    run(app).await
}

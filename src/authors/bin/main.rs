include!("../../lib.rs");
use axum::{
    routing::get,
    Router,
};
use lambda_http::{run, Error};
use crate::utils::db::setup_tracing;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::authors::controller::{add_author, find_author_by_id, find_authors, remove_author, update_author};

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
    tracing::info!(store = ?state.config.store, dev_mode = state.config.dev_mode, "starting authors service");

    let app = Router::new()
        .route("/authors", get(find_authors).post(add_author))
        .route("/authors/:id",
               get(find_author_by_id).put(update_author).delete(remove_author))
        .with_state(state);

    run(app).await
}

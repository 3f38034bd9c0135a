//! Product entity routes. PUT takes no id path segment; the row is identified
//! by the id in the body.

use crate::handlers::products::{create, delete as delete_handler, get_by_id, list, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list).post(create).put(update))
        .route("/products/:id", get(get_by_id).delete(delete_handler))
        .with_state(state)
}

pub mod list;

use axum::Router;

use crate::api::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(list::list_tobs))
        .with_state(state)
}

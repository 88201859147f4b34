pub mod stats;

use axum::Router;
use sqlx::SqlitePool;

pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/{start}", axum::routing::get(stats::get_stats_since))
        .route("/{start}/{end}", axum::routing::get(stats::get_stats_between))
        .with_state(pool)
}

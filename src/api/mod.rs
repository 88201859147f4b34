pub mod error;
pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use error::{ApiError, ErrorResponse, bad_request, internal_error};

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dataset::ObservationWindow;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub window: Arc<ObservationWindow>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Climate API",
        description = "Read-only access to weather station precipitation and temperature observations"
    ),
    paths(
        home::home,
        precipitation::list::list_precipitation,
        stations::list::list_stations,
        tobs::list::list_tobs,
        temperature::stats::get_stats_since,
        temperature::stats::get_stats_between,
    ),
    components(schemas(
        ErrorResponse,
        stations::list::Station,
        tobs::list::TemperatureObservation,
        temperature::stats::TemperatureStats,
    )),
    tags(
        (name = "home", description = "Route listing"),
        (name = "measurements", description = "Recent precipitation and temperature readings"),
        (name = "stations", description = "Weather stations"),
        (name = "temperature", description = "Temperature statistics over a date range")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .nest("/precipitation", precipitation::router(state.clone()))
        .nest("/stations", stations::router(state.pool.clone()))
        .nest("/tobs", tobs::router(state.clone()))
        .merge(temperature::router(state.pool));

    Router::new()
        .route("/", get(home::home))
        .nest("/api/v1.0", v1)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

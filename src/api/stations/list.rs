use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;
use utoipa::ToSchema;

use crate::api::{ApiError, ErrorResponse, internal_error};

#[derive(Debug, Serialize, ToSchema, FromRow)]
pub struct Station {
    /// Station identifier, e.g. "USC00519281"
    pub station: String,
    pub name: String,
}

/// List all weather stations
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = 200, description = "All stations with their names", body = [Station]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "stations"
)]
pub async fn list_stations(State(pool): State<SqlitePool>) -> Result<Json<Vec<Station>>, ApiError> {
    let mut conn = pool.acquire().await.map_err(internal_error)?;

    let stations: Vec<Station> = sqlx::query_as(
        r#"
        SELECT station, name
        FROM station
        ORDER BY station
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(internal_error)?;

    debug!(count = stations.len(), "Listed stations");

    Ok(Json(stations))
}

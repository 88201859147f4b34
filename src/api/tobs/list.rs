use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::FromRow;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::{ApiError, AppState, ErrorResponse, internal_error};

#[derive(Debug, Serialize, ToSchema, FromRow)]
pub struct TemperatureObservation {
    /// Observation date (YYYY-MM-DD)
    pub date: String,
    /// Precipitation in inches
    pub prcp: Option<f64>,
    /// Observed temperature in degrees Fahrenheit
    pub tobs: Option<f64>,
}

/// List the past year of temperature observations for the TOBS station
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = 200, description = "Observations of the TOBS station since the cutoff date, ordered by date", body = [TemperatureObservation]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "measurements"
)]
pub async fn list_tobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    let mut conn = state.pool.acquire().await.map_err(internal_error)?;

    let observations: Vec<TemperatureObservation> = sqlx::query_as(
        r#"
        SELECT date, prcp, tobs
        FROM measurement
        WHERE date >= ? AND station = ?
        ORDER BY date
        "#,
    )
    .bind(state.window.cutoff_date.to_string())
    .bind(&state.window.tobs_station)
    .fetch_all(&mut *conn)
    .await
    .map_err(internal_error)?;

    debug!(
        count = observations.len(),
        station = %state.window.tobs_station,
        "Listed temperature observations"
    );

    Ok(Json(observations))
}

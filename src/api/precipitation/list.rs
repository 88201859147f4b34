use axum::{extract::State, Json};
use sqlx::FromRow;
use std::collections::HashMap;
use tracing::debug;

use crate::api::{ApiError, AppState, ErrorResponse, internal_error};

/// Internal struct for database row
#[derive(Debug, FromRow)]
struct PrecipitationRow {
    date: String,
    prcp: Option<f64>,
}

/// One `{ "<date>": <prcp> }` record. Rows sharing a date stay separate records.
pub type PrecipitationRecord = HashMap<String, Option<f64>>;

/// List precipitation readings of every station since the cutoff date
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = 200, description = "One single-key record per measurement, mapping its date to its precipitation", body = Vec<HashMap<String, f64>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "measurements"
)]
pub async fn list_precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<PrecipitationRecord>>, ApiError> {
    let mut conn = state.pool.acquire().await.map_err(internal_error)?;

    let rows: Vec<PrecipitationRow> = sqlx::query_as(
        r#"
        SELECT date, prcp
        FROM measurement
        WHERE date >= ?
        ORDER BY date
        "#,
    )
    .bind(state.window.cutoff_date.to_string())
    .fetch_all(&mut *conn)
    .await
    .map_err(internal_error)?;

    debug!(
        count = rows.len(),
        cutoff = %state.window.cutoff_date,
        "Listed precipitation readings"
    );

    let records = rows
        .into_iter()
        .map(|row| HashMap::from([(row.date, row.prcp)]))
        .collect();

    Ok(Json(records))
}

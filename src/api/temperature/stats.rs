use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;
use utoipa::ToSchema;

use crate::api::{ApiError, ErrorResponse, bad_request, internal_error};
use crate::dataset::DATE_FORMAT;

/// Internal struct for the aggregate row; every column is NULL when no temperature matched
#[derive(Debug, FromRow)]
struct TemperatureStatsRow {
    min_temp: Option<f64>,
    avg_temp: Option<f64>,
    max_temp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TemperatureStats {
    pub min_temp: f64,
    pub avg_temp: f64,
    pub max_temp: f64,
}

/// Parses a `YYYY-MM-DD` path segment, rejecting anything else with 400.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| bad_request(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Temperature statistics for every date on or after `start`
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First date included, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Single-element list with min/avg/max temperature, empty when no observation matches", body = [TemperatureStats]),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "temperature"
)]
pub async fn get_stats_since(
    State(pool): State<SqlitePool>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureStats>>, ApiError> {
    let start = parse_date(&start)?;
    let stats = temperature_stats(&pool, start, None).await?;
    Ok(Json(stats))
}

/// Temperature statistics for dates between `start` and `end`, inclusive
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "First date included, YYYY-MM-DD"),
        ("end" = String, Path, description = "Last date included, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Single-element list with min/avg/max temperature, empty when no observation matches", body = [TemperatureStats]),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "temperature"
)]
pub async fn get_stats_between(
    State(pool): State<SqlitePool>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureStats>>, ApiError> {
    let start = parse_date(&start)?;
    let end = parse_date(&end)?;
    let stats = temperature_stats(&pool, start, Some(end)).await?;
    Ok(Json(stats))
}

async fn temperature_stats(
    pool: &SqlitePool,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<Vec<TemperatureStats>, ApiError> {
    let mut conn = pool.acquire().await.map_err(internal_error)?;

    let row: TemperatureStatsRow = match end {
        Some(end) => {
            sqlx::query_as(
                r#"
                SELECT MIN(tobs) AS min_temp, AVG(tobs) AS avg_temp, MAX(tobs) AS max_temp
                FROM measurement
                WHERE date >= ? AND date <= ?
                "#,
            )
            .bind(start.to_string())
            .bind(end.to_string())
            .fetch_one(&mut *conn)
            .await
        }
        None => {
            sqlx::query_as(
                r#"
                SELECT MIN(tobs) AS min_temp, AVG(tobs) AS avg_temp, MAX(tobs) AS max_temp
                FROM measurement
                WHERE date >= ?
                "#,
            )
            .bind(start.to_string())
            .fetch_one(&mut *conn)
            .await
        }
    }
    .map_err(internal_error)?;

    debug!(%start, end = ?end, ?row, "Computed temperature statistics");

    let stats = match (row.min_temp, row.avg_temp, row.max_temp) {
        (Some(min_temp), Some(avg_temp), Some(max_temp)) => vec![TemperatureStats {
            min_temp,
            avg_temp,
            max_temp,
        }],
        _ => Vec::new(),
    };

    Ok(stats)
}

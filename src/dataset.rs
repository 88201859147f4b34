use chrono::{Duration, NaiveDate};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

use crate::config::Config;

/// Date format of the `measurement.date` column and of the date path parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates and station scoping the "recent" routes, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationWindow {
    pub reference_date: NaiveDate,
    pub cutoff_date: NaiveDate,
    pub tobs_station: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open dataset at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("Dataset query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Dataset has no measurements and no reference_date is configured")]
    NoMeasurements,
    #[error("Dataset has no station with measurements and no tobs_station is configured")]
    NoStations,
    #[error("Stored date '{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Opens a read-only pool on the configured dataset.
pub async fn connect(config: &Config) -> Result<SqlitePool, DatasetError> {
    let connect_error = |source: sqlx::Error| DatasetError::Connect {
        url: config.database_url.clone(),
        source,
    };

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(connect_error)?
        .read_only(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(connect_error)
}

/// Resolves the observation window, preferring configured values over dataset lookups.
pub async fn resolve_window(
    pool: &SqlitePool,
    config: &Config,
) -> Result<ObservationWindow, DatasetError> {
    let reference_date = match config.reference_date {
        Some(date) => date,
        None => latest_measurement_date(pool).await?,
    };
    let cutoff_date = reference_date - Duration::days(config.cutoff_days);

    let tobs_station = match &config.tobs_station {
        Some(station) => station.clone(),
        None => most_active_station(pool).await?,
    };

    info!(
        %reference_date,
        %cutoff_date,
        tobs_station = %tobs_station,
        "Resolved observation window"
    );

    Ok(ObservationWindow {
        reference_date,
        cutoff_date,
        tobs_station,
    })
}

async fn latest_measurement_date(pool: &SqlitePool) -> Result<NaiveDate, DatasetError> {
    let (latest,): (Option<String>,) = sqlx::query_as("SELECT MAX(date) FROM measurement")
        .fetch_one(pool)
        .await?;

    let latest = latest.ok_or(DatasetError::NoMeasurements)?;
    NaiveDate::parse_from_str(&latest, DATE_FORMAT).map_err(|_| DatasetError::InvalidDate(latest))
}

async fn most_active_station(pool: &SqlitePool) -> Result<String, DatasetError> {
    let busiest: Option<(String, i64)> = sqlx::query_as(
        r#"
        SELECT station, COUNT(*) AS observations
        FROM measurement
        GROUP BY station
        ORDER BY observations DESC, station
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    busiest
        .map(|(station, _)| station)
        .ok_or(DatasetError::NoStations)
}

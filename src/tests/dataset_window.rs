use chrono::NaiveDate;

use crate::config::Config;
use crate::dataset::{resolve_window, DatasetError};
use crate::tests::fixtures::{empty_db, insert_measurement, seeded_db, WAIHEE, WAIKIKI};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// the window defaults to a year before the latest measurement, for the busiest station
#[tokio::test]
async fn test_window_from_dataset() {
    let pool = seeded_db().await;

    let window = resolve_window(&pool, &Config::default()).await.unwrap();

    assert_eq!(window.reference_date, date(2017, 8, 23));
    assert_eq!(window.cutoff_date, date(2016, 8, 23));
    assert_eq!(window.tobs_station, WAIHEE);
}

// configured values win over the dataset lookups
#[tokio::test]
async fn test_window_config_overrides() {
    let pool = seeded_db().await;
    let config = Config {
        reference_date: Some(date(2017, 1, 1)),
        cutoff_days: 30,
        tobs_station: Some(WAIKIKI.to_string()),
        ..Config::default()
    };

    let window = resolve_window(&pool, &config).await.unwrap();

    assert_eq!(window.reference_date, date(2017, 1, 1));
    assert_eq!(window.cutoff_date, date(2016, 12, 2));
    assert_eq!(window.tobs_station, WAIKIKI);
}

// ties on measurement count go to the smallest station id
#[tokio::test]
async fn test_most_active_station_tie_break() {
    let pool = empty_db().await;
    insert_measurement(&pool, "B", "2017-01-01", None, Some(70.0)).await;
    insert_measurement(&pool, "A", "2017-01-02", None, Some(71.0)).await;

    let window = resolve_window(&pool, &Config::default()).await.unwrap();

    assert_eq!(window.tobs_station, "A");
}

// with nothing to derive a reference date from, startup must fail
#[tokio::test]
async fn test_empty_dataset_is_an_error() {
    let pool = empty_db().await;

    let result = resolve_window(&pool, &Config::default()).await;

    assert!(matches!(result, Err(DatasetError::NoMeasurements)));
}

#[tokio::test]
async fn test_empty_dataset_without_tobs_station() {
    let pool = empty_db().await;
    let config = Config {
        reference_date: Some(date(2017, 8, 23)),
        ..Config::default()
    };

    let result = resolve_window(&pool, &config).await;

    assert!(matches!(result, Err(DatasetError::NoStations)));
}

#[tokio::test]
async fn test_malformed_stored_date() {
    let pool = empty_db().await;
    insert_measurement(&pool, WAIHEE, "08/23/2017", None, None).await;

    let result = resolve_window(&pool, &Config::default()).await;

    assert!(matches!(result, Err(DatasetError::InvalidDate(d)) if d == "08/23/2017"));
}

// the startup connection fails fast and names the database
#[tokio::test]
async fn test_connect_missing_database() {
    let config = Config {
        database_url: "sqlite://does/not/exist.sqlite".to_string(),
        ..Config::default()
    };

    let err = crate::dataset::connect(&config).await.unwrap_err();

    assert!(matches!(err, DatasetError::Connect { .. }));
    assert!(err.to_string().contains("does/not/exist.sqlite"));
}

//! SQLite-backed document store for weather searches.
//!
//! One row per city: the decoded forecast payload serialized as a JSON
//! document plus the write time. `city` is the primary key, so
//! `INSERT OR REPLACE` gives the atomic keyed upsert the endpoints rely
//! on — a repeated search overwrites, it never appends.
//!
//! Each operation opens its own connection against the configured path.

use common::model::forecast::ForecastResponse;
use common::model::record::SearchRecord;
use log::warn;
use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates the search table if it does not exist yet. Called once at startup.
pub fn init(path: &str) -> Result<(), String> {
    let conn = Connection::open(path).map_err(|e| e.to_string())?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS searches (
            city      TEXT PRIMARY KEY,
            data      TEXT NOT NULL,
            timestamp INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Inserts or replaces the stored forecast for `city`, stamping the
/// current time. The replaced row's timestamp is discarded with it.
pub fn upsert_search(path: &str, city: &str, data: &ForecastResponse) -> Result<(), String> {
    let document = serde_json::to_string(data).map_err(|e| e.to_string())?;
    let conn = Connection::open(path).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT OR REPLACE INTO searches (city, data, timestamp) VALUES (?1, ?2, ?3)",
        params![city, document, now_unix()],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the most recently written records, newest first, capped at
/// `limit`. Rows whose stored document no longer decodes are skipped.
pub fn recent_searches(path: &str, limit: u32) -> Result<Vec<SearchRecord>, String> {
    let conn = Connection::open(path).map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare("SELECT city, data, timestamp FROM searches ORDER BY timestamp DESC LIMIT ?1")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(params![limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut records = Vec::new();
    for row in rows {
        let (city, document, timestamp) = row.map_err(|e| e.to_string())?;
        match serde_json::from_str::<ForecastResponse>(&document) {
            Ok(data) => records.push(SearchRecord {
                city,
                data,
                timestamp,
            }),
            Err(e) => warn!("Skipping unreadable record for '{}': {}", city, e),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::forecast::{City, Condition, ForecastEntry, MainReadings, Wind};
    use tempfile::TempDir;

    fn forecast(city_name: &str, temp: f64) -> ForecastResponse {
        ForecastResponse {
            city: City {
                name: city_name.to_string(),
                country: "GB".to_string(),
            },
            list: vec![ForecastEntry {
                dt: 1_700_000_000,
                main: MainReadings {
                    temp,
                    feels_like: temp,
                    humidity: 70.0,
                    pressure: 1012.0,
                },
                weather: vec![Condition {
                    description: "light rain".to_string(),
                    icon: "10d".to_string(),
                }],
                wind: Wind { speed: 4.2 },
                rain: None,
            }],
        }
    }

    fn temp_db(dir: &TempDir) -> String {
        let path = dir.path().join("weather.sqlite");
        let path = path.to_str().unwrap().to_string();
        init(&path).unwrap();
        path
    }

    fn row_count(path: &str) -> i64 {
        let conn = Connection::open(path).unwrap();
        conn.query_row("SELECT COUNT(*) FROM searches", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn repeated_search_overwrites_instead_of_appending() {
        let dir = TempDir::new().unwrap();
        let path = temp_db(&dir);

        upsert_search(&path, "London", &forecast("London", 12.0)).unwrap();
        assert_eq!(row_count(&path), 1);

        upsert_search(&path, "London", &forecast("London", 15.5)).unwrap();
        assert_eq!(row_count(&path), 1);

        let records = recent_searches(&path, 10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city, "London");
        assert_eq!(records[0].data.list[0].main.temp, 15.5);
    }

    #[test]
    fn history_is_capped_and_ordered_newest_first() {
        let dir = TempDir::new().unwrap();
        let path = temp_db(&dir);

        for i in 0..12 {
            let city = format!("City{}", i);
            upsert_search(&path, &city, &forecast(&city, 10.0)).unwrap();
        }
        // Spread the write times out so the ordering is observable.
        let conn = Connection::open(&path).unwrap();
        for i in 0..12i64 {
            conn.execute(
                "UPDATE searches SET timestamp = ?1 WHERE city = ?2",
                params![1_700_000_000 + i, format!("City{}", i)],
            )
            .unwrap();
        }

        let records = recent_searches(&path, 10).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].city, "City11");
        for pair in records.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn unreadable_rows_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = temp_db(&dir);

        upsert_search(&path, "Paris", &forecast("Paris", 18.0)).unwrap();
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO searches (city, data, timestamp) VALUES ('Broken', 'not json', 1)",
            [],
        )
        .unwrap();

        let records = recent_searches(&path, 10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city, "Paris");
    }

    #[test]
    fn unusable_store_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory is not a database file.
        let path = dir.path().to_str().unwrap();
        assert!(recent_searches(path, 10).is_err());
        assert!(upsert_search(path, "London", &forecast("London", 12.0)).is_err());
    }
}

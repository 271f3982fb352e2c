//! # Weather Service Module
//!
//! This module aggregates the API endpoints of the weather proxy. It acts
//! as a router, directing incoming HTTP requests under the `/api/weather`
//! path to the handler logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `forecast`: Proxies a city lookup to the forecast provider and
//!   persists the result.
//! - `history`: Lists the most recent persisted searches.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod forecast;
mod history;

/// The base path for all weather-related API endpoints.
const API_PATH: &str = "/api/weather";

/// Configures and returns the Actix `Scope` for the weather routes.
///
/// # Registered Routes:
///
/// *   **`GET /history`**:
///     - **Handler**: `history::process`
///     - **Description**: Returns the most recently searched cities (at
///       most 10 records), newest first. Registered before the city route
///       so that "history" is never treated as a city name.
///
/// *   **`GET /{city}`**:
///     - **Handler**: `forecast::process`
///     - **Description**: Fetches the 5-day forecast for the given city
///       from the provider, upserts the search record, and returns the
///       decoded payload.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/history", get().to(history::process))
        .route("/{city}", get().to(forecast::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage;
    use actix_web::{test, web, App};
    use common::model::record::SearchRecord;
    use tempfile::TempDir;

    fn test_config(database_path: String) -> Config {
        Config {
            api_key: "test-key".to_string(),
            database_path,
            port: 0,
            // TCP port 9 (discard) is not listening; connections fail fast.
            provider_base_url: "http://127.0.0.1:9".to_string(),
        }
    }

    #[actix_web::test]
    async fn history_on_a_fresh_store_is_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weather.sqlite");
        let path = path.to_str().unwrap().to_string();
        storage::init(&path).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(path)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/weather/history")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let records: Vec<SearchRecord> = test::read_body_json(resp).await;
        assert!(records.is_empty());
    }

    #[actix_web::test]
    async fn history_degrades_to_empty_list_on_storage_failure() {
        let dir = TempDir::new().unwrap();
        // A directory path cannot be opened as a database.
        let config = test_config(dir.path().to_str().unwrap().to_string());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/weather/history")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let body = test::read_body(resp).await;
        assert_eq!(body, "[]".as_bytes());
    }

    #[actix_web::test]
    async fn provider_failure_returns_fixed_error_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weather.sqlite");
        let path = path.to_str().unwrap().to_string();
        storage::init(&path).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(path.clone())))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/weather/Zzyzxtown")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "City not found!" }));

        assert!(storage::recent_searches(&path, 10).unwrap().is_empty());
    }
}

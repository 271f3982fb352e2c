//! # Forecast Proxy Service
//!
//! Backend logic for the `GET /api/weather/{city}` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the city name as a raw path
//!     segment. The name is forwarded to the provider exactly as typed;
//!     no trimming or validation happens here.
//!
//! 2.  **Provider Call**: `fetch_forecast` builds the provider URL from
//!     the configured base, credential, and the metric unit system, then
//!     performs a single GET with transport-default timeouts. There are
//!     no retries.
//!
//! 3.  **Decoding**: A successful provider response is decoded into
//!     `common::model::forecast::ForecastResponse` at this boundary. This
//!     is the only place that knows the provider's wire schema.
//!
//! 4.  **Persistence**: The decoded payload is upserted into the search
//!     store, keyed by the city string. A storage failure at this point is
//!     logged but does not fail the request: the payload was already
//!     obtained and the caller still gets it.
//!
//! 5.  **HTTP Response**: `200 OK` with the decoded payload, or `500` with
//!     the fixed body `{"error":"City not found!"}` on any provider or
//!     transport failure. Provider error detail is never exposed.

use actix_web::{web, HttpResponse, Responder};
use common::model::forecast::ForecastResponse;
use log::{error, info};

use crate::config::Config;
use crate::storage;

/// Fixed user-facing message for every lookup failure.
const CITY_NOT_FOUND: &str = "City not found!";

/// Actix web handler for the `GET /api/weather/{city}` endpoint.
pub async fn process(city: web::Path<String>, config: web::Data<Config>) -> impl Responder {
    match fetch_forecast(&config, &city).await {
        Ok(forecast) => {
            // The payload is already in hand; a write failure must not
            // cost the caller the response.
            if let Err(e) = storage::upsert_search(&config.database_path, &city, &forecast) {
                error!("Failed to persist search for '{}': {}", city.as_str(), e);
            }
            HttpResponse::Ok().json(forecast)
        }
        Err(e) => {
            info!("Forecast lookup failed for '{}': {}", city.as_str(), e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": CITY_NOT_FOUND }))
        }
    }
}

/// Fetches and decodes the forecast for `city` from the provider.
///
/// Returns `Err` on transport errors, non-success provider statuses, and
/// payloads that do not decode. The error text stays internal; callers
/// map it to the generic failure shape.
async fn fetch_forecast(config: &Config, city: &str) -> Result<ForecastResponse, String> {
    let url = format!(
        "{}/forecast?q={}&appid={}&units=metric",
        config.provider_base_url, city, config.api_key
    );

    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("provider returned status {}", response.status()));
    }

    response
        .json::<ForecastResponse>()
        .await
        .map_err(|e| e.to_string())
}

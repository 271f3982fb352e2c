//! Process configuration, read from the environment once at startup.
//!
//! The resulting `Config` is immutable and shared with the handlers as
//! `web::Data<Config>`; no other code reads environment variables.

use std::env;

const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_DATABASE_PATH: &str = "weather.sqlite";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API credential (`OPENWEATHER_API_KEY`, required).
    pub api_key: String,
    /// SQLite file backing the search store (`DATABASE_PATH`).
    pub database_path: String,
    /// Listen port (`PORT`).
    pub port: u16,
    /// Forecast provider base URL (`OPENWEATHER_BASE_URL`).
    pub provider_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| "OPENWEATHER_API_KEY must be set".to_string())?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT value '{}': {}", raw, e))?,
            Err(_) => DEFAULT_PORT,
        };

        let provider_base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_string());

        Ok(Self {
            api_key,
            database_path,
            port,
            provider_base_url,
        })
    }
}

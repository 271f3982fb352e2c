//! Typed model of the OpenWeatherMap 5-day/3-hour forecast payload.
//!
//! The provider response is decoded into these structs at the single point
//! where it enters the system (the backend proxy handler). Everything
//! downstream — the SQLite document store, the history endpoint, and the
//! dashboard charts — works with the decoded form rather than an untyped
//! JSON blob. Unknown provider fields are dropped during deserialization.
//!
//! The forecast list carries one entry per 3-hour slot. The dashboard
//! derives its per-day series by taking every 8th entry (`daily_samples`),
//! so a full 5-day payload of 40 entries yields 5 samples.

use serde::{Deserialize, Serialize};

/// Number of 3-hour forecast entries per 24-hour period.
pub const ENTRIES_PER_DAY: usize = 8;

/// A decoded forecast response for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub city: City,
    pub list: Vec<ForecastEntry>,
}

/// The city block of the provider response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecasted time, unix seconds (UTC).
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    /// Absent entirely when no rain is forecast for the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<Rain>,
}

/// Thermal and atmospheric readings for a slot (metric units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

/// Weather description with the provider's icon code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Rain volume block. The provider keys the volume by accumulation window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rain {
    #[serde(rename = "3h", default, skip_serializing_if = "Option::is_none")]
    pub three_hour: Option<f64>,
}

/// Selects one entry per day from a 3-hour-interval forecast list:
/// indices 0, 8, 16, ... A 40-entry payload yields exactly 5 samples.
pub fn daily_samples(list: &[ForecastEntry]) -> Vec<&ForecastEntry> {
    list.iter().step_by(ENTRIES_PER_DAY).collect()
}

/// Rain volume for an entry in millimeters, 0.0 when the provider sent
/// no rain block (or an empty one) for the slot.
pub fn precipitation_mm(entry: &ForecastEntry) -> f64 {
    entry
        .rain
        .as_ref()
        .and_then(|rain| rain.three_hour)
        .unwrap_or(0.0)
}

//! Weather report endpoint.
//!
//! Returns a fabricated report for the city named in the path. The city is
//! echoed back verbatim and the timestamp is captured at request time; every
//! other field is a fixed placeholder value.

use axum::{extract::Path, Json};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use crate::config::{
    PLACEHOLDER_CONDITION, PLACEHOLDER_HUMIDITY, PLACEHOLDER_TEMPERATURE_C, TIMESTAMP_FORMAT,
};

/// Weather report for a single city.
///
/// Constructed fresh for each request and discarded after serialization;
/// nothing is stored or cached.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature_c: f64,
    pub condition: &'static str,
    pub humidity: u8,
    pub time: String,
}

impl WeatherReport {
    /// Builds a report for `city`, stamped with the current UTC time.
    pub fn now(city: String) -> Self {
        Self {
            city,
            temperature_c: PLACEHOLDER_TEMPERATURE_C,
            condition: PLACEHOLDER_CONDITION,
            humidity: PLACEHOLDER_HUMIDITY,
            time: Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Weather report handler.
///
/// Accepts any city string the routing layer delivers; there are no error
/// conditions and no validation of the path segment.
#[instrument(name = "weather::report", skip_all, fields(city = %city))]
pub async fn report(Path(city): Path<String>) -> Json<WeatherReport> {
    Json(WeatherReport::now(city))
}

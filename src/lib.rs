//! Stratus - a mock weather HTTP API.
//!
//! Serves two read-only endpoints: a health probe and a fabricated weather
//! report for a city name supplied in the URL path. Reports carry fixed
//! placeholder values; only the city and the timestamp vary per request.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use routes::create_router;

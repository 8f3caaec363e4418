//! HTTP server module.
//!
//! Binds the configured address, serves the router, and handles graceful
//! shutdown on SIGTERM/SIGINT with connection draining.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

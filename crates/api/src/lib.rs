//! HTTP API: routing, request/response mapping and request tracing.

pub mod app;
pub mod middleware;

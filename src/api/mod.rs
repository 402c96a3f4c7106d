//! API module - HTTP routes, handlers, and stub payloads

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

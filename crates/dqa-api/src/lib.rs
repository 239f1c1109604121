//! dqa-api library root.
//!
//! Exposes the router and configuration so integration tests can drive the
//! HTTP layer against an in-memory store.

pub mod app;
pub mod audit;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

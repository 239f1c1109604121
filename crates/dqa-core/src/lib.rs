//! dqa-core
//!
//! Pure domain types, table layouts, and the processing clock.
//! No store dependency. This is the shared vocabulary of the DQA system.

pub mod clock;
pub mod error;
pub mod models;
pub mod tables;

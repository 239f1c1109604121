//! dqa-storage
//!
//! Append-mostly tabular stores. A table is a sheet of string cells whose
//! first row is the header. Backends: in-memory, S3 (one JSON object per
//! table), and Google Sheets.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod records;
pub mod s3;
pub mod sheets;
pub mod state;
pub mod store;

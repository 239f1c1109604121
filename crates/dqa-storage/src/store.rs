use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A remote table that rows can be appended to and read back from.
///
/// Implementations make no ordering promise between concurrent writers.
/// Methods return boxed futures for dyn compatibility.
pub trait TableStore: Send + Sync {
    /// Short backend name for logs (e.g. "memory", "s3").
    fn backend(&self) -> &str;

    /// Every row of `table`, header included. A missing table reads as empty.
    fn get_all_values<'a>(
        &'a self,
        table: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vec<String>>, StorageError>>;

    /// Append `rows` after the last row of `table` in one call.
    fn append_rows<'a>(
        &'a self,
        table: &'a str,
        rows: Vec<Vec<String>>,
    ) -> BoxFuture<'a, Result<(), StorageError>>;
}

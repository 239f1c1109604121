//! Header-aware reads and writes on top of [`TableStore`].

use dqa_core::models::table::Table;

use crate::error::StorageError;
use crate::store::TableStore;

/// Append `rows`, writing `header` first if the table has no rows yet.
pub async fn append_with_header(
    store: &dyn TableStore,
    table: &str,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
) -> Result<usize, StorageError> {
    let existing = store.get_all_values(table).await?;

    let mut batch = Vec::with_capacity(rows.len() + 1);
    if existing.is_empty() {
        tracing::info!(table, backend = store.backend(), "writing header to empty table");
        batch.push(header);
    }
    let appended = rows.len();
    batch.extend(rows);

    store.append_rows(table, batch).await?;
    tracing::debug!(table, rows = appended, "rows appended");
    Ok(appended)
}

/// Read the whole table as header + records.
pub async fn get_all_records(store: &dyn TableStore, table: &str) -> Result<Table, StorageError> {
    let values = store.get_all_values(table).await?;
    Ok(Table::from_values(values))
}

/// The `n` most recent records.
pub async fn recent_records(
    store: &dyn TableStore,
    table: &str,
    n: usize,
) -> Result<Table, StorageError> {
    Ok(get_all_records(store, table).await?.tail(n))
}

//! Google Sheets v4 backend. Each table is a worksheet of one spreadsheet.

pub mod auth;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::store::{BoxFuture, TableStore};

use auth::TokenSource;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Serialize)]
struct AppendBody<'a> {
    values: &'a [Vec<String>],
}

struct SheetsClient {
    spreadsheet_id: String,
    tokens: TokenSource,
}

/// Values endpoint for a whole worksheet.
///
/// The name is quoted so Sheets never reads it as an A1 cell reference
/// (`TX1` would otherwise be cell TX1 of the first sheet).
pub fn values_url(spreadsheet_id: &str, table: &str) -> String {
    let range = format!("'{}'", table.replace('\'', "''"));
    format!(
        "{SHEETS_API}/{}/values/{}",
        urlencoding::encode(spreadsheet_id),
        urlencoding::encode(&range)
    )
}

impl SheetsClient {
    fn get_values(&self, table: &str) -> Result<Vec<Vec<String>>, StorageError> {
        let token = self.tokens.access_token()?;
        let mut resp = ureq::get(&values_url(&self.spreadsheet_id, table))
            .header("Authorization", format!("Bearer {token}"))
            .query("majorDimension", "ROWS")
            .call()
            .map_err(|e| StorageError::Sheets(format!("read '{table}' failed: {e}")))?;
        let range: ValueRange = resp
            .body_mut()
            .read_json()
            .map_err(|e| StorageError::Sheets(format!("invalid values response: {e}")))?;

        Ok(range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    fn append(&self, table: &str, rows: &[Vec<String>]) -> Result<(), StorageError> {
        let token = self.tokens.access_token()?;
        ureq::post(&format!("{}:append", values_url(&self.spreadsheet_id, table)))
            .header("Authorization", format!("Bearer {token}"))
            .query("valueInputOption", "RAW")
            .query("insertDataOption", "INSERT_ROWS")
            .send_json(AppendBody { values: rows })
            .map_err(|e| StorageError::Sheets(format!("append to '{table}' failed: {e}")))?;
        Ok(())
    }
}

fn cell_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Sheets-backed store. HTTP calls run on the blocking pool.
#[derive(Clone)]
pub struct SheetsStore {
    client: Arc<SheetsClient>,
}

impl SheetsStore {
    pub fn new(spreadsheet_id: impl Into<String>, tokens: TokenSource) -> Self {
        Self {
            client: Arc::new(SheetsClient {
                spreadsheet_id: spreadsheet_id.into(),
                tokens,
            }),
        }
    }
}

async fn blocking<T, F>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Sheets(format!("request task failed: {e}")))?
}

impl TableStore for SheetsStore {
    fn backend(&self) -> &str {
        "google_sheets"
    }

    fn get_all_values<'a>(
        &'a self,
        table: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vec<String>>, StorageError>> {
        let client = Arc::clone(&self.client);
        let table = table.to_string();
        Box::pin(blocking(move || client.get_values(&table)))
    }

    fn append_rows<'a>(
        &'a self,
        table: &'a str,
        rows: Vec<Vec<String>>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        let client = Arc::clone(&self.client);
        let table = table.to_string();
        Box::pin(blocking(move || client.append(&table, &rows)))
    }
}

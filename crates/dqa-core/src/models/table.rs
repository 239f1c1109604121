use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A sheet read back from the store: one header row plus data rows.
///
/// Data rows are padded or truncated to the header width so every row can
/// be zipped against the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build from raw cell values. The first row is the header; an empty
    /// input yields an empty table.
    pub fn from_values(values: Vec<Vec<String>>) -> Self {
        let mut iter = values.into_iter();
        let Some(header) = iter.next() else {
            return Self::default();
        };
        let width = header.len();
        let rows = iter
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { header, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The most recent `n` rows, oldest first.
    pub fn tail(&self, n: usize) -> Self {
        let start = self.rows.len().saturating_sub(n);
        Self {
            header: self.header.clone(),
            rows: self.rows[start..].to_vec(),
        }
    }
}

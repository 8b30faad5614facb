use anyhow::{Context, Result};
use rusqlite::types::Type;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Documents live as JSON text next to their indexed key columns.
pub fn encode<T: Serialize>(document: &T) -> Result<String> {
    serde_json::to_string(document).context("Failed to encode document")
}

pub fn decode<T: DeserializeOwned>(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

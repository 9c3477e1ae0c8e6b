// src/exports/json.rs

use crate::domain::{
    BookingRecord, InventoryItemRecord, RawBooking, RawInventoryItem, RawRoom, RoomRecord,
};
use crate::errors::{AppError, Result};
use crate::exports::RecordSource;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A directory of collection exports: `rooms.json`, `inventory.json` and
/// `bookings.json`.
///
/// Each file holds either an array of documents or an object keyed by
/// document id, the shape the collection dump produces. In the keyed form a
/// document whose `id` is missing, null or blank takes the key.
#[derive(Debug, Clone)]
pub struct JsonExport {
    dir: PathBuf,
}

impl JsonExport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load<R, T>(&self, collection: &str, convert: fn(R) -> Result<T>) -> Result<Vec<T>>
    where
        R: DeserializeOwned,
    {
        let path = self.dir.join(format!("{collection}.json"));
        let docs = read_documents(&path)?;

        let mut out = Vec::with_capacity(docs.len());
        let mut skipped = 0usize;

        for doc in docs {
            let raw: R =
                serde_json::from_value(doc).map_err(|source| AppError::Json {
                    path: path.clone(),
                    source,
                })?;

            match convert(raw) {
                Ok(record) => out.push(record),
                Err(err @ AppError::MissingField { .. }) => {
                    warn!(collection, %err, "Skipping document");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        info!(collection, count = out.len(), skipped, "Loaded collection");
        Ok(out)
    }
}

impl RecordSource for JsonExport {
    fn rooms(&self) -> Result<Vec<RoomRecord>> {
        self.load::<RawRoom, _>("rooms", RoomRecord::from_raw)
    }

    fn inventory(&self) -> Result<Vec<InventoryItemRecord>> {
        self.load::<RawInventoryItem, _>("inventory", InventoryItemRecord::from_raw)
    }

    fn bookings(&self) -> Result<Vec<BookingRecord>> {
        self.load::<RawBooking, _>("bookings", BookingRecord::from_raw)
    }
}

/// Reads an export file into a flat list of documents. A missing file is an
/// empty collection.
fn read_documents(path: &Path) -> Result<Vec<Value>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Export file not found, treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(AppError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let root: Value = serde_json::from_str(&text).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match root {
        Value::Array(docs) => Ok(docs),
        Value::Object(by_id) => Ok(by_id
            .into_iter()
            .map(|(key, mut doc)| {
                if let Value::Object(fields) = &mut doc {
                    let has_id = matches!(
                        fields.get("id"),
                        Some(Value::String(id)) if !id.trim().is_empty()
                    );
                    if !has_id {
                        fields.insert("id".to_string(), Value::String(key));
                    }
                }
                doc
            })
            .collect()),
        _ => Err(AppError::invalid(format!(
            "{} must hold an array or an object of documents",
            path.display()
        ))),
    }
}

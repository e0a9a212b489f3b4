//! File I/O utilities with atomic writes
//!
//! Reads fall back to a documented default on any failure; writes go through
//! a temp file and rename so a crash never leaves a half-written store.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseWiseError;

/// Read JSON from a file, falling back to the provided default.
///
/// A missing file, an unreadable file, and malformed JSON all yield the
/// fallback; the latter two are logged at warn level. Callers never see an
/// error from a load.
pub fn read_json_or_else<T, P, F>(path: P, fallback: F) -> T
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let path = path.as_ref();

    if !path.exists() {
        return fallback();
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("failed to open {}: {}; using default", path.display(), e);
            return fallback();
        }
    };

    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(value) => value,
        Err(e) => {
            warn!("failed to parse {}: {}; using default", path.display(), e);
            fallback()
        }
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseWiseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseWiseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseWiseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

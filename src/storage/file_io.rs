//! Collection files
//!
//! A collection is stored as a JSON array in a file of its own. A file that
//! is absent, blank or holds `null` reads as an empty collection; anything
//! else that fails to parse is reported with the file name. Writes replace
//! the file in one rename, so a reader sees either the old array or the new
//! one.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Read a collection from `path`
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> FinanceResult<Vec<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Option<Vec<T>> =
        serde_json::from_str(&raw).map_err(|e| storage_error("parse", path, e))?;
    Ok(items.unwrap_or_default())
}

/// Replace the collection stored at `path`
pub fn store_collection<T: Serialize>(path: &Path, items: &[T]) -> FinanceResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory for", path, e))?;
    }

    let body = serde_json::to_string_pretty(items).map_err(|e| storage_error("encode", path, e))?;

    let staging = staging_path(path);
    write_synced(&staging, body.as_bytes()).map_err(|e| storage_error("write", &staging, e))?;

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("replace", path, e));
    }
    Ok(())
}

/// Sibling file the new contents are written to before the rename
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("collection"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn storage_error(action: &str, path: &Path, e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Storage(format!("Could not {} {}: {}", action, path.display(), e))
}

//! Read and write small JSON documents.
//!
//! Reads never fail: the result says whether the file was there and parseable.
//! Writes are pretty-printed with 4-space indentation and replace the target atomically.

use crate::domain::LoadOutcome;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Read and parse `path`. Missing file -> `Absent`; unreadable or not JSON -> `Corrupt`;
/// valid JSON of the wrong shape -> `Mismatch`.
pub async fn read_document<T: DeserializeOwned>(path: &Path) -> LoadOutcome<T> {
    let raw = match fs::read_to_string(path).await {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::Absent,
        Err(e) => return LoadOutcome::Corrupt(format!("read: {}", e)),
    };
    match serde_json::from_str(&raw) {
        Ok(v) => LoadOutcome::Loaded(v),
        Err(e) if e.classify() == Category::Data => {
            LoadOutcome::Mismatch(format!("shape: {}", e))
        }
        Err(e) => LoadOutcome::Corrupt(format!("parse: {}", e)),
    }
}

/// Serialize `value` with 4-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Atomic save using write-replace:
/// 1. Write to temp file next to the target
/// 2. sync_all() to flush to disk
/// 3. Rename over the target
///
/// Parent directories are created as needed. Errors are returned as plain strings
/// for the caller to wrap in its own `DomainError` variant.
pub async fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = to_pretty_json(value).map_err(|e| format!("serialize: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("create directory {}: {}", parent.display(), e))?;
    }

    let temp_path = temp_path_for(path);
    let mut f = fs::File::create(&temp_path)
        .await
        .map_err(|e| format!("create temp file: {}", e))?;
    f.write_all(&json)
        .await
        .map_err(|e| format!("write temp file: {}", e))?;
    f.sync_all()
        .await
        .map_err(|e| format!("sync temp file: {}", e))?;
    drop(f);

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(format!("atomic rename failed: {}", e));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

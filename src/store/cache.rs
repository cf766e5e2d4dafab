//! Staleness-aware snapshot cache
//!
//! The activity log is appended by the capture client and polled by query
//! callers, so the normalized record set is reused until the file's
//! modification marker (mtime + size) changes. A missing source clears the
//! cache so the next successful write is picked up fresh.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::core::Session;
use crate::error::StoreError;
use crate::store::parser::parse_document;
use crate::utils::parse_debug_enabled;

/// Get file metadata (mtime, size)
pub(crate) fn file_meta(path: &Path) -> Option<(i64, u64)> {
    let meta = fs::metadata(path).ok()?;
    let mtime = meta
        .modified()
        .ok()?
        .duration_since(UNIX_EPOCH)
        .ok()?
        .as_secs() as i64;
    Some((mtime, meta.len()))
}

pub(crate) struct SnapshotCache {
    path: PathBuf,
    marker: Option<(i64, u64)>,
    records: Vec<Session>,
}

impl SnapshotCache {
    pub(crate) fn new(path: PathBuf) -> Self {
        SnapshotCache {
            path,
            marker: None,
            records: Vec::new(),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Normalized records, reloaded only when the source changed. An empty
    /// cached set is always re-read so a failed load can recover.
    pub(crate) fn records(&mut self) -> Result<&[Session], StoreError> {
        let Some(meta) = file_meta(&self.path) else {
            self.invalidate();
            return Err(StoreError::Missing);
        };
        if self.marker != Some(meta) || self.records.is_empty() {
            self.reload(meta)?;
        }
        Ok(&self.records)
    }

    fn reload(&mut self, meta: (i64, u64)) -> Result<(), StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.invalidate();
                return Err(StoreError::Missing);
            }
            Err(e) => {
                self.invalidate();
                return Err(StoreError::Io(e));
            }
        };
        match parse_document(&raw) {
            Ok(records) => {
                if parse_debug_enabled() {
                    eprintln!(
                        "Reloaded {} sessions from {}",
                        records.len(),
                        self.path.display()
                    );
                }
                self.marker = Some(meta);
                self.records = records;
                Ok(())
            }
            Err(e) => {
                self.invalidate();
                Err(e)
            }
        }
    }

    fn invalidate(&mut self) {
        self.marker = None;
        self.records.clear();
    }
}

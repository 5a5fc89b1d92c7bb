//! File-backed link store
//!
//! The store owns the ordered record sequence and is the sole source of
//! truth. It persists to a single JSON file slot; every mutation rewrites
//! the whole slot synchronously before returning. Concurrent processes
//! sharing the slot get last-write-wins, which is accepted and out of
//! scope here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::{Result, SnaplinkError};
use crate::models::LinkRecord;

pub struct LinkStore {
    file_path: PathBuf,
    records: Vec<LinkRecord>,
}

impl LinkStore {
    /// Open the store, loading from the file slot.
    ///
    /// A missing file is created empty. Malformed content is logged and
    /// treated as an empty store rather than a fatal error.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let file_path = path.into();
        let records = Self::load_from_file(&file_path)?;
        info!(
            "link store opened with {} records ({})",
            records.len(),
            file_path.display()
        );
        Ok(LinkStore { file_path, records })
    }

    fn load_from_file(path: &Path) -> Result<Vec<LinkRecord>> {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Vec<LinkRecord>>(&content) {
                Ok(records) => Ok(records),
                Err(e) => {
                    warn!("store slot is malformed, starting empty: {}", e);
                    Ok(Vec::new())
                }
            },
            Err(_) => {
                fs::write(path, "[]").map_err(|e| {
                    SnaplinkError::file_operation(format!(
                        "failed to create store file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                info!("created empty store file: {}", path.display());
                Ok(Vec::new())
            }
        }
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, code: &str) -> Option<&LinkRecord> {
        self.records.iter().find(|r| r.short_code == code)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Append a record and persist the full sequence.
    pub fn append(&mut self, record: LinkRecord) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Apply `f` to the record with the given short code, then persist.
    ///
    /// Returns whether a record matched. Nothing is written when no record
    /// matches.
    pub fn mutate_one<F>(&mut self, code: &str, f: F) -> Result<bool>
    where
        F: FnOnce(&mut LinkRecord),
    {
        match self.records.iter_mut().find(|r| r.short_code == code) {
            Some(record) => {
                f(record);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }
}

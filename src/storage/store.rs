//! # File-backed store
//!
//! Every operation performs a direct blocking filesystem call and returns
//! before the next step proceeds; there is no cache and no locking. The
//! check-then-act sequences in [`FileStore::create`] and
//! [`FileStore::overwrite`] are not atomic with respect to other processes,
//! so concurrent writers racing on the same name are undefined. Single
//! process, effectively single-threaded use is assumed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{CleanupReport, StorageError, StorageResult};
use crate::config::StoreConfig;

/// File-per-entity JSON store rooted at a configured data directory.
#[derive(Debug)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    /// Create a store over the given layout. The data root itself is not
    /// created here; see [`crate::setup`] for bootstrap.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The layout this store was constructed with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn file_path(&self, name: &str, rel: &str) -> PathBuf {
        self.config.data_root.join(rel).join(format!("{name}.json"))
    }

    fn dir_path(&self, name: &str, rel: &str) -> PathBuf {
        self.config.data_root.join(rel).join(name)
    }

    /// True iff the file exists and can be opened for reading.
    pub fn exists(&self, name: &str, rel: &str) -> bool {
        fs::File::open(self.file_path(name, rel)).is_ok()
    }

    /// Serialize `value` to a new JSON file. Never overwrites.
    pub fn create<T: Serialize>(&self, name: &str, value: &T, rel: &str) -> StorageResult<()> {
        let path = self.file_path(name, rel);
        if self.exists(name, rel) {
            return Err(StorageError::AlreadyExists(path.display().to_string()));
        }
        self.write_json(&path, value)
    }

    /// Serialize `value` over an existing JSON file. Never creates.
    pub fn overwrite<T: Serialize>(&self, name: &str, value: &T, rel: &str) -> StorageResult<()> {
        let path = self.file_path(name, rel);
        if !self.exists(name, rel) {
            return Err(StorageError::NotFound(path.display().to_string()));
        }
        self.write_json(&path, value)
    }

    /// Deserialize the JSON content of an existing file.
    pub fn read<T: DeserializeOwned>(&self, name: &str, rel: &str) -> StorageResult<T> {
        let path = self.file_path(name, rel);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::NotFound(path.display().to_string())
            } else {
                StorageError::io(&path, e)
            }
        })?;
        serde_json::from_str(&content).map_err(|e| StorageError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Remove an existing file.
    pub fn delete(&self, name: &str, rel: &str) -> StorageResult<()> {
        let path = self.file_path(name, rel);
        fs::remove_file(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::NotFound(path.display().to_string())
            } else {
                StorageError::io(&path, e)
            }
        })
    }

    /// Create a directory (and any missing parents under the data root).
    pub fn create_dir(&self, name: &str, rel: &str) -> StorageResult<()> {
        let path = self.dir_path(name, rel);
        if path.is_dir() {
            return Err(StorageError::AlreadyExists(path.display().to_string()));
        }
        fs::create_dir_all(&path).map_err(|e| StorageError::io(&path, e))
    }

    /// True iff the directory exists.
    pub fn dir_exists(&self, name: &str, rel: &str) -> bool {
        self.dir_path(name, rel).is_dir()
    }

    /// Every entry name in the directory, in directory order. No filtering
    /// by entry type and no sorting; callers distinguish files from
    /// subdirectories themselves.
    pub fn list_entries(&self, rel: &str) -> StorageResult<Vec<String>> {
        let path = self.config.data_root.join(rel);
        let entries = fs::read_dir(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::NotFound(path.display().to_string())
            } else {
                StorageError::io(&path, e)
            }
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(&path, e))?;
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Best-effort recursive delete of a directory tree.
    ///
    /// Never returns an error: every path that could not be removed is
    /// recorded in the returned [`CleanupReport`]. After a non-clean report
    /// the tree may be partially deleted.
    pub fn remove_dir_recursive(&self, name: &str, rel: &str) -> CleanupReport {
        let mut report = CleanupReport::default();
        remove_tree(&self.dir_path(name, rel), &mut report);
        report
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value).map_err(|e| StorageError::Io {
            path: path.display().to_string(),
            reason: format!("serialize: {e}"),
        })?;
        fs::write(path, bytes).map_err(|e| StorageError::io(path, e))
    }
}

fn remove_tree(path: &Path, report: &mut CleanupReport) {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            report.record(path, e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.record(path, e);
                continue;
            }
        };
        let child = entry.path();
        match entry.file_type() {
            Ok(ft) if ft.is_dir() => remove_tree(&child, report),
            Ok(_) => {
                if let Err(e) = fs::remove_file(&child) {
                    report.record(&child, e);
                }
            }
            Err(e) => report.record(&child, e),
        }
    }

    if let Err(e) = fs::remove_dir(path) {
        report.record(path, e);
    }
}

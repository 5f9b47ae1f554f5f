//! Directory Store
//!
//! One directory, one format, one file per record.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::Format;
use crate::employee::Employee;
use crate::error::{Result, StaffError};

/// Suffix of the scratch file used for atomic writes
const TMP_SUFFIX: &str = "tmp";

/// Build the path of a record file: `dir/<id>.<extension>`
///
/// Pure path arithmetic, no existence check.
pub fn resolve_path(dir: &Path, id: i64, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", id, extension))
}

/// A directory of per-record files in one format
///
/// ## Concurrency:
/// - Holds no mutable state; every method takes `&self`
/// - Writers to distinct ids touch distinct files and need no locking
/// - Concurrent writers to the same id are not supported
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    /// Directory holding the record files
    dir: PathBuf,

    /// Encoding of every file in `dir`
    format: Format,
}

impl DirectoryStore {
    /// Create a store over `dir`
    ///
    /// The directory is not touched until the first read or write.
    pub fn new(dir: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    /// Get the directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the record format
    pub fn format(&self) -> Format {
        self.format
    }

    /// Path of the file for `id`
    pub fn path_for(&self, id: i64) -> PathBuf {
        resolve_path(&self.dir, id, self.format.extension())
    }

    /// Check whether a record file exists for `id`
    pub fn contains(&self, id: i64) -> bool {
        self.path_for(id).is_file()
    }

    /// Read the raw bytes of a record file
    pub fn read_raw(&self, id: i64) -> Result<Vec<u8>> {
        let path = self.path_for(id);
        fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StaffError::RecordNotFound { id, path },
            _ => StaffError::Io(e),
        })
    }

    /// Read and decode the record for `id`
    ///
    /// Returns:
    /// - `Ok(employee)` — decoded, and its id matches the file name
    /// - `Err(RecordNotFound)` — no file for `id`
    /// - `Err(Decode)` — corrupt contents or an id that disagrees with the file name
    pub fn read_record(&self, id: i64) -> Result<Employee> {
        let bytes = self.read_raw(id)?;
        let employee = self.format.decode(&bytes)?;

        if employee.id != id {
            return Err(StaffError::Decode(format!(
                "{} holds record id {}",
                self.path_for(id).display(),
                employee.id
            )));
        }

        debug!(id, path = %self.path_for(id).display(), "record read");
        Ok(employee)
    }

    /// Encode and write a record, overwriting any existing file
    ///
    /// Writes go to `<id>.<ext>.tmp` first and are renamed into place after
    /// an fsync, so a crash never leaves a half-written record behind.
    pub fn write_record(&self, employee: &Employee) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(employee.id);
        let tmp_path = path.with_extension(format!(
            "{}.{}",
            self.format.extension(),
            TMP_SUFFIX
        ));
        let bytes = self.format.encode(employee);

        let written = File::create(&tmp_path).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, &path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(id = employee.id, path = %path.display(), bytes = bytes.len(), "record written");
        Ok(path)
    }

    /// Remove the record file for `id`
    pub fn delete_record(&self, id: i64) -> Result<()> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(id, path = %path.display(), "record deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StaffError::RecordNotFound { id, path })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List every regular file carrying this store's extension
    ///
    /// Order is whatever the filesystem enumerates; callers must not rely
    /// on it.
    pub fn list_record_files(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StaffError::DirectoryNotFound(self.dir.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_path = entry.path();

            if !file_path.is_file() {
                continue;
            }
            if file_path.extension().and_then(|ext| ext.to_str()) == Some(self.format.extension()) {
                files.push(file_path);
            }
        }

        Ok(files)
    }

    /// List the ids of all records in the directory
    ///
    /// Files whose stem is not an integer are skipped. Order is filesystem
    /// enumeration order.
    pub fn list_record_ids(&self) -> Result<Vec<i64>> {
        let ids = self
            .list_record_files()?
            .into_iter()
            .filter_map(|path| match Self::parse_record_id(&path) {
                Some(id) => Some(id),
                None => {
                    debug!(path = %path.display(), "skipping file without a canonical numeric id");
                    None
                }
            })
            .collect();

        Ok(ids)
    }

    /// Parse the record id from a file name
    /// "people/42.txt" → Some(42)
    ///
    /// Only the canonical spelling is accepted: "01.txt" and "+1.txt" are
    /// rejected so that one id maps to exactly one file.
    pub fn parse_record_id(path: &Path) -> Option<i64> {
        let stem = path.file_stem()?.to_str()?;
        let id: i64 = stem.parse().ok()?;
        (id.to_string() == stem).then_some(id)
    }
}

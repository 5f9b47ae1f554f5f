//! StaffDb Module
//!
//! The facade that ties the configuration, the two stores and the scan
//! index together into the operations offered to callers.
//!
//! ## Responsibilities
//! - Own the `Config` (no process-wide state)
//! - Route add/update/delete to the text store
//! - Route deserialize and scans to the binary store
//! - Run the bulk text → binary conversion

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::codec::Format;
use crate::config::Config;
use crate::employee::Employee;
use crate::error::{Result, StaffError};
use crate::index::{bulk_serialize, last_name_eq, BulkReport, ScanIndex, ScanOutcome};
use crate::store::DirectoryStore;

/// Employee record store over a text directory and its binary twin
///
/// Scans (`find`, `find_all`, `load_all`) enumerate and decode the binary
/// store, the same place `deserialize` reads from.
pub struct StaffDb {
    config: Config,

    /// `<id>.txt` records
    text: DirectoryStore,

    /// `<id>.ser` records
    binary: DirectoryStore,
}

impl StaffDb {
    /// Build a store from a config
    ///
    /// Nothing is read or created on disk until an operation runs.
    pub fn new(config: Config) -> Self {
        let text = DirectoryStore::new(&config.data_dir, Format::Text);
        let binary = DirectoryStore::new(config.serialized_dir(), Format::Binary);

        Self {
            config,
            text,
            binary,
        }
    }

    /// Build a store over `path` with default settings
    pub fn open_path(path: &Path) -> Self {
        Self::new(Config::builder().data_dir(path).build())
    }

    // =========================================================================
    // Text Store Operations
    // =========================================================================

    /// Write a record to the text store, replacing any existing one
    pub fn add(&self, employee: &Employee) -> Result<()> {
        employee.validate()?;
        self.text.write_record(employee)?;
        info!(id = employee.id, "employee added");
        Ok(())
    }

    /// Overwrite an existing text record
    ///
    /// Fails with `RecordNotFound` when there is nothing to update.
    pub fn update(&self, employee: &Employee) -> Result<()> {
        employee.validate()?;
        if !self.text.contains(employee.id) {
            return Err(StaffError::RecordNotFound {
                id: employee.id,
                path: self.text.path_for(employee.id),
            });
        }
        self.text.write_record(employee)?;
        info!(id = employee.id, "employee updated");
        Ok(())
    }

    /// Remove a text record
    pub fn delete(&self, id: i64) -> Result<()> {
        self.text.delete_record(id)?;
        info!(id, "employee deleted");
        Ok(())
    }

    /// Read a record from the text store
    pub fn get(&self, id: i64) -> Result<Employee> {
        self.text.read_record(id)
    }

    /// Raw contents of every text record, in scan order
    pub fn raw_records(&self) -> Result<Vec<(i64, String)>> {
        let ids = ScanIndex::new(&self.text, self.config.scan_order).ids()?;

        ids.into_iter()
            .map(|id| {
                let raw = self.text.read_raw(id)?;
                Ok((id, String::from_utf8_lossy(&raw).into_owned()))
            })
            .collect()
    }

    // =========================================================================
    // Binary Store Operations
    // =========================================================================

    /// Decode a record from the binary store
    pub fn deserialize(&self, id: i64) -> Result<Employee> {
        self.binary.read_record(id)
    }

    /// First employee whose last name matches, ignoring case
    ///
    /// `records` is `None` when no readable record matches; unreadable
    /// records met along the way are listed in `failures`.
    pub fn find(&self, last_name: &str) -> Result<ScanOutcome<Option<Employee>>> {
        self.scan_index().find_first(last_name_eq(last_name))
    }

    /// Every employee whose last name matches, ignoring case
    pub fn find_all(&self, last_name: &str) -> Result<ScanOutcome<Vec<Employee>>> {
        self.scan_index().find_all(last_name_eq(last_name))
    }

    /// Every readable binary record, keyed by scan position
    pub fn load_all(&self) -> Result<ScanOutcome<BTreeMap<usize, Employee>>> {
        self.scan_index().load_all()
    }

    /// Convert every text record into the binary store
    pub fn serialize_all(&self) -> Result<BulkReport> {
        bulk_serialize(&self.text, &self.binary, self.config.serialize_workers)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the text store
    pub fn text_store(&self) -> &DirectoryStore {
        &self.text
    }

    /// Get the binary store
    pub fn binary_store(&self) -> &DirectoryStore {
        &self.binary
    }

    fn scan_index(&self) -> ScanIndex<'_> {
        ScanIndex::new(&self.binary, self.config.scan_order)
    }
}

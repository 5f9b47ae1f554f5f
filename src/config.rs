//! Configuration for StaffDB
//!
//! Centralized configuration with sensible defaults. A `Config` is passed
//! explicitly into every operation; nothing is kept in process-wide state.

use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;

use crate::error::StaffError;

/// Suffix appended to the text directory to name the binary directory
pub const SERIALIZED_SUFFIX: &str = " serialized";

/// Main configuration for a StaffDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the text records (`<id>.txt`)
    /// Layout:
    ///   {data_dir}/
    ///     └── 42.txt
    ///   {data_dir} serialized/
    ///     └── 42.ser
    pub data_dir: PathBuf,

    /// Explicit binary directory; `None` means `"{data_dir} serialized"`
    pub serialized_dir: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Scan Configuration
    // -------------------------------------------------------------------------
    /// Order in which full-directory scans visit records
    pub scan_order: ScanOrder,

    // -------------------------------------------------------------------------
    // Bulk Conversion Configuration
    // -------------------------------------------------------------------------
    /// Number of worker threads used by the text → binary conversion
    pub serialize_workers: usize,
}

/// Scan ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Ascending by record id (deterministic across platforms)
    #[default]
    Numeric,

    /// Whatever order the filesystem enumerates entries in
    Directory,
}

impl FromStr for ScanOrder {
    type Err = StaffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" => Ok(ScanOrder::Numeric),
            "directory" => Ok(ScanOrder::Directory),
            other => Err(StaffError::Config(format!(
                "unknown scan order '{}' (expected 'numeric' or 'directory')",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./people"),
            serialized_dir: None,
            scan_order: ScanOrder::Numeric,
            serialize_workers: default_workers(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Effective binary directory
    pub fn serialized_dir(&self) -> PathBuf {
        match &self.serialized_dir {
            Some(dir) => dir.clone(),
            None => {
                let mut name = OsString::from(self.data_dir.as_os_str());
                name.push(SERIALIZED_SUFFIX);
                PathBuf::from(name)
            }
        }
    }
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the text record directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Override the binary record directory
    pub fn serialized_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.serialized_dir = Some(path.into());
        self
    }

    /// Set the scan order
    pub fn scan_order(mut self, order: ScanOrder) -> Self {
        self.config.scan_order = order;
        self
    }

    /// Set the number of bulk conversion workers (0 is treated as 1)
    pub fn serialize_workers(mut self, count: usize) -> Self {
        self.config.serialize_workers = count.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Scan Index Module
//!
//! Full-directory operations built on `DirectoryStore::list_record_ids`
//! and `DirectoryStore::read_record`. There is no persistent index: every
//! call enumerates the directory afresh.
//!
//! ## Operations
//! - `find_first` — first record matching a predicate, short-circuits
//! - `find_all` — every matching record
//! - `load_all` — positional map of every readable record
//! - `bulk_serialize` — parallel text → binary conversion of a directory
//!
//! One unreadable record never aborts a scan: it is skipped and reported
//! alongside the records that did load.

mod bulk;
mod scan;

pub use bulk::{bulk_serialize, BulkReport, FileFailure};
pub use scan::{last_name_eq, RecordFailure, ScanIndex, ScanOutcome};

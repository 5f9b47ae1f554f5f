//! Bulk text → binary conversion
//!
//! Every `.txt` file in the text store is parsed, re-encoded and written to
//! the binary store. Files are independent units of work: they are spread
//! over a pool of scoped worker threads and a failing file is recorded
//! without disturbing its siblings.
//!
//! ```text
//!   list_record_files()
//!          │
//!          ▼
//!   ┌─────────────┐    ┌──────────┐
//!   │ path channel│───▶│ worker 1 │──┐
//!   │ (crossbeam) │───▶│ worker 2 │──┼──▶ Mutex<BulkReport>
//!   │             │───▶│ worker N │──┘
//!   └─────────────┘    └──────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossbeam::channel;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::codec::text;
use crate::error::{Result, StaffError};
use crate::store::DirectoryStore;

/// A source file that could not be converted
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: StaffError,
}

/// Result of a bulk conversion
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Ids written to the binary store, ascending
    pub converted: Vec<i64>,

    /// Files that failed, one entry per file
    pub failures: Vec<FileFailure>,

    /// Wall-clock time of the whole batch
    pub elapsed: Duration,
}

impl BulkReport {
    /// Number of files visited
    pub fn total(&self) -> usize {
        self.converted.len() + self.failures.len()
    }
}

/// Convert every text record in `source` into `target`
///
/// Returns once every file has either been converted or recorded as a
/// failure. Only a missing or unreadable `source` directory fails the
/// whole call.
pub fn bulk_serialize(
    source: &DirectoryStore,
    target: &DirectoryStore,
    workers: usize,
) -> Result<BulkReport> {
    let start = Instant::now();
    let files = source.list_record_files()?;
    let workers = workers.max(1).min(files.len().max(1));

    info!(
        files = files.len(),
        workers,
        from = %source.dir().display(),
        to = %target.dir().display(),
        "bulk serialization started"
    );

    let (sender, receiver) = channel::unbounded::<PathBuf>();
    for path in files {
        // Receiver is alive until the scope below ends
        let _ = sender.send(path);
    }
    drop(sender);

    let report = Mutex::new(BulkReport::default());

    crossbeam::scope(|scope| {
        for _ in 0..workers {
            let receiver = receiver.clone();
            let report = &report;

            scope.spawn(move |_| {
                for path in receiver.iter() {
                    match convert_file(&path, target) {
                        Ok(id) => report.lock().converted.push(id),
                        Err(error) => {
                            warn!(path = %path.display(), %error, "failed to serialize record");
                            report.lock().failures.push(FileFailure { path, error });
                        }
                    }
                }
            });
        }
    })
    .map_err(|_| StaffError::Io(std::io::Error::other("bulk serialization worker panicked")))?;

    let mut report = report.into_inner();
    report.converted.sort_unstable();
    report.failures.sort_by(|a, b| a.path.cmp(&b.path));
    report.elapsed = start.elapsed();

    info!(
        converted = report.converted.len(),
        failed = report.failures.len(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "bulk serialization finished"
    );

    Ok(report)
}

/// Convert one text file, returning the id written
fn convert_file(path: &Path, target: &DirectoryStore) -> Result<i64> {
    let stem_id = DirectoryStore::parse_record_id(path).ok_or_else(|| {
        StaffError::Decode(format!("{} has no canonical numeric record id", path.display()))
    })?;

    let raw = fs::read(path)?;
    let employee = text::parse_bytes(&raw)?;

    if employee.id != stem_id {
        return Err(StaffError::Decode(format!(
            "{} holds record id {}",
            path.display(),
            employee.id
        )));
    }

    let written = target.write_record(&employee)?;
    debug!(id = employee.id, to = %written.display(), "record serialized");

    Ok(employee.id)
}

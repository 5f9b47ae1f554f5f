//! Directory scans
//!
//! Linear scans over every record of a store, in `ScanOrder`.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::ScanOrder;
use crate::employee::Employee;
use crate::error::{Result, StaffError};
use crate::store::DirectoryStore;

/// A record that could not be read during a scan
#[derive(Debug)]
pub struct RecordFailure {
    pub id: i64,
    pub error: StaffError,
}

/// Records collected by a scan, plus the ones that failed to load
#[derive(Debug)]
pub struct ScanOutcome<T> {
    pub records: T,
    pub failures: Vec<RecordFailure>,
}

impl<T> ScanOutcome<T> {
    /// True when every visited record loaded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<T> ScanOutcome<Option<T>> {
    /// Collapse a first-match scan into a single result
    ///
    /// Returns the match if there is one. Otherwise the first unreadable
    /// record's error when the scan was incomplete, or `NoMatch` when every
    /// record was read and none matched.
    pub fn into_match(self, what: impl Into<String>) -> Result<T> {
        match self.records {
            Some(record) => Ok(record),
            None => match self.failures.into_iter().next() {
                Some(failure) => Err(failure.error),
                None => Err(StaffError::NoMatch(what.into())),
            },
        }
    }
}

/// Case-insensitive last-name equality predicate
pub fn last_name_eq(last_name: &str) -> impl Fn(&Employee) -> bool {
    let wanted = last_name.to_lowercase();
    move |employee: &Employee| employee.last_name.to_lowercase() == wanted
}

/// Scanner over one store
pub struct ScanIndex<'a> {
    store: &'a DirectoryStore,
    order: ScanOrder,
}

impl<'a> ScanIndex<'a> {
    pub fn new(store: &'a DirectoryStore, order: ScanOrder) -> Self {
        Self { store, order }
    }

    /// Record ids in scan order
    pub fn ids(&self) -> Result<Vec<i64>> {
        let mut ids = self.store.list_record_ids()?;
        if self.order == ScanOrder::Numeric {
            ids.sort_unstable();
        }
        Ok(ids)
    }

    /// Return the first record in scan order satisfying `predicate`
    ///
    /// Short-circuits on the first match. Records that could not be read
    /// before the match (or before the end of the scan) are reported in
    /// `failures`; `records` is `None` when nothing matched.
    pub fn find_first<P>(&self, predicate: P) -> Result<ScanOutcome<Option<Employee>>>
    where
        P: Fn(&Employee) -> bool,
    {
        let mut failures = Vec::new();

        for id in self.ids()? {
            match self.store.read_record(id) {
                Ok(employee) if predicate(&employee) => {
                    debug!(id, "scan matched");
                    return Ok(ScanOutcome {
                        records: Some(employee),
                        failures,
                    });
                }
                Ok(_) => {}
                Err(error) => {
                    warn!(id, %error, "skipping unreadable record");
                    failures.push(RecordFailure { id, error });
                }
            }
        }

        Ok(ScanOutcome {
            records: None,
            failures,
        })
    }

    /// Collect every record satisfying `predicate`
    ///
    /// An empty result is not an error.
    pub fn find_all<P>(&self, predicate: P) -> Result<ScanOutcome<Vec<Employee>>>
    where
        P: Fn(&Employee) -> bool,
    {
        let mut records = Vec::new();
        let mut failures = Vec::new();

        self.scan(&mut failures, |employee| {
            if predicate(&employee) {
                records.push(employee);
            }
        })?;

        Ok(ScanOutcome { records, failures })
    }

    /// Load every readable record into a positional map
    ///
    /// Keys run 0..n-1 over the successfully loaded records in scan order;
    /// they are positions, not record ids.
    pub fn load_all(&self) -> Result<ScanOutcome<BTreeMap<usize, Employee>>> {
        let mut records = BTreeMap::new();
        let mut failures = Vec::new();

        self.scan(&mut failures, |employee| {
            records.insert(records.len(), employee);
        })?;

        Ok(ScanOutcome { records, failures })
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Visit every record, diverting failures into `failures`
    fn scan<F>(&self, failures: &mut Vec<RecordFailure>, mut visit: F) -> Result<()>
    where
        F: FnMut(Employee),
    {
        for id in self.ids()? {
            match self.store.read_record(id) {
                Ok(employee) => visit(employee),
                Err(error) => {
                    warn!(id, %error, "skipping unreadable record");
                    failures.push(RecordFailure { id, error });
                }
            }
        }
        Ok(())
    }
}

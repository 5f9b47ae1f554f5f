//! Employee record
//!
//! The single entity of the store. The id doubles as the filename stem in
//! both the text and the binary directory.

use std::fmt;

use crate::codec::text::FIELD_SEPARATOR;
use crate::error::{Result, StaffError};

/// One employee record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Employee {
    /// Unique key, also the file stem (`42.txt`, `42.ser`)
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Opaque encoded date, e.g. `18151210`
    pub hire_date: i64,
}

impl Employee {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hire_date: i64,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            hire_date,
        }
    }

    /// Check that the record survives the text encoding unchanged
    ///
    /// Names must be non-empty, free of the `", "` separator and line
    /// breaks, and carry no surrounding whitespace.
    pub fn validate(&self) -> Result<()> {
        validate_name("first name", &self.first_name)?;
        validate_name("last name", &self.last_name)
    }
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StaffError::InvalidRecord(format!("{} is empty", field)));
    }
    if value.trim() != value {
        return Err(StaffError::InvalidRecord(format!(
            "{} '{}' has surrounding whitespace",
            field, value
        )));
    }
    if value.contains(FIELD_SEPARATOR) {
        return Err(StaffError::InvalidRecord(format!(
            "{} '{}' contains the field separator",
            field, value
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(StaffError::InvalidRecord(format!(
            "{} contains a line break",
            field
        )));
    }
    Ok(())
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} (hired {})",
            self.id, self.first_name, self.last_name, self.hire_date
        )
    }
}

//! Text codec
//!
//! One record per line: `id, first_name, last_name, hire_date`.

use crate::employee::Employee;
use crate::error::{Result, StaffError};

/// Separator between fields of a text record
pub const FIELD_SEPARATOR: &str = ", ";

/// Number of fields in a text record
pub const FIELD_COUNT: usize = 4;

/// Format a record as a single line (no trailing newline)
pub fn format(employee: &Employee) -> String {
    format!(
        "{id}{sep}{first}{sep}{last}{sep}{hire}",
        id = employee.id,
        first = employee.first_name,
        last = employee.last_name,
        hire = employee.hire_date,
        sep = FIELD_SEPARATOR,
    )
}

/// Parse a record line
///
/// Surrounding whitespace is trimmed before splitting on `", "`.
pub fn parse(line: &str) -> Result<Employee> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();

    if fields.len() != FIELD_COUNT {
        return Err(StaffError::Decode(format!(
            "expected {} fields, got {} in '{}'",
            FIELD_COUNT,
            fields.len(),
            line.trim()
        )));
    }

    let id = parse_int("id", fields[0])?;
    let hire_date = parse_int("hire date", fields[3])?;

    Ok(Employee {
        id,
        first_name: fields[1].to_string(),
        last_name: fields[2].to_string(),
        hire_date,
    })
}

/// Parse a record from raw file contents
pub fn parse_bytes(bytes: &[u8]) -> Result<Employee> {
    let line = std::str::from_utf8(bytes)
        .map_err(|e| StaffError::Decode(format!("text record is not UTF-8: {}", e)))?;
    parse(line)
}

fn parse_int(field: &str, value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|e| StaffError::Decode(format!("invalid {} '{}': {}", field, value, e)))
}

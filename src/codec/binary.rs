//! Binary codec
//!
//! Protobuf encoding of an `Employee`, compatible with any protobuf reader
//! using the schema below:
//!
//! ```text
//! message Employee {
//!   int64  id         = 1;
//!   string first_name = 2;
//!   string last_name  = 3;
//!   int64  hire_date  = 4;
//! }
//! ```

use bytes::Bytes;
use prost::Message;

use crate::employee::Employee;
use crate::error::Result;

/// Wire representation of an employee
#[derive(Clone, PartialEq, Message)]
struct EmployeeMessage {
    #[prost(int64, tag = "1")]
    id: i64,

    #[prost(string, tag = "2")]
    first_name: String,

    #[prost(string, tag = "3")]
    last_name: String,

    #[prost(int64, tag = "4")]
    hire_date: i64,
}

impl From<&Employee> for EmployeeMessage {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            hire_date: employee.hire_date,
        }
    }
}

impl From<EmployeeMessage> for Employee {
    fn from(message: EmployeeMessage) -> Self {
        Self {
            id: message.id,
            first_name: message.first_name,
            last_name: message.last_name,
            hire_date: message.hire_date,
        }
    }
}

/// Encode a record to bytes
///
/// Zero-valued fields are omitted, so `Employee::default()` encodes to an
/// empty buffer.
pub fn encode(employee: &Employee) -> Bytes {
    Bytes::from(EmployeeMessage::from(employee).encode_to_vec())
}

/// Decode a record from bytes
///
/// Fails on truncated varints, overrunning length prefixes, invalid wire
/// types and non-UTF-8 strings.
pub fn decode(bytes: &[u8]) -> Result<Employee> {
    let message = EmployeeMessage::decode(bytes)?;
    Ok(message.into())
}

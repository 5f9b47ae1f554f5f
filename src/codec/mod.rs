//! Record Codec Module
//!
//! Converts one `Employee` to and from its two on-disk encodings.
//!
//! ## Binary Format (`.ser`)
//! Protobuf wire format, proto3 field presence:
//! ```text
//! ┌──────────────┬────────────┬─────────────────────────┐
//! │ Field        │ Tag        │ Wire type               │
//! ├──────────────┼────────────┼─────────────────────────┤
//! │ id           │ 1          │ varint (int64)          │
//! │ first_name   │ 2          │ length-delimited (utf8) │
//! │ last_name    │ 3          │ length-delimited (utf8) │
//! │ hire_date    │ 4          │ varint (int64)          │
//! └──────────────┴────────────┴─────────────────────────┘
//! ```
//! Missing fields decode to zero values, unknown fields are skipped.
//!
//! ## Text Format (`.txt`)
//! ```text
//! 7, Ada, Lovelace, 18151210
//! ```

pub mod binary;
pub mod text;

use bytes::Bytes;

use crate::employee::Employee;
use crate::error::Result;

/// On-disk encoding of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Single comma-space separated line
    Text,

    /// Protobuf-encoded message
    Binary,
}

impl Format {
    /// File extension used by this format (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Binary => "ser",
        }
    }

    /// Encode a record in this format
    pub fn encode(self, employee: &Employee) -> Bytes {
        match self {
            Format::Text => {
                let mut line = text::format(employee);
                line.push('\n');
                Bytes::from(line)
            }
            Format::Binary => binary::encode(employee),
        }
    }

    /// Decode a record from raw file contents
    pub fn decode(self, bytes: &[u8]) -> Result<Employee> {
        match self {
            Format::Text => text::parse_bytes(bytes),
            Format::Binary => binary::decode(bytes),
        }
    }
}

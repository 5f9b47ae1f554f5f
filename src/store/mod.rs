//! Store Module
//!
//! Per-record flat files in a single directory.
//!
//! ## Responsibilities
//! - Map record ids to file paths (`<dir>/<id>.<ext>`)
//! - Read and decode a single record
//! - Encode and atomically write a single record
//! - Enumerate the record ids present in the directory
//!
//! ## Directory Layout
//! ```text
//! people/                 people serialized/
//! ├── 1.txt               ├── 1.ser
//! ├── 2.txt               ├── 2.ser
//! └── 7.txt               └── 7.ser
//! ```
//! The text and binary directories are independent stores sharing one id
//! space. They are only kept in sync by the explicit bulk conversion.

mod directory;

pub use directory::{resolve_path, DirectoryStore};

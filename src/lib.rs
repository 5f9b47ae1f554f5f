//! # StaffDB
//!
//! A small employee record store with:
//! - One flat text file per record (`<id>.txt`)
//! - A protobuf-encoded binary twin per record (`<id>.ser`)
//! - Scan-based lookups by last name and a positional load-all
//! - Parallel bulk conversion from the text to the binary store
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      staffdb CLI                             │
//! │               (one-shot commands / shell)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     StaffDb                                  │
//! │              (Config passed in explicitly)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Scan Index  │─────────▶│  Directory  │
//!   │ (scan/bulk) │          │    Store    │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │    Codec    │
//!                           │ (text/proto)│
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod employee;
pub mod codec;
pub mod store;
pub mod index;
pub mod db;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StaffError, Result};
pub use config::{Config, ScanOrder};
pub use employee::Employee;
pub use db::StaffDb;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of StaffDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

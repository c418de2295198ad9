//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  io::Error / serde_json::Error                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Workflow layer logs and degrades gracefully: losing a saved        │
//! │  order is an inconvenience, never a failed submit                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures during replay are NOT store errors: they are
//! handled per record inside the replay loop and never surface here.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A value exceeds the per-entry size limit.
    ///
    /// ## When This Occurs
    /// - Saving a very large order whose JSON payload exceeds the
    ///   cookie-like 4 KiB budget
    #[error("value for '{key}' is {size} bytes, limit is {max}")]
    ValueTooLarge {
        key: String,
        size: usize,
        max: usize,
    },

    /// JSON (de)serialization of the jar file or a payload failed.
    #[error("serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Jar file unreadable or directory missing
    /// - Disk full / permissions issue on flush
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

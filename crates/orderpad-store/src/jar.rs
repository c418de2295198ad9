//! # Jar: Cookie-Like Key/Value Store
//!
//! A small string-keyed store with the semantics of a browser cookie jar:
//! string values, a per-value size budget, optional expiry in days, and
//! removal by key. Two backends:
//!
//! - [`MemoryJar`]: process-lifetime only, used in tests and previews
//! - [`FileJar`]: a JSON map on disk, loaded at open and flushed on every
//!   mutation, so a crash loses at most the current operation
//!
//! Expired entries read as absent; they are physically dropped the next
//! time the jar is opened or the key is overwritten.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Per-value size budget, matching the classic 4 KiB cookie limit.
pub const MAX_VALUE_BYTES: usize = 4096;

// =============================================================================
// Entries
// =============================================================================

/// A stored value with an optional expiry instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn new(value: &str, ttl_days: Option<i64>) -> Self {
        Entry {
            value: value.to_string(),
            expires_at: ttl_days.map(|days| Utc::now() + Duration::days(days)),
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}

fn check_size(name: &str, value: &str) -> StoreResult<()> {
    if value.len() > MAX_VALUE_BYTES {
        return Err(StoreError::ValueTooLarge {
            key: name.to_string(),
            size: value.len(),
            max: MAX_VALUE_BYTES,
        });
    }
    Ok(())
}

// =============================================================================
// Jar Trait
// =============================================================================

/// The store contract the order and preference modules program against.
///
/// All operations are synchronous; `set` and `remove` may fail (size
/// budget, backing I/O) while reads never do - an unreadable or expired
/// entry is simply absent.
pub trait Jar {
    /// Returns the live (non-expired) value for `name`, if any.
    fn get(&self, name: &str) -> Option<String>;

    /// Stores `value` under `name`, optionally expiring after `ttl_days`.
    fn set(&mut self, name: &str, value: &str, ttl_days: Option<i64>) -> StoreResult<()>;

    /// Removes the entry for `name`. Removing an absent key is a no-op.
    fn remove(&mut self, name: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Jar
// =============================================================================

/// In-memory jar. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryJar {
    entries: HashMap<String, Entry>,
}

impl MemoryJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        MemoryJar::default()
    }
}

impl Jar for MemoryJar {
    fn get(&self, name: &str) -> Option<String> {
        let entry = self.entries.get(name)?;
        if entry.is_expired(Utc::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, name: &str, value: &str, ttl_days: Option<i64>) -> StoreResult<()> {
        check_size(name, value)?;
        self.entries
            .insert(name.to_string(), Entry::new(value, ttl_days));
        Ok(())
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        self.entries.remove(name);
        Ok(())
    }
}

// =============================================================================
// File Jar
// =============================================================================

/// File-backed jar: a JSON object of entries at a fixed path.
///
/// The whole map is read once at [`FileJar::open`] and rewritten on every
/// mutation. The payloads here are tiny (4 KiB per value), so the simple
/// full-rewrite scheme beats any incremental format.
#[derive(Debug)]
pub struct FileJar {
    path: PathBuf,
    entries: HashMap<String, Entry>,
}

impl FileJar {
    /// Opens the jar at `path`, creating an empty one if the file does not
    /// exist yet. Expired entries are dropped during load.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let mut entries: HashMap<String, Entry> = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };

        let now = Utc::now();
        entries.retain(|_, entry| !entry.is_expired(now));

        Ok(FileJar { path, entries })
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Jar for FileJar {
    fn get(&self, name: &str) -> Option<String> {
        let entry = self.entries.get(name)?;
        if entry.is_expired(Utc::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, name: &str, value: &str, ttl_days: Option<i64>) -> StoreResult<()> {
        check_size(name, value)?;
        self.entries
            .insert(name.to_string(), Entry::new(value, ttl_days));
        self.flush()
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        if self.entries.remove(name).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

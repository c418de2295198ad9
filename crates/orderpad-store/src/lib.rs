//! # orderpad-store: Persistence Layer for Orderpad
//!
//! Durable, opt-in storage for order contents and customer preferences.
//!
//! ## Persistence Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Persistence Flow                               │
//! │                                                                     │
//! │  Finalize (save opted in)                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Order snapshot ──► SavedItem records ──► JSON ──► Jar entry        │
//! │                                           (≤ 4 KiB, 7-day TTL)      │
//! │                                                                     │
//! │  Next page load                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Jar entry ──► JSON ──► each record replayed through                │
//! │                         LineItem::new (invalid records are          │
//! │                         skipped and logged, never fatal)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`jar`] - cookie-like string-keyed store (`Jar` trait, memory / file)
//! - [`order`] - saved-order record format, save / forget / replay
//! - [`prefs`] - customer "remember me" preferences
//! - [`error`] - store error types

pub mod error;
pub mod jar;
pub mod order;
pub mod prefs;

pub use error::{StoreError, StoreResult};
pub use jar::{FileJar, Jar, MemoryJar};
pub use order::{forget_order, load_order, save_opted_in, save_order, SavedItem};
pub use prefs::{clear_prefs, load_prefs, save_prefs, CustomerPrefs};

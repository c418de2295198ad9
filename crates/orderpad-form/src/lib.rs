//! # orderpad-form: Form Workflow for Orderpad
//!
//! The orchestration layer a frontend drives. It holds the raw form state,
//! runs the field validators, mutates the order model, wires opt-in
//! persistence, and produces the rendered summary.
//!
//! ## Workflow Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Form Lifecycle                                 │
//! │                                                                     │
//! │  ┌──────────┐     ┌──────────┐     ┌───────────┐    ┌───────────┐   │
//! │  │  Empty   │────►│  Items   │────►│ Finalize  │───►│  Summary  │   │
//! │  │  form    │     │  added   │     │ (customer │    │  rendered │   │
//! │  └──────────┘     └──────────┘     │  checked) │    └───────────┘   │
//! │       ▲                │           └───────────┘                    │
//! │       │           add_item                                          │
//! │       │           remove_item                                       │
//! │       │                │                                            │
//! │       └─── clear_all ◄─┘                                            │
//! │                                                                     │
//! │  restore() rebuilds the form from saved prefs + replayed order      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`form`] - `OrderForm`: field state and the add / finalize / clear flow
//! - [`summary`] - `OrderSummary`: the finalized view, with text rendering
//! - [`config`] - startup configuration (tax rate)
//! - [`error`] - workflow error types

pub mod config;
pub mod error;
pub mod form;
pub mod summary;

pub use config::FormConfig;
pub use error::FormError;
pub use form::{CustomerFields, ItemFields, OrderForm};
pub use summary::{OrderSummary, SummaryLine};

//! # orderpad-core: Pure Business Logic for Orderpad
//!
//! This crate is the **heart** of Orderpad, a browser-resident order-entry
//! form. It contains the validated order model and all of its arithmetic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Orderpad Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     Frontend (browser)                        │  │
//! │  │     Customer form ──► Item form ──► Summary view              │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                orderpad-form (workflow layer)                 │  │
//! │  │     add item, remove item, finalize, clear all                │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              ★ orderpad-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐  │  │
//! │  │   │   money   │  │   order   │  │   error   │  │validation│  │  │
//! │  │   │   Money   │  │ LineItem  │  │   Field   │  │  field   │  │  │
//! │  │   │  TaxRate  │  │  Totals   │  │  variants │  │  checks  │  │  │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └──────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO STORAGE • NO RENDERING • PURE FUNCTIONS         │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │             orderpad-store (persistence layer)                │  │
//! │  │        cookie-like jar, saved order, preferences              │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - The validated `LineItem`, the `Order` collection, `Totals`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types with field identifiers
//! - [`validation`] - Form-field validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, rendering access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use orderpad_core::{LineItem, Order};
//!
//! let mut order = Order::default(); // 13% sales tax
//! order.add_item(LineItem::new("Widget", "3", "9.999").unwrap());
//!
//! let totals = order.totals();
//! assert_eq!(totals.subtotal.cents(), 3000); // $30.00
//! assert_eq!(totals.tax.cents(), 390);       // $3.90
//! assert_eq!(totals.total.cents(), 3390);    // $33.90
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orderpad_core::Order` instead of
// `use orderpad_core::order::Order`

pub use error::{Field, ValidationError};
pub use money::{round2, Money, TaxRate};
pub use order::{LineItem, Order, Totals};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default sales tax rate: 13% (1300 basis points).
///
/// ## Why a constant?
/// The rate is a process-wide setting fixed at startup. It is injected into
/// [`Order::new`] rather than read ambiently, so tests and alternative
/// configurations can supply their own rate.
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(1300);

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 1000;

/// Maximum unit price of a single line item, in dollars.
///
/// ## Why a cap?
/// Bounds the arithmetic: with price at most $1,000,000 and quantity at
/// most 1000, every line total fits in `i64` cents with ten million times
/// headroom, so order math never overflows on accepted input.
pub const MAX_UNIT_PRICE: i64 = 1_000_000;

/// Minimum length of an item or customer name, in characters.
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum length of an item or customer name, in characters.
pub const NAME_MAX_CHARS: usize = 50;

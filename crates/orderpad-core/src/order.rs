//! # Order Model
//!
//! The validated line-item type and the order collection it lives in.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Order Model Operations                          │
//! │                                                                     │
//! │  Frontend Action        Workflow Call          Order State Change   │
//! │  ───────────────        ─────────────          ──────────────────   │
//! │                                                                     │
//! │  Add Item ────────────► LineItem::new() ─────► items.push(item)     │
//! │                                                                     │
//! │  Click Remove ────────► remove_item(idx) ────► items.remove(idx)    │
//! │                                                                     │
//! │  Click Clear ─────────► clear() ─────────────► items.clear()        │
//! │                                                                     │
//! │  View Summary ────────► items() / totals() ──► (read only)          │
//! │                                                                     │
//! │  NOTE: readers receive snapshots; a snapshot taken before a         │
//! │        mutation is never affected by it.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A `LineItem` in the collection is always valid; invalid states are
//!   unobservable because construction fails instead.
//! - Removal compacts the sequence immediately; indices are transient
//!   query results, not stable identifiers.
//! - Totals are recomputed in full on every query; nothing is cached.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{Field, ValidationError};
use crate::money::{Money, TaxRate};
use crate::{MAX_ITEM_QUANTITY, MAX_UNIT_PRICE, NAME_MAX_CHARS, NAME_MIN_CHARS, SALES_TAX_RATE};

// =============================================================================
// Line Item
// =============================================================================

/// A single product entry in the order.
///
/// ## Design Notes
/// - Fields are private; the validating setters are the only way in, so a
///   reachable `LineItem` always satisfies the field constraints.
/// - `Serialize` only: deserialization would bypass validation, so the
///   persistence layer rebuilds items through [`LineItem::new`] instead.
/// - The line total is derived on demand, never stored, so it cannot drift
///   from the current quantity and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    name: String,
    quantity: i64,
    unit_price: Money,
}

impl LineItem {
    /// Constructs a line item from three raw form inputs.
    ///
    /// All three fields are validated; the first failing field aborts
    /// construction with that field's error and no partial item is ever
    /// produced.
    ///
    /// ## Example
    /// ```rust
    /// use orderpad_core::LineItem;
    ///
    /// let item = LineItem::new("Widget", "3", "9.999").unwrap();
    /// assert_eq!(item.unit_price().cents(), 1000); // price rounded to $10.00
    /// assert_eq!(item.line_total().cents(), 3000); // $30.00
    ///
    /// assert!(LineItem::new("Widget", "3.7", "5.00").is_err()); // no truncation
    /// ```
    pub fn new(name: &str, quantity: &str, price: &str) -> Result<Self, ValidationError> {
        let mut item = LineItem {
            name: String::new(),
            quantity: 0,
            unit_price: Money::zero(),
        };
        item.set_name(name)?;
        item.set_quantity(quantity)?;
        item.set_price(price)?;
        Ok(item)
    }

    /// Sets the item name from raw input.
    ///
    /// Trims the input; empty after trimming is rejected, as is a trimmed
    /// length outside 2-50 characters.
    pub fn set_name(&mut self, raw: &str) -> Result<(), ValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: Field::ItemName,
            });
        }

        let chars = trimmed.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::LengthOutOfRange {
                field: Field::ItemName,
                min: NAME_MIN_CHARS,
                max: NAME_MAX_CHARS,
            });
        }

        self.name = trimmed.to_string();
        Ok(())
    }

    /// Sets the quantity from raw input.
    ///
    /// Strict integer parse: fractional input like `"3.7"` is rejected
    /// outright rather than silently truncated. Must be in 1-1000.
    pub fn set_quantity(&mut self, raw: &str) -> Result<(), ValidationError> {
        let parsed: i64 =
            raw.trim()
                .parse()
                .map_err(|_| ValidationError::InvalidFormat {
                    field: Field::Quantity,
                    reason: "must be a whole number",
                })?;

        if parsed <= 0 {
            return Err(ValidationError::MustBePositive {
                field: Field::Quantity,
            });
        }

        if parsed > MAX_ITEM_QUANTITY {
            return Err(ValidationError::TooLarge {
                field: Field::Quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.quantity = parsed;
        Ok(())
    }

    /// Sets the unit price from raw input.
    ///
    /// Parses a decimal amount, rejects non-numeric / non-finite / non-
    /// positive values and anything above [`MAX_UNIT_PRICE`] dollars, and
    /// stores the result rounded to 2 decimal places (half away from zero
    /// at the 3rd decimal digit). The cap keeps every line total well
    /// inside `i64` cents.
    pub fn set_price(&mut self, raw: &str) -> Result<(), ValidationError> {
        let parsed = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ValidationError::InvalidFormat {
                field: Field::Price,
                reason: "must be a decimal number",
            })?;

        if parsed <= 0.0 {
            return Err(ValidationError::MustBePositive {
                field: Field::Price,
            });
        }

        if parsed > MAX_UNIT_PRICE as f64 {
            return Err(ValidationError::TooLarge {
                field: Field::Price,
                max: MAX_UNIT_PRICE,
            });
        }

        self.unit_price = Money::from_decimal(parsed);
        Ok(())
    }

    /// The validated, trimmed item name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validated quantity (1-1000).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The unit price, already rounded to 2 decimal places.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// Exact in cents, so it always equals `round2(quantity * unit_price)`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Derived subtotal/tax/total triple.
///
/// Never stored: recomputed by [`Order::totals`] on every query so it cannot
/// get out of sync with the live collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of the already-rounded per-item line totals.
    pub subtotal: Money,

    /// `round2(subtotal * tax_rate)`.
    pub tax: Money,

    /// `subtotal + tax` (exact in cents).
    pub total: Money,
}

impl Totals {
    /// Totals for an empty order: (0.00, 0.00, 0.00).
    pub const fn zero() -> Self {
        Totals {
            subtotal: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// The order: an insertion-ordered sequence of line items plus the tax rate
/// applied to it.
///
/// Explicitly owned and explicitly constructed; there is no ambient global
/// order. External layers receive only snapshots of the contents, never a
/// mutable reference.
#[derive(Debug, Clone)]
pub struct Order {
    items: Vec<LineItem>,
    tax_rate: TaxRate,
}

impl Order {
    /// Creates an empty order with the given tax rate.
    ///
    /// The rate is fixed for the lifetime of the order; it is configuration
    /// injected at construction, not a runtime-adjustable value.
    pub fn new(tax_rate: TaxRate) -> Self {
        Order {
            items: Vec::new(),
            tax_rate,
        }
    }

    /// The tax rate this order was constructed with.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Appends an item to the end of the order.
    ///
    /// No deduplication and no size cap; display order is insertion order.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes the item at `index`, shifting later items down by one.
    ///
    /// An out-of-range index is a silent no-op, not an error: indices are
    /// transient query results and the row may already be gone.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Removes all items unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an independent snapshot of the current items.
    ///
    /// Mutating the order afterwards does not affect a previously returned
    /// snapshot, and mutating a snapshot entry does not affect the order.
    pub fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Number of items currently in the order.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the order has no items.
    ///
    /// The empty/non-empty branch is the only state the presentation layer
    /// needs: it gates the summary view and the finalize auto-create path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes subtotal, tax and total from the current contents.
    ///
    /// Pure function of the live collection: the subtotal sums the
    /// already-rounded line totals (not raw quantity × price), tax applies
    /// the order's rate with the `round2` rule, and the grand total is their
    /// exact sum. An empty order yields (0.00, 0.00, 0.00).
    pub fn totals(&self) -> Totals {
        // Each line total is bounded by the price and quantity caps; the
        // saturating fold keeps the sum from wrapping at any item count.
        let subtotal_cents = self
            .items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total().cents()));
        let subtotal = Money::from_cents(subtotal_cents);
        let tax = subtotal.calculate_tax(self.tax_rate);
        let total = subtotal + tax;

        Totals {
            subtotal,
            tax,
            total,
        }
    }
}

/// Default order uses the standard 13% sales tax rate.
impl Default for Order {
    fn default() -> Self {
        Order::new(SALES_TAX_RATE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

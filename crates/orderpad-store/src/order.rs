//! # Saved Order
//!
//! Serializes the order contents into the jar and replays them on load.
//!
//! ## Record Format
//! The persisted payload is a JSON array of plain records:
//! `[{"name": "Widget", "quantity": 3, "price": 10.0}, ...]`
//! stored under [`ORDER_ITEMS_KEY`] with a 7-day TTL, gated on the opt-in
//! flag under [`SAVE_ORDER_KEY`].
//!
//! ## Replay Contract
//! Loading never fails: every record is driven back through the validating
//! [`LineItem::new`] constructor; a record that fails validation (or does
//! not even deserialize) is skipped individually and logged, so one bad
//! record never loses the rest of the order.

use serde::{Deserialize, Serialize};
use tracing::warn;

use orderpad_core::{LineItem, Order, TaxRate};

use crate::error::StoreResult;
use crate::jar::Jar;

/// Opt-in flag key; persistence only happens when this holds `"true"`.
pub const SAVE_ORDER_KEY: &str = "saveOrder";

/// Key holding the JSON array of saved item records.
pub const ORDER_ITEMS_KEY: &str = "orderItems";

/// How long a saved order survives, in days.
pub const ORDER_TTL_DAYS: i64 = 7;

// =============================================================================
// Record Format
// =============================================================================

/// A plain persisted line-item record.
///
/// Deliberately dumb: no invariants of its own. Validation happens on
/// replay, through the same constructor user input goes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<&LineItem> for SavedItem {
    fn from(item: &LineItem) -> Self {
        SavedItem {
            name: item.name().to_string(),
            quantity: item.quantity(),
            price: item.unit_price().to_decimal(),
        }
    }
}

// =============================================================================
// Save / Forget / Load
// =============================================================================

/// Returns whether the user opted in to order persistence.
pub fn save_opted_in(jar: &dyn Jar) -> bool {
    jar.get(SAVE_ORDER_KEY).as_deref() == Some("true")
}

/// Persists the order snapshot into the jar.
///
/// Saving an empty order removes the keys entirely instead of writing an
/// empty array, so a cleared order leaves no trace.
pub fn save_order(jar: &mut dyn Jar, order: &Order) -> StoreResult<()> {
    if order.is_empty() {
        return forget_order(jar);
    }

    let records: Vec<SavedItem> = order.items().iter().map(SavedItem::from).collect();
    let payload = serde_json::to_string(&records)?;

    jar.set(SAVE_ORDER_KEY, "true", Some(ORDER_TTL_DAYS))?;
    jar.set(ORDER_ITEMS_KEY, &payload, Some(ORDER_TTL_DAYS))?;
    Ok(())
}

/// Removes the opt-in flag and any saved order payload.
pub fn forget_order(jar: &mut dyn Jar) -> StoreResult<()> {
    jar.remove(SAVE_ORDER_KEY)?;
    jar.remove(ORDER_ITEMS_KEY)?;
    Ok(())
}

/// Rebuilds an order from the jar by replaying saved records.
///
/// Returns an empty order when persistence was not opted in, when the
/// payload is missing or malformed, or when every record fails validation.
/// Skipped records are logged at `warn` and never abort the batch.
pub fn load_order(jar: &dyn Jar, tax_rate: TaxRate) -> Order {
    let mut order = Order::new(tax_rate);

    if !save_opted_in(jar) {
        return order;
    }
    let Some(payload) = jar.get(ORDER_ITEMS_KEY) else {
        return order;
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&payload) {
        Ok(values) => values,
        Err(err) => {
            warn!(%err, "malformed saved order payload, starting empty");
            return order;
        }
    };

    for value in values {
        // Per-record deserialization so one bad record cannot sink the rest
        let record: SavedItem = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                warn!(%err, "skipping malformed saved record");
                continue;
            }
        };

        match LineItem::new(
            &record.name,
            &record.quantity.to_string(),
            &record.price.to_string(),
        ) {
            Ok(item) => order.add_item(item),
            Err(err) => {
                warn!(name = %record.name, %err, "skipping invalid saved item");
            }
        }
    }

    order
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jar::MemoryJar;
    use orderpad_core::SALES_TAX_RATE;

    fn init_logs() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .try_init();
    }

    fn sample_order() -> Order {
        let mut order = Order::new(SALES_TAX_RATE);
        order.add_item(LineItem::new("Widget", "3", "9.999").unwrap());
        order.add_item(LineItem::new("Gadget", "2", "5.00").unwrap());
        order
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut jar = MemoryJar::new();
        let order = sample_order();

        save_order(&mut jar, &order).unwrap();
        assert!(save_opted_in(&jar));

        let loaded = load_order(&jar, SALES_TAX_RATE);
        assert_eq!(loaded.items(), order.items());
        assert_eq!(loaded.totals(), order.totals());
    }

    #[test]
    fn test_saving_empty_order_removes_keys() {
        let mut jar = MemoryJar::new();
        save_order(&mut jar, &sample_order()).unwrap();

        save_order(&mut jar, &Order::new(SALES_TAX_RATE)).unwrap();
        assert!(!save_opted_in(&jar));
        assert_eq!(jar.get(ORDER_ITEMS_KEY), None);
    }

    #[test]
    fn test_load_without_opt_in_is_empty() {
        let mut jar = MemoryJar::new();
        // payload present but flag absent: not opted in, nothing loads
        jar.set(ORDER_ITEMS_KEY, r#"[{"name":"Widget","quantity":1,"price":1.0}]"#, None)
            .unwrap();

        assert!(load_order(&jar, SALES_TAX_RATE).is_empty());
    }

    #[test]
    fn test_invalid_records_are_skipped_individually() {
        init_logs();
        let mut jar = MemoryJar::new();
        jar.set(SAVE_ORDER_KEY, "true", None).unwrap();
        // second record fails validation (quantity 0), third is not even
        // the right shape; both are skipped, first and fourth survive
        jar.set(
            ORDER_ITEMS_KEY,
            r#"[
                {"name":"Widget","quantity":3,"price":10.0},
                {"name":"Broken","quantity":0,"price":1.0},
                {"name":"Shapeless","quantity":"three","price":1.0},
                {"name":"Gadget","quantity":2,"price":5.0}
            ]"#,
            None,
        )
        .unwrap();

        let loaded = load_order(&jar, SALES_TAX_RATE);
        assert_eq!(loaded.len(), 2);
        let items = loaded.items();
        assert_eq!(items[0].name(), "Widget");
        assert_eq!(items[1].name(), "Gadget");
    }

    #[test]
    fn test_malformed_payload_yields_empty_order() {
        init_logs();
        let mut jar = MemoryJar::new();
        jar.set(SAVE_ORDER_KEY, "true", None).unwrap();
        jar.set(ORDER_ITEMS_KEY, "not json at all", None).unwrap();

        assert!(load_order(&jar, SALES_TAX_RATE).is_empty());
    }

    #[test]
    fn test_record_price_round_trips_through_decimal() {
        let mut jar = MemoryJar::new();
        let mut order = Order::new(SALES_TAX_RATE);
        order.add_item(LineItem::new("Penny candy", "7", "0.01").unwrap());
        order.add_item(LineItem::new("Round thing", "1", "10").unwrap());

        save_order(&mut jar, &order).unwrap();
        let loaded = load_order(&jar, SALES_TAX_RATE);

        assert_eq!(loaded.items()[0].unit_price().cents(), 1);
        assert_eq!(loaded.items()[1].unit_price().cents(), 1000);
    }

    #[test]
    fn test_forget_order() {
        let mut jar = MemoryJar::new();
        save_order(&mut jar, &sample_order()).unwrap();

        forget_order(&mut jar).unwrap();
        assert!(!save_opted_in(&jar));
        assert!(load_order(&jar, SALES_TAX_RATE).is_empty());
    }
}

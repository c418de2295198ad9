//! # Order Summary
//!
//! The finalized view of an order: who it is for, when it was placed, the
//! line items, and the computed totals. This is a snapshot DTO; mutating
//! the live order afterwards does not touch a summary already produced.
//!
//! Rendering here is plain text. HTML escaping and layout belong to the
//! frontend, which receives the structured fields, not the rendered string.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use orderpad_core::{Money, Order, TaxRate, Totals};

/// One rendered line of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// The finalized order summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Trimmed customer name the order is for.
    pub customer_name: String,

    /// When the order was finalized.
    pub placed_at: DateTime<Utc>,

    /// The line items at the moment of finalizing, in display order.
    pub lines: Vec<SummaryLine>,

    /// Subtotal / tax / total as of the same moment.
    pub totals: Totals,

    /// The rate the tax line was computed with, for display.
    pub tax_rate: TaxRate,
}

impl OrderSummary {
    /// Builds a summary snapshot from the current order contents.
    pub fn new(customer_name: &str, order: &Order) -> Self {
        let lines = order
            .items()
            .iter()
            .map(|item| SummaryLine {
                name: item.name().to_string(),
                quantity: item.quantity(),
                unit_price: item.unit_price(),
                line_total: item.line_total(),
            })
            .collect();

        OrderSummary {
            customer_name: customer_name.trim().to_string(),
            placed_at: Utc::now(),
            lines,
            totals: order.totals(),
            tax_rate: order.tax_rate(),
        }
    }
}

/// Plain-text rendering, receipt style.
///
/// ```text
/// Order for Ada Lovelace on 2026-08-25 14:03 UTC
///   Widget x3 @ $10.00 = $30.00
///   Gadget x2 @ $5.00 = $10.00
/// Subtotal: $40.00
/// Tax (13%): $5.20
/// Total: $45.20
/// ```
impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Order for {} on {} UTC",
            self.customer_name,
            self.placed_at.format("%Y-%m-%d %H:%M")
        )?;

        for line in &self.lines {
            writeln!(
                f,
                "  {} x{} @ {} = {}",
                line.name, line.quantity, line.unit_price, line.line_total
            )?;
        }

        writeln!(f, "Subtotal: {}", self.totals.subtotal)?;
        writeln!(f, "Tax ({}%): {}", self.tax_rate.percentage(), self.totals.tax)?;
        write!(f, "Total: {}", self.totals.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orderpad_core::LineItem;

    fn sample_order() -> Order {
        let mut order = Order::default();
        order.add_item(LineItem::new("Widget", "3", "9.999").unwrap());
        order.add_item(LineItem::new("Gadget", "2", "5.00").unwrap());
        order
    }

    #[test]
    fn test_summary_snapshot() {
        let order = sample_order();
        let summary = OrderSummary::new("  Ada Lovelace  ", &order);

        assert_eq!(summary.customer_name, "Ada Lovelace"); // trimmed
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].line_total.cents(), 3000);
        assert_eq!(summary.totals.total.cents(), 4520);
    }

    #[test]
    fn test_summary_is_isolated_from_later_mutation() {
        let mut order = sample_order();
        let summary = OrderSummary::new("Ada", &order);

        order.clear();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.totals.subtotal.cents(), 4000);
    }

    #[test]
    fn test_display_rendering() {
        let summary = OrderSummary::new("Ada Lovelace", &sample_order());
        let text = summary.to_string();

        assert!(text.starts_with("Order for Ada Lovelace on "));
        assert!(text.contains("  Widget x3 @ $10.00 = $30.00\n"));
        assert!(text.contains("  Gadget x2 @ $5.00 = $10.00\n"));
        assert!(text.contains("Subtotal: $40.00\n"));
        assert!(text.contains("Tax (13%): $5.20\n"));
        assert!(text.ends_with("Total: $45.20"));
    }

    #[test]
    fn test_summary_serialization() {
        let summary = OrderSummary::new("Ada", &sample_order());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["customerName"], "Ada");
        assert_eq!(json["lines"][0]["unitPrice"], 1000);
        assert_eq!(json["totals"]["total"], 4520);
    }
}

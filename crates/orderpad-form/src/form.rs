//! # Order Form
//!
//! The form session a frontend drives: raw customer and item fields, the
//! live order, and the two opt-in flags. Every operation is synchronous
//! and returns before control goes back to the event loop.
//!
//! ## Validation Contract
//! Submit-style operations (`add_item`, `finalize`) validate the raw field
//! strings first, collecting an error for *every* failing field, and only
//! then hand the inputs to the order model's own validating constructor.
//! The model re-checks everything; the form layer is convenience, not the
//! invariant.

use tracing::{debug, warn};

use orderpad_core::validation::{
    validate_customer_name, validate_email, validate_item_name, validate_phone, validate_price,
    validate_quantity,
};
use orderpad_core::{LineItem, Order, Totals, ValidationError};
use orderpad_store::{
    clear_prefs, forget_order, load_order, load_prefs, save_opted_in, save_order, save_prefs,
    CustomerPrefs, Jar,
};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::summary::OrderSummary;

// =============================================================================
// Field State
// =============================================================================

/// Raw customer detail fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Raw pending item fields, exactly as typed.
///
/// These hold the item being composed; they are consumed (and reset) when
/// the item is successfully added to the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl ItemFields {
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.quantity.trim().is_empty()
            && self.price.trim().is_empty()
    }
}

// =============================================================================
// Order Form
// =============================================================================

/// A single order-entry session.
///
/// Owns its [`Order`] outright; there is no shared or global order state.
/// Persistence is always explicit: the jar is a parameter of the
/// operations that touch it, never a captured handle.
#[derive(Debug)]
pub struct OrderForm {
    /// Customer detail fields (raw, unvalidated until submit).
    pub customer: CustomerFields,

    /// The item currently being composed (raw, unvalidated until submit).
    pub pending: ItemFields,

    order: Order,
    remember_me: bool,
    save_order: bool,
}

impl OrderForm {
    /// Creates a fresh form with an empty order.
    pub fn new(config: &FormConfig) -> Self {
        OrderForm {
            customer: CustomerFields::default(),
            pending: ItemFields::default(),
            order: Order::new(config.tax_rate),
            remember_me: false,
            save_order: false,
        }
    }

    /// Rebuilds a form from persisted state: saved customer preferences
    /// and a replayed saved order, each only if previously opted in.
    pub fn restore(config: &FormConfig, jar: &dyn Jar) -> Self {
        let mut form = OrderForm::new(config);

        if let Some(CustomerPrefs { name, email, phone }) = load_prefs(jar) {
            form.customer = CustomerFields { name, email, phone };
            form.remember_me = true;
        }

        form.order = load_order(jar, config.tax_rate);
        form.save_order = save_opted_in(jar);

        debug!(
            items = form.order.len(),
            remember_me = form.remember_me,
            "form restored"
        );
        form
    }

    /// Read access to the live order.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Current totals; recomputed from the live order on every call.
    pub fn totals(&self) -> Totals {
        self.order.totals()
    }

    /// Whether the remember-me opt-in is set.
    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// Whether the save-order opt-in is set.
    pub fn save_order(&self) -> bool {
        self.save_order
    }

    /// Toggles the remember-me opt-in, saving or clearing the stored
    /// preferences immediately. Store failures are logged, never surfaced.
    pub fn set_remember_me(&mut self, on: bool, jar: &mut dyn Jar) {
        self.remember_me = on;
        if on {
            let prefs = CustomerPrefs {
                name: self.customer.name.clone(),
                email: self.customer.email.clone(),
                phone: self.customer.phone.clone(),
            };
            if let Err(err) = save_prefs(jar, &prefs) {
                warn!(%err, "could not save customer preferences");
            }
        } else if let Err(err) = clear_prefs(jar) {
            warn!(%err, "could not clear customer preferences");
        }
    }

    /// Toggles the save-order opt-in. Takes effect at the next finalize.
    pub fn set_save_order(&mut self, on: bool) {
        self.save_order = on;
    }

    /// Validates the pending item fields and, if clean, appends the item
    /// to the order and resets the pending fields.
    ///
    /// All failing fields are reported together.
    pub fn add_item(&mut self) -> Result<(), FormError> {
        let errors = item_field_errors(&self.pending);
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        let item = LineItem::new(&self.pending.name, &self.pending.quantity, &self.pending.price)
            .map_err(|err| FormError::Invalid(vec![err]))?;

        self.order.add_item(item);
        self.pending = ItemFields::default();
        debug!(items = self.order.len(), "item added");
        Ok(())
    }

    /// Removes the item at `index`; out of range is a silent no-op.
    pub fn remove_item(&mut self, index: usize) {
        self.order.remove_item(index);
        debug!(index, items = self.order.len(), "item removed");
    }

    /// Finalizes the order.
    ///
    /// Validates the customer fields (collecting every failing field).
    /// When the order is empty and item fields are pending, those are
    /// validated too and a single item is auto-created from them; when the
    /// order is empty and nothing is pending, finalizing fails with
    /// [`FormError::NoItems`].
    ///
    /// On success the order is persisted or forgotten per the save-order
    /// opt-in (failures logged, never fatal), preferences are refreshed if
    /// remember-me is on, and the rendered summary snapshot is returned.
    pub fn finalize(&mut self, jar: &mut dyn Jar) -> Result<OrderSummary, FormError> {
        let mut errors = customer_field_errors(&self.customer);

        let auto_create = self.order.is_empty() && !self.pending.is_blank();
        if auto_create {
            errors.extend(item_field_errors(&self.pending));
        }

        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        if self.order.is_empty() {
            if !auto_create {
                return Err(FormError::NoItems);
            }
            let item =
                LineItem::new(&self.pending.name, &self.pending.quantity, &self.pending.price)
                    .map_err(|err| FormError::Invalid(vec![err]))?;
            self.order.add_item(item);
            self.pending = ItemFields::default();
        }

        if self.save_order {
            if let Err(err) = save_order(jar, &self.order) {
                warn!(%err, "could not persist order");
            }
        } else if let Err(err) = forget_order(jar) {
            warn!(%err, "could not remove saved order");
        }

        if self.remember_me {
            let prefs = CustomerPrefs {
                name: self.customer.name.clone(),
                email: self.customer.email.clone(),
                phone: self.customer.phone.clone(),
            };
            if let Err(err) = save_prefs(jar, &prefs) {
                warn!(%err, "could not save customer preferences");
            }
        }

        debug!(items = self.order.len(), "order finalized");
        Ok(OrderSummary::new(&self.customer.name, &self.order))
    }

    /// Resets everything: fields, flags, the order, and all persisted
    /// state. Store failures are logged; the in-memory reset always wins.
    pub fn clear_all(&mut self, jar: &mut dyn Jar) {
        self.customer = CustomerFields::default();
        self.pending = ItemFields::default();
        self.remember_me = false;
        self.save_order = false;
        self.order.clear();

        if let Err(err) = forget_order(jar) {
            warn!(%err, "could not remove saved order");
        }
        if let Err(err) = clear_prefs(jar) {
            warn!(%err, "could not clear customer preferences");
        }

        debug!("form cleared");
    }
}

// =============================================================================
// Field Error Collection
// =============================================================================

fn customer_field_errors(fields: &CustomerFields) -> Vec<ValidationError> {
    [
        validate_customer_name(&fields.name),
        validate_email(&fields.email),
        validate_phone(&fields.phone),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

fn item_field_errors(fields: &ItemFields) -> Vec<ValidationError> {
    [
        validate_item_name(&fields.name),
        validate_quantity(&fields.quantity),
        validate_price(&fields.price),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orderpad_core::Field;
    use orderpad_store::MemoryJar;

    fn form() -> OrderForm {
        OrderForm::new(&FormConfig::default())
    }

    fn fill_customer(form: &mut OrderForm) {
        form.customer = CustomerFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234567".to_string(),
        };
    }

    fn fill_pending(form: &mut OrderForm, name: &str, qty: &str, price: &str) {
        form.pending = ItemFields {
            name: name.to_string(),
            quantity: qty.to_string(),
            price: price.to_string(),
        };
    }

    #[test]
    fn test_add_item_happy_path() {
        let mut form = form();
        fill_pending(&mut form, "Widget", "3", "9.999");

        form.add_item().unwrap();
        assert_eq!(form.order().len(), 1);
        assert_eq!(form.pending, ItemFields::default()); // fields reset
        assert_eq!(form.totals().subtotal.cents(), 3000);
    }

    #[test]
    fn test_add_item_collects_all_field_errors() {
        let mut form = form();
        fill_pending(&mut form, "W", "3.7", "");

        let err = form.add_item().unwrap_err();
        let fields: Vec<Field> = err.field_errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec![Field::ItemName, Field::Quantity, Field::Price]);
        assert!(form.order().is_empty());
        assert_eq!(form.pending.name, "W"); // fields kept for correction
    }

    #[test]
    fn test_remove_item_out_of_range_is_noop() {
        let mut form = form();
        fill_pending(&mut form, "Widget", "1", "1.00");
        form.add_item().unwrap();

        form.remove_item(7);
        assert_eq!(form.order().len(), 1);
        form.remove_item(0);
        assert!(form.order().is_empty());
    }

    #[test]
    fn test_finalize_happy_path() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);
        fill_pending(&mut form, "Widget", "3", "9.999");
        form.add_item().unwrap();
        fill_pending(&mut form, "Gadget", "2", "5.00");
        form.add_item().unwrap();

        let summary = form.finalize(&mut jar).unwrap();
        assert_eq!(summary.customer_name, "Ada Lovelace");
        assert_eq!(summary.totals.subtotal.cents(), 4000);
        assert_eq!(summary.totals.tax.cents(), 520);
        assert_eq!(summary.totals.total.cents(), 4520);
    }

    #[test]
    fn test_finalize_validates_customer_fields() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_pending(&mut form, "Widget", "1", "1.00");
        form.add_item().unwrap();

        let err = form.finalize(&mut jar).unwrap_err();
        let fields: Vec<Field> = err.field_errors().iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![Field::CustomerName, Field::Email, Field::Phone]
        );
    }

    #[test]
    fn test_finalize_auto_creates_item_from_pending_fields() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);
        fill_pending(&mut form, "Widget", "2", "4.50");

        let summary = form.finalize(&mut jar).unwrap();
        assert_eq!(form.order().len(), 1);
        assert_eq!(summary.lines[0].line_total.cents(), 900);
        assert_eq!(form.pending, ItemFields::default());
    }

    #[test]
    fn test_finalize_with_nothing_at_all_fails_no_items() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);

        assert_eq!(form.finalize(&mut jar).unwrap_err(), FormError::NoItems);
    }

    #[test]
    fn test_finalize_reports_bad_pending_fields_when_auto_creating() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);
        fill_pending(&mut form, "Widget", "1001", "1.00");

        let err = form.finalize(&mut jar).unwrap_err();
        assert_eq!(err.field_errors()[0].field(), Field::Quantity);
        assert!(form.order().is_empty());
    }

    #[test]
    fn test_finalize_persists_when_opted_in() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);
        fill_pending(&mut form, "Widget", "3", "10.00");
        form.add_item().unwrap();
        form.set_save_order(true);

        form.finalize(&mut jar).unwrap();

        let restored = OrderForm::restore(&FormConfig::default(), &jar);
        assert_eq!(restored.order().len(), 1);
        assert!(restored.save_order());
        assert_eq!(restored.totals().subtotal.cents(), 3000);
    }

    #[test]
    fn test_finalize_without_opt_in_leaves_no_saved_order() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);
        fill_pending(&mut form, "Widget", "1", "1.00");

        form.finalize(&mut jar).unwrap();

        let restored = OrderForm::restore(&FormConfig::default(), &jar);
        assert!(restored.order().is_empty());
    }

    #[test]
    fn test_remember_me_round_trip() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);
        form.set_remember_me(true, &mut jar);

        let restored = OrderForm::restore(&FormConfig::default(), &jar);
        assert!(restored.remember_me());
        assert_eq!(restored.customer.name, "Ada Lovelace");
        assert_eq!(restored.customer.email, "ada@example.com");

        form.set_remember_me(false, &mut jar);
        let restored = OrderForm::restore(&FormConfig::default(), &jar);
        assert!(!restored.remember_me());
        assert_eq!(restored.customer, CustomerFields::default());
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut jar = MemoryJar::new();
        let mut form = form();
        fill_customer(&mut form);
        fill_pending(&mut form, "Widget", "1", "1.00");
        form.add_item().unwrap();
        form.set_save_order(true);
        form.set_remember_me(true, &mut jar);
        form.finalize(&mut jar).unwrap();

        form.clear_all(&mut jar);

        assert!(form.order().is_empty());
        assert_eq!(form.customer, CustomerFields::default());
        assert!(!form.save_order());
        assert!(!form.remember_me());

        let restored = OrderForm::restore(&FormConfig::default(), &jar);
        assert!(restored.order().is_empty());
        assert!(!restored.remember_me());
    }
}

//! Editable order draft.
//!
//! Every mutation recomputes the affected line's subtotal and the order
//! total in the same call; `total` therefore always equals the sum of the
//! current subtotals. The draft holds numbers, not input text: form values
//! are parsed exactly once, when a field changes.

use crate::shared::date_utils::{input_date_to_timestamp, to_input_date};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_product::aggregate::{Product, ProductKey};
use contracts::domain::a005_order::aggregate::{
    Order, OrderKey, OrderLineUpdate, OrderUpdate,
};
use contracts::domain::common::AggregateId;
use contracts::enums::order_status::OrderStatus;
use std::collections::BTreeMap;

/// One editable order line.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub product_key: Option<ProductKey>,

    /// Whole units. `None` while the input is blank; non-integer or
    /// negative text also lands here rather than being truncated.
    pub quantity: Option<i64>,

    /// Auto-filled from the catalog when the product changes, editable
    /// afterwards.
    pub unit_price: f64,

    /// Derived: `quantity × unit_price`.
    pub subtotal: f64,
}

impl DraftLine {
    fn empty() -> Self {
        Self {
            product_key: None,
            quantity: None,
            unit_price: 0.0,
            subtotal: 0.0,
        }
    }
}

/// Derived subtotal of one line. A blank quantity counts as zero.
pub fn line_subtotal(quantity: Option<i64>, unit_price: f64) -> f64 {
    quantity.unwrap_or(0) as f64 * unit_price
}

/// Derived order total. Idempotent over the current line list.
pub fn total_of(lines: &[DraftLine]) -> f64 {
    lines.iter().map(|line| line.subtotal).sum()
}

fn parse_quantity(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value >= 0 => Some(value),
        _ => None,
    }
}

fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// In-memory draft of one order being edited.
///
/// Built from a snapshot of the persisted order; discarded on cancel or
/// after a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub key: OrderKey,
    pub customer_name: String,
    pub order_no: String,
    /// Calendar date `YYYY-MM-DD`; empty while unset.
    pub delivery_date: String,
    /// Calendar date `YYYY-MM-DD`; empty while unset (optional field).
    pub payment_date: String,
    pub status: OrderStatus,
    pub lines: Vec<DraftLine>,
    /// Derived; equals the sum of line subtotals after every mutation.
    pub total: f64,
}

impl OrderDraft {
    /// Build the draft from an order snapshot.
    ///
    /// Refuses any order that is not awaiting payment: the returned
    /// message is what the warning dialog shows before control goes back
    /// to the caller. Lines are re-priced from the current product
    /// catalog (a product missing from it prices at zero), subtotals and
    /// the total are derived, and both dates are normalized to the
    /// `YYYY-MM-DD` form the date inputs use.
    pub fn from_snapshot(
        order: &Order,
        customers: &[Customer],
        products: &[Product],
    ) -> Result<Self, String> {
        match order.status() {
            Some(OrderStatus::AwaitingPayment) => {}
            _ => {
                return Err(
                    "Solo se pueden editar pedidos con estado \"Esperando Pago\".".to_string(),
                )
            }
        }

        let lines: Vec<DraftLine> = order
            .lines
            .iter()
            .map(|line| {
                let unit_price = Product::price_of(products, line.product_key).unwrap_or(0.0);
                let quantity = Some(line.quantity);
                DraftLine {
                    product_key: Some(line.product_key),
                    quantity,
                    unit_price,
                    subtotal: line_subtotal(quantity, unit_price),
                }
            })
            .collect();
        let total = total_of(&lines);

        Ok(Self {
            key: order.key,
            customer_name: Customer::name_of(customers, order.customer_key),
            order_no: order.order_no.clone(),
            delivery_date: to_input_date(&order.delivery_date),
            payment_date: order
                .payment_date
                .as_deref()
                .map(to_input_date)
                .unwrap_or_default(),
            status: OrderStatus::AwaitingPayment,
            lines,
            total,
        })
    }

    pub fn set_delivery_date(&mut self, value: &str) {
        self.delivery_date = value.to_string();
    }

    pub fn set_payment_date(&mut self, value: &str) {
        self.payment_date = value.to_string();
    }

    /// Status stays within the permitted pair by construction.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Change a line's product: the unit price is overwritten from the
    /// catalog (zero when the product is unknown), even over a manual
    /// price edit, and the line re-derives.
    pub fn set_line_product(&mut self, index: usize, raw: &str, products: &[Product]) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.product_key = ProductKey::from_string(raw).ok();
        line.unit_price = line
            .product_key
            .and_then(|key| Product::price_of(products, key))
            .unwrap_or(0.0);
        line.subtotal = line_subtotal(line.quantity, line.unit_price);
        self.recompute_total();
    }

    pub fn set_line_quantity(&mut self, index: usize, raw: &str) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.quantity = parse_quantity(raw);
        line.subtotal = line_subtotal(line.quantity, line.unit_price);
        self.recompute_total();
    }

    pub fn set_line_unit_price(&mut self, index: usize, raw: &str) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.unit_price = parse_price(raw);
        line.subtotal = line_subtotal(line.quantity, line.unit_price);
        self.recompute_total();
    }

    /// Append a blank line. Duplicate products across lines are allowed.
    pub fn add_line(&mut self) {
        self.lines.push(DraftLine::empty());
        self.recompute_total();
    }

    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = total_of(&self.lines);
    }

    /// Field-keyed validation errors; the draft is submittable iff the
    /// map is empty. A zero quantity counts as missing.
    pub fn validate(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();

        if self.delivery_date.trim().is_empty() {
            errors.insert(
                "delivery_date".to_string(),
                "La fecha de entrega es obligatoria".to_string(),
            );
        }
        if self.lines.is_empty() {
            errors.insert(
                "lines".to_string(),
                "Debe agregar al menos un detalle de pedido".to_string(),
            );
        }
        for (index, line) in self.lines.iter().enumerate() {
            if line.product_key.map(|key| key.value()).unwrap_or(0) == 0 {
                errors.insert(
                    format!("product_{index}"),
                    "El producto es obligatorio".to_string(),
                );
            }
            if line.quantity.unwrap_or(0) == 0 {
                errors.insert(
                    format!("quantity_{index}"),
                    "La cantidad es obligatoria".to_string(),
                );
            }
        }

        errors
    }

    /// Serialize for the update request: dates as midnight ISO timestamps
    /// (`payment_date` null when unset), quantities as integers, amounts
    /// as decimals. Assumes `validate()` passed.
    pub fn to_update(&self) -> OrderUpdate {
        OrderUpdate {
            delivery_date: input_date_to_timestamp(&self.delivery_date).unwrap_or_default(),
            payment_date: input_date_to_timestamp(&self.payment_date),
            status_code: self.status.code(),
            lines: self
                .lines
                .iter()
                .map(|line| OrderLineUpdate {
                    product_key: line.product_key.map(|key| key.value()).unwrap_or(0),
                    quantity: line.quantity.unwrap_or(0),
                    unit_price: line.unit_price,
                    subtotal: line.subtotal,
                })
                .collect(),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::CustomerKey;
    use contracts::domain::a005_order::aggregate::OrderLine;

    fn product(key: i64, name: &str, price: f64) -> Product {
        Product {
            key: ProductKey(key),
            name: name.to_string(),
            price,
            is_active: true,
        }
    }

    fn customer(key: i64, name: &str) -> Customer {
        Customer {
            key: CustomerKey(key),
            name: name.to_string(),
            contact: String::new(),
            is_active: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Torta de vainilla", 10.0),
            product(2, "Torta de chocolate", 5.0),
            product(3, "Cheesecake", 12.5),
        ]
    }

    fn snapshot(status_code: i32, lines: Vec<OrderLine>) -> Order {
        Order {
            key: OrderKey(31),
            customer_key: CustomerKey(5),
            order_no: "PED-031".to_string(),
            delivery_date: "2024-09-20T00:00:00.000Z".to_string(),
            payment_date: None,
            status_code,
            lines,
            total: 0.0,
        }
    }

    fn line(product_key: i64, quantity: i64) -> OrderLine {
        OrderLine {
            product_key: ProductKey(product_key),
            quantity,
            unit_price: 0.0,
            subtotal: 0.0,
        }
    }

    fn draft_with(lines: Vec<OrderLine>) -> OrderDraft {
        OrderDraft::from_snapshot(&snapshot(7, lines), &[customer(5, "María Torres")], &catalog())
            .unwrap()
    }

    fn assert_total_invariant(draft: &OrderDraft) {
        let expected: f64 = draft.lines.iter().map(|l| l.subtotal).sum();
        assert_eq!(draft.total, expected);
    }

    #[test]
    fn refuses_orders_not_awaiting_payment() {
        let customers = [customer(5, "María Torres")];
        for code in [6, 3, 0, -1] {
            let result = OrderDraft::from_snapshot(&snapshot(code, vec![]), &customers, &catalog());
            assert!(result.is_err(), "code {code} must refuse the editor");
        }
        assert!(
            OrderDraft::from_snapshot(&snapshot(7, vec![]), &customers, &catalog()).is_ok()
        );
    }

    #[test]
    fn snapshot_normalizes_dates_and_resolves_the_customer() {
        let draft = draft_with(vec![]);
        assert_eq!(draft.delivery_date, "2024-09-20");
        assert_eq!(draft.payment_date, "");
        assert_eq!(draft.customer_name, "María Torres");
        assert_eq!(draft.order_no, "PED-031");
        assert_eq!(draft.status, OrderStatus::AwaitingPayment);
    }

    #[test]
    fn snapshot_reprices_lines_from_the_catalog() {
        // wire carries stale prices; the catalog wins
        let mut stale = line(1, 2);
        stale.unit_price = 99.0;
        stale.subtotal = 198.0;
        let draft = draft_with(vec![stale]);
        assert_eq!(draft.lines[0].unit_price, 10.0);
        assert_eq!(draft.lines[0].subtotal, 20.0);
        assert_eq!(draft.total, 20.0);
    }

    #[test]
    fn unknown_product_prices_at_zero() {
        let draft = draft_with(vec![line(999, 4)]);
        assert_eq!(draft.lines[0].unit_price, 0.0);
        assert_eq!(draft.total, 0.0);
    }

    #[test]
    fn total_tracks_every_line_mutation() {
        let mut draft = draft_with(vec![line(1, 2), line(2, 3)]);
        assert_eq!(draft.total, 35.0);
        assert_total_invariant(&draft);

        draft.set_line_quantity(0, "5");
        assert_total_invariant(&draft);
        assert_eq!(draft.total, 65.0);

        draft.set_line_product(1, "3", &catalog());
        assert_total_invariant(&draft);
        assert_eq!(draft.total, 50.0 + 37.5);

        draft.set_line_unit_price(0, "8");
        assert_total_invariant(&draft);
        assert_eq!(draft.total, 40.0 + 37.5);

        draft.add_line();
        assert_total_invariant(&draft);

        draft.set_line_quantity(2, "not a number");
        assert_total_invariant(&draft);

        draft.remove_line(0);
        assert_total_invariant(&draft);
        assert_eq!(draft.total, 37.5);
    }

    #[test]
    fn product_change_overwrites_a_manual_price() {
        let mut draft = draft_with(vec![line(1, 2)]);
        draft.set_line_unit_price(0, "42.75");
        assert_eq!(draft.lines[0].unit_price, 42.75);
        assert_eq!(draft.lines[0].subtotal, 85.5);

        draft.set_line_product(0, "2", &catalog());
        assert_eq!(draft.lines[0].unit_price, 5.0);
        assert_eq!(draft.lines[0].subtotal, 10.0);
        assert_eq!(draft.total, 10.0);
    }

    #[test]
    fn product_change_to_unknown_key_prices_at_zero() {
        let mut draft = draft_with(vec![line(1, 2)]);
        draft.set_line_product(0, "999", &catalog());
        assert_eq!(draft.lines[0].unit_price, 0.0);
        assert_eq!(draft.lines[0].subtotal, 0.0);
    }

    #[test]
    fn quantity_coercion_is_strict() {
        let mut draft = draft_with(vec![line(1, 2)]);

        draft.set_line_quantity(0, "");
        assert_eq!(draft.lines[0].quantity, None);
        assert_eq!(draft.lines[0].subtotal, 0.0);

        // fractional input is invalid, not truncated
        draft.set_line_quantity(0, "3.5");
        assert_eq!(draft.lines[0].quantity, None);

        draft.set_line_quantity(0, "-2");
        assert_eq!(draft.lines[0].quantity, None);

        draft.set_line_quantity(0, "abc");
        assert_eq!(draft.lines[0].quantity, None);

        draft.set_line_quantity(0, " 4 ");
        assert_eq!(draft.lines[0].quantity, Some(4));
        assert_eq!(draft.lines[0].subtotal, 40.0);
    }

    #[test]
    fn price_coercion_falls_back_to_zero() {
        let mut draft = draft_with(vec![line(1, 2)]);
        draft.set_line_unit_price(0, "abc");
        assert_eq!(draft.lines[0].unit_price, 0.0);
        assert_eq!(draft.lines[0].subtotal, 0.0);

        draft.set_line_unit_price(0, "12.5");
        assert_eq!(draft.lines[0].subtotal, 25.0);
    }

    #[test]
    fn add_line_appends_a_blank_line() {
        let mut draft = draft_with(vec![line(1, 2)]);
        draft.add_line();
        assert_eq!(draft.lines.len(), 2);
        let added = &draft.lines[1];
        assert_eq!(added.product_key, None);
        assert_eq!(added.quantity, None);
        assert_eq!(added.unit_price, 0.0);
        assert_eq!(added.subtotal, 0.0);
        assert_eq!(draft.total, 20.0);
    }

    #[test]
    fn duplicate_products_are_allowed() {
        let mut draft = draft_with(vec![line(1, 2)]);
        draft.add_line();
        draft.set_line_product(1, "1", &catalog());
        draft.set_line_quantity(1, "1");
        assert_eq!(draft.validate().len(), 0);
        assert_eq!(draft.total, 30.0);
    }

    #[test]
    fn remove_line_drops_exactly_its_subtotal() {
        let mut draft = draft_with(vec![line(1, 2), line(2, 3)]);
        let removed_subtotal = draft.lines[0].subtotal;
        let before = draft.total;
        draft.remove_line(0);
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.total, before - removed_subtotal);

        // out-of-range index is a no-op
        draft.remove_line(5);
        assert_eq!(draft.lines.len(), 1);
    }

    #[test]
    fn totals_follow_the_add_then_remove_scenario() {
        let mut draft = draft_with(vec![line(1, 2)]);
        assert_eq!(draft.total, 20.0);

        draft.add_line();
        draft.set_line_product(1, "2", &catalog());
        draft.set_line_quantity(1, "3");
        assert_eq!(draft.total, 35.0);

        draft.remove_line(0);
        assert_eq!(draft.total, 15.0);
    }

    #[test]
    fn validate_requires_delivery_date_lines_products_and_quantities() {
        let mut draft = draft_with(vec![line(1, 2)]);
        assert!(draft.validate().is_empty());

        draft.set_delivery_date("");
        let errors = draft.validate();
        assert!(errors.contains_key("delivery_date"));

        draft.set_delivery_date("2024-09-20");
        draft.add_line();
        let errors = draft.validate();
        assert!(errors.contains_key("product_1"));
        assert!(errors.contains_key("quantity_1"));

        draft.set_line_product(1, "2", &catalog());
        draft.set_line_quantity(1, "0");
        let errors = draft.validate();
        assert!(!errors.contains_key("product_1"));
        assert!(errors.contains_key("quantity_1"));

        draft.set_line_quantity(1, "3");
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn validate_rejects_an_empty_line_list() {
        let draft = draft_with(vec![]);
        let errors = draft.validate();
        assert!(errors.contains_key("lines"));
    }

    #[test]
    fn update_serializes_dates_and_numbers() {
        let mut draft = draft_with(vec![line(1, 2)]);
        draft.set_payment_date("2024-09-25");
        draft.set_status(OrderStatus::Paid);

        let update = draft.to_update();
        assert_eq!(update.delivery_date, "2024-09-20T00:00:00.000Z");
        assert_eq!(
            update.payment_date,
            Some("2024-09-25T00:00:00.000Z".to_string())
        );
        assert_eq!(update.status_code, 6);
        assert_eq!(update.lines.len(), 1);
        assert_eq!(update.lines[0].product_key, 1);
        assert_eq!(update.lines[0].quantity, 2);
        assert_eq!(update.lines[0].unit_price, 10.0);
        assert_eq!(update.lines[0].subtotal, 20.0);
        assert_eq!(update.total, 20.0);
    }

    #[test]
    fn update_sends_null_for_an_unset_payment_date() {
        let draft = draft_with(vec![line(1, 2)]);
        let update = draft.to_update();
        assert_eq!(update.payment_date, None);
        assert_eq!(update.status_code, 7);
    }
}

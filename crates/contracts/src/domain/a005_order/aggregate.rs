use crate::domain::a001_customer::aggregate::CustomerKey;
use crate::domain::a002_product::aggregate::ProductKey;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::order_status::OrderStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// Key Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderKey(pub i64);

impl OrderKey {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for OrderKey {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(OrderKey::new)
            .map_err(|e| format!("Invalid order key: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One line of a customer order. Duplicate products across lines are
/// allowed here, unlike spec sheet supply lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "id_producto")]
    pub product_key: ProductKey,

    #[serde(rename = "cantidad", default)]
    pub quantity: i64,

    #[serde(rename = "precio_unitario", default)]
    pub unit_price: f64,

    #[serde(rename = "subtotal", default)]
    pub subtotal: f64,
}

/// Customer order (pedido) as the external API returns it.
///
/// `order_no` is assigned at creation and read-only afterwards; dates come
/// as ISO timestamps and are normalized to calendar dates when an editing
/// draft is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "id_pedido")]
    pub key: OrderKey,

    #[serde(rename = "id_cliente")]
    pub customer_key: CustomerKey,

    #[serde(rename = "numero_pedido", default)]
    pub order_no: String,

    #[serde(rename = "fecha_entrega", default)]
    pub delivery_date: String,

    #[serde(rename = "fecha_pago", default)]
    pub payment_date: Option<String>,

    #[serde(rename = "id_estado")]
    pub status_code: i32,

    #[serde(rename = "detallesPedido", default)]
    pub lines: Vec<OrderLine>,

    #[serde(default)]
    pub total: f64,
}

impl Order {
    /// Status as this dashboard's state machine knows it; `None` for codes
    /// outside the editable pair.
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(self.status_code)
    }
}

impl AggregateRoot for Order {
    type Key = OrderKey;

    fn key(&self) -> OrderKey {
        self.key
    }

    fn display_name(&self) -> &str {
        &self.order_no
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "pedidos"
    }

    fn element_name() -> &'static str {
        "Pedido"
    }

    fn list_name() -> &'static str {
        "Pedidos"
    }
}

// ============================================================================
// Update DTO (PUT /api/pedidos/{id})
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineUpdate {
    #[serde(rename = "id_producto")]
    pub product_key: i64,

    #[serde(rename = "cantidad")]
    pub quantity: i64,

    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,

    #[serde(rename = "subtotal")]
    pub subtotal: f64,
}

/// Serialized order draft. Dates are ISO timestamps; `payment_date`
/// serializes as JSON null when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(rename = "fecha_entrega")]
    pub delivery_date: String,

    #[serde(rename = "fecha_pago")]
    pub payment_date: Option<String>,

    #[serde(rename = "id_estado")]
    pub status_code: i32,

    #[serde(rename = "detallesPedido")]
    pub lines: Vec<OrderLineUpdate>,

    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_wire_shape() {
        let json = r#"{
            "id_pedido": 31,
            "id_cliente": 5,
            "numero_pedido": "PED-031",
            "fecha_entrega": "2024-09-20T00:00:00.000Z",
            "fecha_pago": null,
            "id_estado": 7,
            "detallesPedido": [
                { "id_producto": 2, "cantidad": 4, "precio_unitario": 12.5, "subtotal": 50 }
            ],
            "total": 50
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.key, OrderKey(31));
        assert_eq!(order.status(), Some(OrderStatus::AwaitingPayment));
        assert_eq!(order.payment_date, None);
        assert_eq!(order.lines[0].quantity, 4);
    }

    #[test]
    fn status_is_none_for_codes_outside_the_editable_pair() {
        let json = r#"{ "id_pedido": 1, "id_cliente": 1, "id_estado": 3 }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status(), None);
    }

    #[test]
    fn unset_payment_date_serializes_as_null() {
        let update = OrderUpdate {
            delivery_date: "2024-09-20T00:00:00.000Z".to_string(),
            payment_date: None,
            status_code: 7,
            lines: vec![OrderLineUpdate {
                product_key: 2,
                quantity: 4,
                unit_price: 12.5,
                subtotal: 50.0,
            }],
            total: 50.0,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json["fecha_pago"].is_null());
        assert_eq!(json["detallesPedido"][0]["cantidad"], 4);
        assert_eq!(json["total"], 50.0);
    }
}

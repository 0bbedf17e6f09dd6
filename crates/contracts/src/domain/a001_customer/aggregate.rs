use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// Key Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerKey(pub i64);

impl CustomerKey {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CustomerKey {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(CustomerKey::new)
            .map_err(|e| format!("Invalid customer key: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog record of a customer (cliente).
///
/// Field names follow the external API wire format (`id_cliente`,
/// `nombre`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "id_cliente")]
    pub key: CustomerKey,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "contacto", default)]
    pub contact: String,

    #[serde(rename = "estado", default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Customer {
    /// Resolve a customer's display name by key; empty when the key is not
    /// in the catalog.
    pub fn name_of(customers: &[Customer], key: CustomerKey) -> String {
        customers
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}

impl AggregateRoot for Customer {
    type Key = CustomerKey;

    fn key(&self) -> CustomerKey {
        self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "clientes"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// Key Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductKey(pub i64);

impl ProductKey {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductKey {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(ProductKey::new)
            .map_err(|e| format!("Invalid product key: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog record of a sellable product (producto).
///
/// `price` is the current list price; order lines are re-priced from it
/// whenever a line's product changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "id_producto")]
    pub key: ProductKey,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "precio", default)]
    pub price: f64,

    #[serde(rename = "estado", default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Product {
    /// Current list price of a product; `None` when the key is not in the
    /// catalog.
    pub fn price_of(products: &[Product], key: ProductKey) -> Option<f64> {
        products.iter().find(|p| p.key == key).map(|p| p.price)
    }

    pub fn name_of(products: &[Product], key: ProductKey) -> String {
        products
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }
}

impl AggregateRoot for Product {
    type Key = ProductKey;

    fn key(&self) -> ProductKey {
        self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "productos"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }
}

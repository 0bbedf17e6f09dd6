use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// Key Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplyKey(pub i64);

impl SupplyKey {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for SupplyKey {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(SupplyKey::new)
            .map_err(|e| format!("Invalid supply key: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog record of a raw-material item (insumo) referenced by spec
/// sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyItem {
    #[serde(rename = "id_insumo")]
    pub key: SupplyKey,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "estado", default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl SupplyItem {
    pub fn name_of(items: &[SupplyItem], key: SupplyKey) -> String {
        items
            .iter()
            .find(|i| i.key == key)
            .map(|i| i.name.clone())
            .unwrap_or_default()
    }
}

impl AggregateRoot for SupplyItem {
    type Key = SupplyKey;

    fn key(&self) -> SupplyKey {
        self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "insumos"
    }

    fn element_name() -> &'static str {
        "Insumo"
    }

    fn list_name() -> &'static str {
        "Insumos"
    }
}

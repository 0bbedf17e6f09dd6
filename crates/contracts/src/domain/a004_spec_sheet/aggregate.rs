use crate::domain::a002_product::aggregate::ProductKey;
use crate::domain::a003_supply_item::aggregate::SupplyKey;
use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// Key Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecSheetKey(pub i64);

impl SpecSheetKey {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for SpecSheetKey {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(SpecSheetKey::new)
            .map_err(|e| format!("Invalid spec sheet key: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One supply line of a spec sheet: which insumo and how much of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecSheetLine {
    #[serde(rename = "id_insumo")]
    pub supply_key: SupplyKey,

    #[serde(rename = "cantidad", default)]
    pub quantity: f64,
}

/// Spec sheet (ficha técnica): links a product to the supply items it is
/// made from.
// Read payloads key the table part as "detallesFichaTecnicat"; update
// payloads use "detallesFichaTecnica" (see SpecSheetUpdate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecSheet {
    #[serde(rename = "id_ficha")]
    pub key: SpecSheetKey,

    #[serde(rename = "id_producto")]
    pub product_key: ProductKey,

    /// Short description of the sheet itself.
    #[serde(rename = "descripcion", default)]
    pub summary: String,

    /// Free-form description of the supplies as a whole.
    #[serde(rename = "insumos", default)]
    pub supplies_note: String,

    #[serde(rename = "detallesFichaTecnicat", default)]
    pub lines: Vec<SpecSheetLine>,
}

impl AggregateRoot for SpecSheet {
    type Key = SpecSheetKey;

    fn key(&self) -> SpecSheetKey {
        self.key
    }

    fn display_name(&self) -> &str {
        &self.summary
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "fichastecnicas"
    }

    fn element_name() -> &'static str {
        "Ficha técnica"
    }

    fn list_name() -> &'static str {
        "Fichas técnicas"
    }
}

// ============================================================================
// Update DTO (PUT /api/fichastecnicas/{id})
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecSheetLineUpdate {
    #[serde(rename = "id_insumo")]
    pub supply_key: i64,

    #[serde(rename = "cantidad")]
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecSheetUpdate {
    #[serde(rename = "id_producto")]
    pub product_key: i64,

    #[serde(rename = "descripcion")]
    pub summary: String,

    #[serde(rename = "insumos")]
    pub supplies_note: String,

    #[serde(rename = "detallesFichaTecnica")]
    pub lines: Vec<SpecSheetLineUpdate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_wire_shape() {
        let json = r#"{
            "id_ficha": 4,
            "id_producto": 11,
            "descripcion": "Torta de chocolate",
            "insumos": "Harina, cacao y huevos",
            "detallesFichaTecnicat": [
                { "id_insumo": 2, "cantidad": 0.5 },
                { "id_insumo": 9, "cantidad": 3 }
            ]
        }"#;
        let sheet: SpecSheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.key, SpecSheetKey(4));
        assert_eq!(sheet.product_key.value(), 11);
        assert_eq!(sheet.lines.len(), 2);
        assert_eq!(sheet.lines[0].supply_key, SupplyKey(2));
        assert_eq!(sheet.lines[1].quantity, 3.0);
    }

    #[test]
    fn update_uses_the_write_side_table_name() {
        let update = SpecSheetUpdate {
            product_key: 11,
            summary: "Torta".to_string(),
            supplies_note: "Harina".to_string(),
            lines: vec![SpecSheetLineUpdate {
                supply_key: 2,
                quantity: 0.5,
            }],
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("detallesFichaTecnica").is_some());
        assert!(json.get("detallesFichaTecnicat").is_none());
        assert_eq!(json["detallesFichaTecnica"][0]["id_insumo"], 2);
    }
}

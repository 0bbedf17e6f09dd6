use serde::Deserialize;
use serde_json::Value;

/// Embedded supplier reference inside a purchase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupplierRef {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Wire shape of one purchase as GET /api/compras returns it.
///
/// `status` and `total` are kept as raw JSON values: the backend has sent
/// both booleans and strings for `estado`, and stringified decimals for
/// `total`. Coercion happens once, in `PurchaseReportRow::from_purchase`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Purchase {
    #[serde(rename = "numero_recibo", default)]
    pub receipt_no: Option<String>,

    #[serde(rename = "proveedorCompra", default)]
    pub supplier: Option<SupplierRef>,

    #[serde(rename = "fecha_compra", default)]
    pub purchase_date: String,

    #[serde(rename = "fecha_registro", default)]
    pub recorded_date: String,

    #[serde(rename = "estado", default)]
    pub status: Value,

    #[serde(default)]
    pub total: Value,

    #[serde(rename = "motivo_anulacion", default)]
    pub void_reason: Option<String>,
}

/// One row of the purchase report spreadsheet, fully normalized: missing
/// receipt/void fields become "N/A", a missing supplier "Desconocido",
/// timestamps are truncated to their date part and the total printed with
/// two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReportRow {
    pub receipt_no: String,
    pub supplier: String,
    pub purchase_date: String,
    pub recorded_date: String,
    pub status: String,
    pub total: String,
    pub void_reason: String,
}

impl PurchaseReportRow {
    pub fn from_purchase(purchase: &Purchase) -> Self {
        Self {
            receipt_no: non_empty_or(purchase.receipt_no.clone(), "N/A"),
            supplier: purchase
                .supplier
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "Desconocido".to_string()),
            purchase_date: date_part(&purchase.purchase_date),
            recorded_date: date_part(&purchase.recorded_date),
            status: value_text(&purchase.status),
            total: format!("{:.2}", value_number(&purchase.total)),
            void_reason: non_empty_or(purchase.void_reason.clone(), "N/A"),
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

fn date_part(timestamp: &str) -> String {
    timestamp.split('T').next().unwrap_or(timestamp).to_string()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn value_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn purchase(json: Value) -> Purchase {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn maps_a_complete_purchase() {
        let row = PurchaseReportRow::from_purchase(&purchase(json!({
            "numero_recibo": "REC-0042",
            "proveedorCompra": { "nombre": "Molinos del Sur" },
            "fecha_compra": "2024-08-02T15:30:00.000Z",
            "fecha_registro": "2024-08-03T09:00:00.000Z",
            "estado": "Registrada",
            "total": 1530.5,
            "motivo_anulacion": null
        })));
        assert_eq!(row.receipt_no, "REC-0042");
        assert_eq!(row.supplier, "Molinos del Sur");
        assert_eq!(row.purchase_date, "2024-08-02");
        assert_eq!(row.recorded_date, "2024-08-03");
        assert_eq!(row.status, "Registrada");
        assert_eq!(row.total, "1530.50");
        assert_eq!(row.void_reason, "N/A");
    }

    #[test]
    fn missing_fields_get_fallbacks() {
        let row = PurchaseReportRow::from_purchase(&purchase(json!({
            "fecha_compra": "2024-08-02",
            "fecha_registro": "2024-08-02"
        })));
        assert_eq!(row.receipt_no, "N/A");
        assert_eq!(row.supplier, "Desconocido");
        assert_eq!(row.total, "0.00");
        assert_eq!(row.void_reason, "N/A");
    }

    #[test]
    fn coerces_stringified_totals_and_boolean_status() {
        let row = PurchaseReportRow::from_purchase(&purchase(json!({
            "fecha_compra": "2024-08-02",
            "fecha_registro": "2024-08-02",
            "estado": true,
            "total": "249.9"
        })));
        assert_eq!(row.status, "true");
        assert_eq!(row.total, "249.90");
    }

    #[test]
    fn empty_receipt_counts_as_missing() {
        let row = PurchaseReportRow::from_purchase(&purchase(json!({
            "numero_recibo": "",
            "fecha_compra": "2024-08-02",
            "fecha_registro": "2024-08-02"
        })));
        assert_eq!(row.receipt_no, "N/A");
    }
}

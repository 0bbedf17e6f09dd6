pub mod api;
pub mod ui;

use crate::shared::export::SpreadsheetExportable;
use contracts::projections::p900_purchase_report::dto::PurchaseReportRow;

impl SpreadsheetExportable for PurchaseReportRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Número de Recibo",
            "Proveedor",
            "Fecha de Compra",
            "Fecha de Registro",
            "Estado",
            "Total",
            "Anulación",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.receipt_no.clone(),
            self.supplier.clone(),
            self.purchase_date.clone(),
            self.recorded_date.clone(),
            self.status.clone(),
            self.total.clone(),
            self.void_reason.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_cells_line_up_with_headers() {
        let row = PurchaseReportRow {
            receipt_no: "REC-0042".to_string(),
            supplier: "Molinos del Sur".to_string(),
            purchase_date: "2024-08-02".to_string(),
            recorded_date: "2024-08-03".to_string(),
            status: "Registrada".to_string(),
            total: "1530.50".to_string(),
            void_reason: "N/A".to_string(),
        };
        assert_eq!(PurchaseReportRow::headers().len(), row.to_row().len());
        assert_eq!(row.to_row()[0], "REC-0042");
        assert_eq!(row.to_row()[5], "1530.50");
    }
}

use super::api::fetch_purchases;
use crate::shared::export::export_csv;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use contracts::projections::p900_purchase_report::dto::PurchaseReportRow;
use leptos::prelude::*;

const REPORT_FILENAME: &str = "reporte_compras.csv";

/// Purchase report page: one explicit action that fetches the purchases,
/// maps them to spreadsheet rows and hands the file to the browser.
#[component]
pub fn PurchaseReportPage() -> impl IntoView {
    let notify = use_notify();
    let (generating, set_generating) = signal(false);

    let generate = move || {
        if generating.get_untracked() {
            return;
        }
        set_generating.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_purchases().await {
                Ok(purchases) => {
                    let rows: Vec<PurchaseReportRow> = purchases
                        .iter()
                        .map(PurchaseReportRow::from_purchase)
                        .collect();
                    match export_csv(&rows, REPORT_FILENAME) {
                        Ok(()) => notify.success("Reporte generado correctamente"),
                        Err(e) => {
                            log::error!("error exporting purchase report: {e}");
                            notify.error("Hubo un problema al generar el reporte de compras.");
                        }
                    }
                }
                Err(e) => {
                    log::error!("error loading purchases: {e}");
                    notify.error("Hubo un problema al generar el reporte de compras.");
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Reporte de compras"}</h2>
            </div>

            <p class="page-description">
                {"Descarga todas las compras registradas como hoja de cálculo, \
                  con proveedor, fechas, estado, total y motivo de anulación."}
            </p>

            <div class="header__actions">
                <button
                    class="button button--primary"
                    on:click=move |_| generate()
                    disabled=move || generating.get()
                >
                    {icon("download")}
                    {move || if generating.get() { "Generando..." } else { "Generar reporte" }}
                </button>
            </div>
        </div>
    }
}

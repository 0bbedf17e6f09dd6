pub mod state;

use self::state::create_state;
use crate::domain::a002_product::api::fetch_products;
use crate::domain::a003_supply_item::api::fetch_supply_items;
use crate::domain::a004_spec_sheet::ui::details::SpecSheetDetails;
use crate::shared::api_utils::get_json;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_supply_item::aggregate::SupplyItem;
use contracts::domain::a004_spec_sheet::aggregate::{SpecSheet, SpecSheetKey};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SpecSheetRow {
    pub key: SpecSheetKey,
    pub product: String,
    pub summary: String,
    pub line_count: usize,
}

impl SpecSheetRow {
    fn build(sheet: &SpecSheet, products: &[Product]) -> Self {
        Self {
            key: sheet.key,
            product: Product::name_of(products, sheet.product_key),
            summary: sheet.summary.clone(),
            line_count: sheet.lines.len(),
        }
    }
}

impl Sortable for SpecSheetRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "product" => self
                .product
                .to_lowercase()
                .cmp(&other.product.to_lowercase()),
            "summary" => self
                .summary
                .to_lowercase()
                .cmp(&other.summary.to_lowercase()),
            "line_count" => self.line_count.cmp(&other.line_count),
            _ => Ordering::Equal,
        }
    }
}

async fn fetch_spec_sheets() -> Result<Vec<SpecSheet>, String> {
    get_json(&format!("/api/{}", SpecSheet::collection_name())).await
}

#[component]
pub fn SpecSheetList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let (sheets, set_sheets) = signal::<Vec<SpecSheet>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (supplies, set_supplies) = signal::<Vec<SupplyItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_spec_sheets().await {
                Ok(v) => {
                    set_sheets.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            match fetch_products().await {
                Ok(v) => set_products.set(v),
                Err(e) => log::error!("error loading products: {e}"),
            }
            match fetch_supply_items().await {
                Ok(v) => set_supplies.set(v),
                Err(e) => log::error!("error loading supply items: {e}"),
            }
        });
    };

    // The editor opens in a modal, as everywhere else with short forms.
    let open_details_modal = move |key: SpecSheetKey| {
        let snapshot = sheets.get().iter().find(|s| s.key == key).cloned();
        let Some(sheet) = snapshot else { return };
        modal_stack.push_with_frame(
            Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
            Some("spec-sheet-modal".to_string()),
            move |handle| {
                view! {
                    <SpecSheetDetails
                        sheet=sheet.clone()
                        products=products.get_untracked()
                        supplies=supplies.get_untracked()
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                fetch();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_rows = move || {
        let catalog = products.get();
        let mut rows: Vec<SpecSheetRow> = sheets
            .get()
            .iter()
            .map(|sheet| SpecSheetRow::build(sheet, &catalog))
            .collect();
        let s = state.get();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{SpecSheet::list_name()}</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("product")>
                                "Producto"
                                <span class=move || get_sort_class(&state.get().sort_field, "product")>
                                    {move || get_sort_indicator(&state.get().sort_field, "product", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("summary")>
                                "Descripción"
                                <span class=move || get_sort_class(&state.get().sort_field, "summary")>
                                    {move || get_sort_indicator(&state.get().sort_field, "summary", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("line_count")>
                                "Insumos"
                                <span class=move || get_sort_class(&state.get().sort_field, "line_count")>
                                    {move || get_sort_indicator(&state.get().sort_field, "line_count", state.get().sort_ascending)}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            sorted_rows()
                                .into_iter()
                                .map(|row| {
                                    let key = row.key;
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details_modal(key)>
                                            <td class="table__cell">{row.product}</td>
                                            <td class="table__cell">{row.summary}</td>
                                            <td class="table__cell">{row.line_count}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

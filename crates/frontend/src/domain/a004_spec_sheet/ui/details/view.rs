use super::draft::SpecSheetDraft;
use super::view_model::SpecSheetDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_supply_item::aggregate::SupplyItem;
use contracts::domain::a004_spec_sheet::aggregate::SpecSheet;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

#[component]
pub fn SpecSheetDetails(
    sheet: SpecSheet,
    products: Vec<Product>,
    supplies: Vec<SupplyItem>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let vm = SpecSheetDetailsViewModel::new(SpecSheetDraft::from_snapshot(&sheet));
    let products = StoredValue::new(products);
    let supplies = StoredValue::new(supplies);

    view! {
        <div class="details-container spec-sheet-details">
            <div class="details-header">
                <h3>{format!("Editar {}", SpecSheet::element_name())}</h3>
            </div>

            {move || vm.error_for("general").map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product">{"Producto"}</label>
                    <select
                        id="product"
                        on:change=move |ev| {
                            vm.draft.update(|d| d.set_product(&event_target_value(&ev)));
                            vm.clear_error("product");
                        }
                    >
                        <option value="">{"Seleccione un producto"}</option>
                        {move || {
                            let current = vm.draft.get().product_key;
                            products.with_value(|catalog| {
                                catalog
                                    .iter()
                                    .filter(|p| p.is_active)
                                    .map(|p| {
                                        let key = p.key.as_string();
                                        let selected = Some(p.key) == current;
                                        view! {
                                            <option value=key selected=selected>{p.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </select>
                    {move || vm.error_for("product").map(|e| view! { <p class="field-error">{e}</p> })}
                </div>

                <div class="form-group">
                    <label for="summary">{"Descripción de la ficha técnica"}</label>
                    <textarea
                        id="summary"
                        rows="2"
                        prop:value=move || vm.draft.get().summary
                        on:input=move |ev| {
                            vm.draft.update(|d| d.set_summary(&event_target_value(&ev)));
                            vm.clear_error("summary");
                        }
                    />
                    {move || vm.error_for("summary").map(|e| view! { <p class="field-error">{e}</p> })}
                </div>

                <div class="form-group">
                    <label for="supplies_note">{"Descripción detallada de los insumos"}</label>
                    <textarea
                        id="supplies_note"
                        rows="3"
                        prop:value=move || vm.draft.get().supplies_note
                        on:input=move |ev| {
                            vm.draft.update(|d| d.set_supplies_note(&event_target_value(&ev)));
                            vm.clear_error("supplies_note");
                        }
                    />
                    {move || vm.error_for("supplies_note").map(|e| view! { <p class="field-error">{e}</p> })}
                </div>
            </div>

            <h4 class="details-subtitle">{"Detalles de Insumos"}</h4>
            {move || vm.error_for("lines").map(|e| view! { <p class="field-error">{e}</p> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Insumo"}</th>
                            <th class="table__header-cell">{"Cantidad"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            vm.draft
                                .get()
                                .lines
                                .iter()
                                .enumerate()
                                .map(|(index, line)| {
                                    let supply_value =
                                        line.supply_key.map(|k| k.as_string()).unwrap_or_default();
                                    let quantity_text = line
                                        .quantity
                                        .map(|q| q.to_string())
                                        .unwrap_or_default();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <select
                                                    on:change=move |ev| {
                                                        vm.draft.update(|d| {
                                                            d.set_line_supply(index, &event_target_value(&ev))
                                                        });
                                                        vm.clear_error(&format!("supply_{index}"));
                                                    }
                                                >
                                                    <option value="">{"Seleccione un insumo"}</option>
                                                    {supplies.with_value(|catalog| {
                                                        catalog
                                                            .iter()
                                                            .filter(|i| i.is_active)
                                                            .map(|i| {
                                                                let key = i.key.as_string();
                                                                let selected = key == supply_value;
                                                                view! {
                                                                    <option value=key selected=selected>
                                                                        {i.name.clone()}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()
                                                    })}
                                                </select>
                                                {vm.error_for(&format!("supply_{index}"))
                                                    .map(|e| view! { <p class="field-error">{e}</p> })}
                                            </td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    min="0"
                                                    prop:value=quantity_text
                                                    on:change=move |ev| {
                                                        vm.draft.update(|d| {
                                                            d.set_line_quantity(index, &event_target_value(&ev))
                                                        });
                                                        vm.clear_error(&format!("quantity_{index}"));
                                                    }
                                                />
                                                {vm.error_for(&format!("quantity_{index}"))
                                                    .map(|e| view! { <p class="field-error">{e}</p> })}
                                            </td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--danger button--icon"
                                                    on:click=move |_| {
                                                        vm.draft.update(|d| d.remove_line(index));
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="details-line-actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| vm.add_line_command(notify)
                >
                    {icon("plus")}
                    {"Agregar Insumo"}
                </button>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(notify, on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {"Guardar Cambios"}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

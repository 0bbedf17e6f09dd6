use super::draft::OrderDraft;
use super::view_model::OrderDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::enums::order_status::OrderStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn OrderDetails(
    order: Order,
    customers: Vec<Customer>,
    products: Vec<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();

    let draft = match OrderDraft::from_snapshot(&order, &customers, &products) {
        Ok(draft) => draft,
        Err(refusal) => {
            // Raise the dialog after this render pass; the editor never
            // appears for a non-editable order and control returns to the
            // caller once the warning is acknowledged.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                notify.warn_blocking("No se puede editar", refusal, move || {
                    on_cancel.run(());
                });
            });
            return ().into_any();
        }
    };

    let vm = OrderDetailsViewModel::new(draft);
    let products = StoredValue::new(products);

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>{format!("Editar {}", Order::element_name())}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="customer">{"Cliente"}</label>
                    <input
                        type="text"
                        id="customer"
                        prop:value=move || vm.draft.get().customer_name
                        disabled
                    />
                </div>

                <div class="form-group">
                    <label for="order_no">{"Número de Pedido"}</label>
                    <input
                        type="text"
                        id="order_no"
                        prop:value=move || vm.draft.get().order_no
                        disabled
                    />
                </div>

                <div class="form-group">
                    <label for="delivery_date">{"Fecha de Entrega"}</label>
                    <input
                        type="date"
                        id="delivery_date"
                        prop:value=move || vm.draft.get().delivery_date
                        on:change=move |ev| {
                            vm.draft.update(|d| d.set_delivery_date(&event_target_value(&ev)));
                        }
                    />
                    {move || vm.error_for("delivery_date").map(|e| view! { <p class="field-error">{e}</p> })}
                </div>

                <div class="form-group">
                    <label for="payment_date">{"Fecha de Pago"}</label>
                    <input
                        type="date"
                        id="payment_date"
                        prop:value=move || vm.draft.get().payment_date
                        on:change=move |ev| {
                            vm.draft.update(|d| d.set_payment_date(&event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="status">{"Estado del Pedido"}</label>
                    <select
                        id="status"
                        on:change=move |ev| {
                            if let Ok(code) = event_target_value(&ev).parse::<i32>() {
                                if let Some(status) = OrderStatus::from_code(code) {
                                    vm.draft.update(|d| d.set_status(status));
                                }
                            }
                        }
                    >
                        {move || {
                            let current = vm.draft.get().status;
                            OrderStatus::EDITABLE
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.code().to_string()
                                            selected={status == current}
                                        >
                                            {status.label()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <h4 class="details-subtitle">{"Agregar Productos"}</h4>
            {move || vm.error_for("lines").map(|e| view! { <p class="field-error">{e}</p> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Producto"}</th>
                            <th class="table__header-cell">{"Cantidad"}</th>
                            <th class="table__header-cell">{"Precio Unitario"}</th>
                            <th class="table__header-cell">{"Subtotal"}</th>
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
                                    let product_value =
                                        line.product_key.map(|k| k.as_string()).unwrap_or_default();
                                    let quantity_text =
                                        line.quantity.map(|q| q.to_string()).unwrap_or_default();
                                    let price_text = line.unit_price.to_string();
                                    let subtotal_text = format!("{:.2}", line.subtotal);
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <select
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        products.with_value(|catalog| {
                                                            vm.draft.update(|d| d.set_line_product(index, &value, catalog));
                                                        });
                                                    }
                                                >
                                                    <option value="">{"Seleccione un producto"}</option>
                                                    {products.with_value(|catalog| {
                                                        catalog
                                                            .iter()
                                                            .map(|p| {
                                                                let key = p.key.as_string();
                                                                let selected = key == product_value;
                                                                view! {
                                                                    <option value=key selected=selected>
                                                                        {p.name.clone()}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()
                                                    })}
                                                </select>
                                                {vm.error_for(&format!("product_{index}"))
                                                    .map(|e| view! { <p class="field-error">{e}</p> })}
                                            </td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    prop:value=quantity_text
                                                    on:change=move |ev| {
                                                        vm.draft.update(|d| {
                                                            d.set_line_quantity(index, &event_target_value(&ev))
                                                        });
                                                    }
                                                />
                                                {vm.error_for(&format!("quantity_{index}"))
                                                    .map(|e| view! { <p class="field-error">{e}</p> })}
                                            </td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    step="0.01"
                                                    prop:value=price_text
                                                    on:change=move |ev| {
                                                        vm.draft.update(|d| {
                                                            d.set_line_unit_price(index, &event_target_value(&ev))
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <input type="number" prop:value=subtotal_text readonly />
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
                    on:click=move |_| vm.draft.update(|d| d.add_line())
                >
                    {icon("plus")}
                    {"Agregar"}
                </button>
            </div>

            <div class="details-total">
                <h4>{move || format!("Total: ${:.2}", vm.draft.get().total)}</h4>
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
    .into_any()
}

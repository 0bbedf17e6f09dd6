pub mod state;

use self::state::create_state;
use crate::domain::a001_customer::api::fetch_customers;
use crate::domain::a002_product::api::fetch_products;
use crate::domain::a005_order::ui::details::OrderDetails;
use crate::shared::api_utils::get_json;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a005_order::aggregate::{Order, OrderKey};
use contracts::domain::common::AggregateRoot;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub key: OrderKey,
    pub order_no: String,
    pub customer: String,
    pub delivery_date: String,
    pub status: String,
    pub total: f64,
}

impl OrderRow {
    fn build(order: &Order, customers: &[Customer]) -> Self {
        Self {
            key: order.key,
            order_no: order.order_no.clone(),
            customer: Customer::name_of(customers, order.customer_key),
            delivery_date: format_date(&order.delivery_date),
            status: OrderStatus::label_for_code(order.status_code),
            total: order.total,
        }
    }
}

impl Sortable for OrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_no" => self.order_no.cmp(&other.order_no),
            "customer" => self
                .customer
                .to_lowercase()
                .cmp(&other.customer.to_lowercase()),
            "delivery_date" => self.delivery_date.cmp(&other.delivery_date),
            "status" => self.status.cmp(&other.status),
            "total" => self
                .total
                .partial_cmp(&other.total)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

async fn fetch_orders() -> Result<Vec<Order>, String> {
    get_json(&format!("/api/{}", Order::collection_name())).await
}

#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    // Snapshot being edited; the editor replaces the table while set.
    let (editing, set_editing) = signal::<Option<Order>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_orders().await {
                Ok(v) => {
                    set_orders.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            match fetch_customers().await {
                Ok(v) => set_customers.set(v),
                Err(e) => log::error!("error loading customers: {e}"),
            }
            match fetch_products().await {
                Ok(v) => set_products.set(v),
                Err(e) => log::error!("error loading products: {e}"),
            }
        });
    };

    let handle_edit = move |key: OrderKey| {
        // The snapshot goes to the editor as-is; the status guard lives in
        // the draft construction, not here.
        let snapshot = orders.get().iter().find(|o| o.key == key).cloned();
        if let Some(order) = snapshot {
            set_editing.set(Some(order));
        }
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
        let catalog = customers.get();
        let mut rows: Vec<OrderRow> = orders
            .get()
            .iter()
            .map(|order| OrderRow::build(order, &catalog))
            .collect();
        let s = state.get();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    fetch();

    move || match editing.get() {
        Some(order) => view! {
            <OrderDetails
                order=order
                customers=customers.get_untracked()
                products=products.get_untracked()
                on_saved=Callback::new(move |_| {
                    set_editing.set(None);
                    fetch();
                })
                on_cancel=Callback::new(move |_| set_editing.set(None))
            />
        }
        .into_any(),
        None => view! {
            <div class="content">
                <div class="header">
                    <h2>{Order::list_name()}</h2>
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
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("order_no")>
                                    "Número"
                                    <span class=move || get_sort_class(&state.get().sort_field, "order_no")>
                                        {move || get_sort_indicator(&state.get().sort_field, "order_no", state.get().sort_ascending)}
                                    </span>
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("customer")>
                                    "Cliente"
                                    <span class=move || get_sort_class(&state.get().sort_field, "customer")>
                                        {move || get_sort_indicator(&state.get().sort_field, "customer", state.get().sort_ascending)}
                                    </span>
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("delivery_date")>
                                    "Fecha de Entrega"
                                    <span class=move || get_sort_class(&state.get().sort_field, "delivery_date")>
                                        {move || get_sort_indicator(&state.get().sort_field, "delivery_date", state.get().sort_ascending)}
                                    </span>
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("status")>
                                    "Estado"
                                    <span class=move || get_sort_class(&state.get().sort_field, "status")>
                                        {move || get_sort_indicator(&state.get().sort_field, "status", state.get().sort_ascending)}
                                    </span>
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("total")>
                                    "Total"
                                    <span class=move || get_sort_class(&state.get().sort_field, "total")>
                                        {move || get_sort_indicator(&state.get().sort_field, "total", state.get().sort_ascending)}
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
                                            <tr class="table__row" on:click=move |_| handle_edit(key)>
                                                <td class="table__cell">{row.order_no}</td>
                                                <td class="table__cell">{row.customer}</td>
                                                <td class="table__cell">{row.delivery_date}</td>
                                                <td class="table__cell">{row.status}</td>
                                                <td class="table__cell">{format!("${:.2}", row.total)}</td>
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
        .into_any(),
    }
}

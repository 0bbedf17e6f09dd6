use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct MenuItem {
    page: ActivePage,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            page: ActivePage::Orders,
            label: "Pedidos",
            icon: "orders",
        },
        MenuItem {
            page: ActivePage::SpecSheets,
            label: "Fichas técnicas",
            icon: "spec-sheets",
        },
        MenuItem {
            page: ActivePage::PurchaseReport,
            label: "Reporte de compras",
            icon: "report",
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">{"Panel de administración"}</div>
            <nav class="sidebar__nav">
                {menu_items()
                    .into_iter()
                    .map(|item| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || ctx.active_page.get() == item.page
                                on:click=move |_| ctx.open(item.page)
                            >
                                {icon(item.icon)}
                                <span class="sidebar__label">{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

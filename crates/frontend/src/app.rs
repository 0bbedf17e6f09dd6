use crate::domain::a004_spec_sheet::ui::list::SpecSheetList;
use crate::domain::a005_order::ui::list::OrderList;
use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::layout::Shell;
use crate::projections::p900_purchase_report::ui::PurchaseReportPage;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notify::{NotifyHost, NotifyService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state plus the two injected services (modal stack and
    // notifier) are provided once, here, and reached via context.
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(NotifyService::new());

    view! {
        <Shell center=|| view! { <CenterContent /> }.into_any() />
        <ModalHost />
        <NotifyHost />
    }
}

#[component]
fn CenterContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    move || match ctx.active_page.get() {
        ActivePage::Orders => view! { <OrderList /> }.into_any(),
        ActivePage::SpecSheets => view! { <SpecSheetList /> }.into_any(),
        ActivePage::PurchaseReport => view! { <PurchaseReportPage /> }.into_any(),
    }
}

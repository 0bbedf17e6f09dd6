pub mod global_context;
pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell: navigation sidebar on the left, the active page in
/// the center.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + Send + 'static,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <Sidebar />
                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}

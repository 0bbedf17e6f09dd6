use leptos::prelude::*;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Orders,
    SpecSheets,
    PurchaseReport,
}

/// App-wide navigation state, provided via context from `App`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<ActivePage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(ActivePage::Orders),
        }
    }

    pub fn open(&self, page: ActivePage) {
        self.active_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

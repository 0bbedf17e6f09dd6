use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrderListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            sort_field: "order_no".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

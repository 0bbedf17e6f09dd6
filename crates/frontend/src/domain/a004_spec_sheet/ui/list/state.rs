use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SpecSheetListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SpecSheetListState {
    fn default() -> Self {
        Self {
            sort_field: "product".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<SpecSheetListState> {
    RwSignal::new(SpecSheetListState::default())
}

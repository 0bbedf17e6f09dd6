use super::draft::OrderDraft;
use super::model;
use crate::shared::notify::NotifyService;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// ViewModel for the order editing form
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub draft: RwSignal<OrderDraft>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
}

impl OrderDetailsViewModel {
    pub fn new(draft: OrderDraft) -> Self {
        Self {
            draft: RwSignal::new(draft),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.get().get(field).cloned()
    }

    /// Validate and submit the draft.
    ///
    /// Validation failure populates the error map and notifies without any
    /// network call. Submission failure notifies generically and keeps the
    /// draft for retry; success notifies and hands control back through
    /// `on_saved`.
    pub fn save_command(&self, notify: NotifyService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let current = self.draft.get_untracked();
        let validation = current.validate();
        if !validation.is_empty() {
            self.errors.set(validation);
            notify.error("Por favor, complete todos los campos requeridos.");
            return;
        }
        self.errors.set(BTreeMap::new());

        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::update_order(current.key, &current.to_update()).await {
                Ok(()) => {
                    notify.success("El pedido ha sido actualizado correctamente.");
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("error updating order: {e}");
                    notify.error("Hubo un problema al actualizar el pedido.");
                }
            }
            saving.set(false);
        });
    }
}

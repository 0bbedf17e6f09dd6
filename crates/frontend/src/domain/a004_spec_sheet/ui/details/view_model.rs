use super::draft::SpecSheetDraft;
use super::model;
use crate::shared::notify::NotifyService;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// ViewModel for the spec sheet editing form
#[derive(Clone, Copy)]
pub struct SpecSheetDetailsViewModel {
    pub draft: RwSignal<SpecSheetDraft>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub saving: RwSignal<bool>,
}

impl SpecSheetDetailsViewModel {
    pub fn new(draft: SpecSheetDraft) -> Self {
        Self {
            draft: RwSignal::new(draft),
            errors: RwSignal::new(BTreeMap::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.get().get(field).cloned()
    }

    /// Editing a field clears its own error.
    pub fn clear_error(&self, field: &str) {
        self.errors.update(|e| {
            e.remove(field);
        });
    }

    /// Append a line; duplicates in the current lines refuse the append
    /// with a toast.
    pub fn add_line_command(&self, notify: NotifyService) {
        let result = self
            .draft
            .try_update(|d| d.add_line())
            .unwrap_or_else(|| Err("draft signal disposed".to_string()));
        if let Err(message) = result {
            notify.error(message);
        }
    }

    /// Validate and submit the draft. Validation failure only populates
    /// the error map. A failed request keeps the draft and surfaces either
    /// the backend's field errors or a general message inside the form.
    pub fn save_command(&self, notify: NotifyService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let current = self.draft.get_untracked();
        let validation = current.validate();
        if !validation.is_empty() {
            self.errors.set(validation);
            return;
        }
        self.errors.set(BTreeMap::new());

        let errors = self.errors;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::update_spec_sheet(current.key, &current.to_update()).await {
                Ok(()) => {
                    notify.success("La ficha técnica ha sido actualizada correctamente.");
                    on_saved.run(());
                }
                Err(body) => {
                    log::error!("error saving spec sheet: {body}");
                    match model::field_errors_from(&body) {
                        Some(field_errors) => errors.set(field_errors),
                        None => errors.update(|e| {
                            e.insert(
                                "general".to_string(),
                                "Hubo un problema al guardar la ficha técnica.".to_string(),
                            );
                        }),
                    }
                }
            }
            saving.set(false);
        });
    }
}

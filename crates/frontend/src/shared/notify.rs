//! Injected notification capability.
//!
//! Forms receive this service via context instead of talking to a global
//! alert singleton: transient success/error toasts plus one blocking
//! warning dialog whose accept button runs a caller-supplied action.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

const TOAST_VISIBLE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Clone)]
struct WarningDialog {
    title: String,
    text: String,
    on_accept: Arc<dyn Fn() + Send + Sync>,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    toasts: RwSignal<Vec<Toast>>,
    warning: RwSignal<Option<WarningDialog>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            warning: RwSignal::new(None),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        // Auto-dismiss after the visibility window.
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    /// Raise the blocking warning dialog. `on_accept` runs when the user
    /// confirms; until then the dialog stays on top of everything.
    pub fn warn_blocking(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        on_accept: impl Fn() + Send + Sync + 'static,
    ) {
        self.warning.set(Some(WarningDialog {
            title: title.into(),
            text: text.into(),
            on_accept: Arc::new(on_accept),
        }));
    }

    fn accept_warning(&self) {
        let dialog = self.warning.get_untracked();
        self.warning.set(None);
        if let Some(dialog) = dialog {
            (dialog.on_accept)();
        }
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not found in context")
}

/// Renders the toast stack and, when raised, the warning dialog.
#[component]
pub fn NotifyHost() -> impl IntoView {
    let svc = use_notify();

    view! {
        <div class="toast-stack">
            {move || {
                svc.toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! { <div class=kind_class>{toast.message}</div> }
                    })
                    .collect_view()
            }}
        </div>
        {move || {
            svc.warning.get().map(|dialog| {
                view! {
                    <div class="warning-overlay">
                        <div class="warning-dialog">
                            <h3 class="warning-dialog__title">{dialog.title.clone()}</h3>
                            <p class="warning-dialog__text">{dialog.text.clone()}</p>
                            <div class="warning-dialog__actions">
                                <button
                                    class="button button--primary"
                                    on:click=move |_| svc.accept_warning()
                                >
                                    {"Aceptar"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}

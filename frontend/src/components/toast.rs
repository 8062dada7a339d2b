use crate::state::toast::{use_toasts, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue();
    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class={format!("border rounded-md px-4 py-3 shadow flex items-start justify-between gap-3 {}", toast_class(toast.kind))}
                            role={if toast.kind == ToastKind::Error { "alert" } else { "status" }}
                        >
                            <span class="text-sm">{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-xs opacity-75 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

use leptos::ev::KeyboardEvent;
use leptos::*;

/// Centred dialog frame for create/edit forms. Escape and the backdrop close it.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let panel_class = if wide {
        "relative z-[61] w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    } else {
        "relative z-[61] w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=panel_class
                    role="dialog"
                    aria-modal="true"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            on_close.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_children_only_when_open() {
        let open = render_to_string(move || {
            view! {
                <Modal is_open=Signal::derive(|| true) title="New rate" on_close=Callback::new(|_| {})>
                    <p>"body"</p>
                </Modal>
            }
        });
        assert!(open.contains("New rate"));
        assert!(open.contains("body"));

        let closed = render_to_string(move || {
            view! {
                <Modal is_open=Signal::derive(|| false) title="New rate" on_close=Callback::new(|_| {})>
                    <p>"body"</p>
                </Modal>
            }
        });
        assert!(!closed.contains("body"));
    }
}

use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    error::{MessageBanner, MessageState},
    forms::TextField,
    modal::Modal,
};
use crate::models::settings::{ApiKey, CreatedApiKey};
use crate::pages::settings::utils::ApiKeyFormState;
use crate::utils::format::format_datetime;
use leptos::ev::SubmitEvent;
use leptos::*;

const HEADER_CELL: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

fn display_name(key: &ApiKey) -> String {
    match key.name_ar.as_deref() {
        Some(name_ar) if !name_ar.is_empty() => format!("{} / {}", key.name, name_ar),
        _ => key.name.clone(),
    }
}

#[component]
pub fn ApiKeyList(
    keys: Signal<Vec<ApiKey>>,
    on_create: Callback<()>,
    on_revoke: Callback<ApiKey>,
) -> impl IntoView {
    view! {
        <section class="space-y-4 rounded-lg bg-surface-elevated p-6 shadow">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-lg font-semibold text-fg">"API keys"</h2>
                    <p class="text-sm text-fg-muted">"Keys let integrations call the firm's API."</p>
                </div>
                <Button on_click=on_create>"Create API key"</Button>
            </div>
            <Show
                when=move || keys.with(|list| !list.is_empty())
                fallback=|| view! { <EmptyState title="No API keys yet" /> }
            >
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=HEADER_CELL>"Name"</th>
                            <th class=HEADER_CELL>"Key"</th>
                            <th class=HEADER_CELL>"Created"</th>
                            <th class=HEADER_CELL>"Last used"</th>
                            <th class=HEADER_CELL>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || keys.get()
                            key=|key| key.id.clone()
                            children=move |key: ApiKey| {
                                let name = display_name(&key);
                                let masked = key.masked_key.clone();
                                let created = format_datetime(key.created_at.as_ref());
                                let last_used = key
                                    .last_used
                                    .as_ref()
                                    .map(|at| format_datetime(Some(at)))
                                    .unwrap_or_else(|| "Never".to_string());
                                view! {
                                    <tr>
                                        <td class=CELL>{name}</td>
                                        <td class=CELL><code>{masked}</code></td>
                                        <td class=CELL>{created}</td>
                                        <td class=CELL>{last_used}</td>
                                        <td class=CELL>
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                on_click=Callback::new(move |_| on_revoke.call(key.clone()))
                                            >
                                                "Revoke"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
pub fn ApiKeyDialog(
    form: ApiKeyFormState,
    open: RwSignal<Option<()>>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || open.with(Option::is_some));
    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    view! {
        <Modal is_open=is_open title="Create API key" on_close=on_close>
            <form class="space-y-4" on:submit=on_form_submit>
                <MessageBanner state=message />
                <TextField label="Name" value=form.name_signal() required=true />
                <TextField label="Name (Arabic)" value=form.name_ar_signal() />
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="rounded-md border border-border px-4 py-2 text-sm"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        "Create"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Shows a new key's secret until dismissed.
#[component]
pub fn RevealedKeyNotice(
    revealed: RwSignal<Option<CreatedApiKey>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        revealed.get().map(|created| {
            view! {
                <div
                    class="rounded-lg border border-status-warning-border bg-status-warning-bg p-4 text-sm text-status-warning-text"
                    role="status"
                >
                    <p class="font-semibold">
                        {format!("Copy the key for \"{}\" now. It will not be shown again.", created.api_key.name)}
                    </p>
                    <code class="mt-2 block break-all rounded bg-surface-elevated px-3 py-2 text-fg">
                        {created.key}
                    </code>
                    <button
                        type="button"
                        class="mt-3 text-sm font-semibold underline"
                        on:click=move |_| on_dismiss.call(())
                    >
                        "I have copied it"
                    </button>
                </div>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    fn key(value: serde_json::Value) -> ApiKey {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn list_shows_masked_keys_and_never_used() {
        let html = render_to_string(|| {
            let keys = Signal::derive(|| {
                vec![key(json!({
                    "id": "k1", "name": "Zapier", "nameAr": "زابير", "maskedKey": "lx_****abcd"
                }))]
            });
            view! {
                <ApiKeyList keys=keys on_create=Callback::new(|_| {}) on_revoke=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("lx_****abcd"));
        assert!(html.contains("Zapier / زابير"));
        assert!(html.contains("Never"));
        assert!(html.contains("Revoke"));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(|| {
            view! {
                <ApiKeyList
                    keys=Signal::derive(Vec::new)
                    on_create=Callback::new(|_| {})
                    on_revoke=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No API keys yet"));
    }

    #[test]
    fn revealed_key_shows_secret_until_dismissed() {
        let html = render_to_string(|| {
            let created: CreatedApiKey = serde_json::from_value(json!({
                "id": "k2", "name": "Billing export", "key": "lx_live_secret"
            }))
            .unwrap();
            let revealed = create_rw_signal(Some(created));
            view! { <RevealedKeyNotice revealed=revealed on_dismiss=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("lx_live_secret"));
        assert!(html.contains("It will not be shown again."));
    }
}

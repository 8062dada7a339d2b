use leptos::*;

pub fn selection_label(count: usize) -> String {
    match count {
        1 => "1 item selected".to_string(),
        n => format!("{} items selected", n),
    }
}

/// Shown only while at least one row is selected.
#[component]
pub fn BulkActionBar(
    #[prop(into)] count: Signal<usize>,
    on_delete: Callback<()>,
    on_clear: Callback<()>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 }>
            <div
                class="flex items-center justify-between rounded-md border border-border bg-surface-muted px-4 py-2"
                role="region"
                aria-label="Bulk actions"
            >
                <span class="text-sm font-medium text-fg" data-testid="selection-count">
                    {move || selection_label(count.get())}
                </span>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="text-sm text-fg-muted hover:text-fg px-3 py-1"
                        on:click=move |_| on_clear.call(())
                    >
                        "Clear selection"
                    </button>
                    <button
                        type="button"
                        class="rounded-md bg-action-danger-bg text-action-danger-text px-3 py-1 text-sm font-semibold disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| on_delete.call(())
                    >
                        "Delete selected"
                    </button>
                </div>
            </div>
        </Show>
    }
}

use leptos::*;

/// Tab strip; the caller owns the active signal and keeps every tab's data
/// alive while switching.
#[component]
pub fn Tabs<T>(tabs: Vec<(T, &'static str)>, active: RwSignal<T>) -> impl IntoView
where
    T: Copy + PartialEq + 'static,
{
    view! {
        <div class="border-b border-border" role="tablist">
            <nav class="-mb-px flex gap-6">
                {tabs
                    .into_iter()
                    .map(|(tab, label)| {
                        let is_active = move || active.get() == tab;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || is_active().to_string()
                                class=move || {
                                    if is_active() {
                                        "border-b-2 border-action-primary-bg px-1 py-3 text-sm font-semibold text-fg"
                                    } else {
                                        "border-b-2 border-transparent px-1 py-3 text-sm text-fg-muted hover:text-fg"
                                    }
                                }
                                on:click=move |_| active.set(tab)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}

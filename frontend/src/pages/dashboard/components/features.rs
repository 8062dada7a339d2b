use crate::pages::dashboard::utils::visible_cards;
use leptos::*;

#[component]
pub fn FeatureGrid(is_admin: Signal<bool>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
            {move || {
                visible_cards(is_admin.get())
                    .into_iter()
                    .map(|(href, title, description)| {
                        view! {
                            <a
                                href=href
                                class="block rounded-lg border border-border bg-surface-elevated p-5 shadow-sm hover:border-action-primary-border"
                            >
                                <h3 class="text-base font-semibold text-fg">{title}</h3>
                                <p class="mt-1 text-sm text-fg-muted">{description}</p>
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

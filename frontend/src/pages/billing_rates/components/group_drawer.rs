use crate::api::ApiError;
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::models::billing::{BillingRate, RateGroup};
use crate::utils::format::format_money;
use leptos::*;

/// Member rows as `(id, display name)`. Bare id references are resolved
/// against the loaded rate list when possible.
pub fn member_rows(group: &RateGroup, rates: &[BillingRate]) -> Vec<(String, String)> {
    group
        .rates
        .iter()
        .map(|member| {
            let name = member
                .rate()
                .or_else(|| rates.iter().find(|rate| rate.id == member.id()))
                .map(|rate| {
                    format!(
                        "{} ({})",
                        rate.name,
                        format_money(rate.amount, rate.currency.as_str())
                    )
                })
                .unwrap_or_else(|| member.id().to_string());
            (member.id().to_string(), name)
        })
        .collect()
}

/// Active rates not yet in the group.
pub fn addable_rates(group: &RateGroup, rates: &[BillingRate]) -> Vec<BillingRate> {
    rates
        .iter()
        .filter(|rate| rate.is_active && !group.contains_rate(&rate.id))
        .cloned()
        .collect()
}

#[component]
pub fn GroupDrawer(
    detail: Resource<(Option<String>, u32), Result<Option<RateGroup>, ApiError>>,
    is_open: Signal<bool>,
    rates: Signal<Vec<BillingRate>>,
    #[prop(into)] pending: Signal<bool>,
    on_add: Callback<String>,
    on_remove: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected_rate = create_rw_signal(String::new());

    view! {
        <Show when=move || is_open.get()>
            <aside
                class="fixed inset-y-0 right-0 z-50 w-full max-w-md overflow-y-auto border-l border-border bg-surface-elevated p-6 shadow-xl space-y-4"
                aria-label="Rate group details"
            >
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-fg">"Group rates"</h2>
                    <button
                        type="button"
                        class="text-sm text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        "Close"
                    </button>
                </div>
                <Transition fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        detail
                            .get()
                            .map(|result| match result {
                                Ok(Some(group)) => {
                                    let members = rates.with(|all| member_rows(&group, all));
                                    let addable = rates.with(|all| addable_rates(&group, all));
                                    view! {
                                        <div class="space-y-4">
                                            <div>
                                                <p class="font-medium text-fg">{group.name.clone()}</p>
                                                <p class="text-sm text-fg-muted" dir="rtl">{group.name_ar.clone()}</p>
                                            </div>
                                            {if members.is_empty() {
                                                view! { <p class="text-sm text-fg-muted">"No rates in this group."</p> }
                                                    .into_view()
                                            } else {
                                                view! {
                                                    <ul class="divide-y divide-border">
                                                        {members
                                                            .into_iter()
                                                            .map(|(id, name)| {
                                                                view! {
                                                                    <li class="flex items-center justify-between py-2 text-sm">
                                                                        <span>{name}</span>
                                                                        <button
                                                                            type="button"
                                                                            class="text-status-error-text hover:underline disabled:opacity-50"
                                                                            disabled=move || pending.get()
                                                                            on:click=move |_| on_remove.call(id.clone())
                                                                        >
                                                                            "Remove"
                                                                        </button>
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                }
                                                    .into_view()
                                            }}
                                            <div class="flex gap-2">
                                                <select
                                                    class="flex-1 rounded-md border border-form-control-border bg-form-control-bg p-2 text-sm"
                                                    aria-label="Rate to add"
                                                    prop:value=move || selected_rate.get()
                                                    on:change=move |ev| selected_rate.set(event_target_value(&ev))
                                                >
                                                    <option value="">"Select a rate"</option>
                                                    {addable
                                                        .into_iter()
                                                        .map(|rate| view! { <option value=rate.id>{rate.name}</option> })
                                                        .collect_view()}
                                                </select>
                                                <button
                                                    type="button"
                                                    class="rounded-md bg-action-primary-bg px-3 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                                                    disabled=move || pending.get() || selected_rate.with(String::is_empty)
                                                    on:click=move |_| {
                                                        on_add.call(selected_rate.get_untracked());
                                                        selected_rate.set(String::new());
                                                    }
                                                >
                                                    "Add"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                        .into_view()
                                }
                                Ok(None) => ().into_view(),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })
                    }}
                </Transition>
            </aside>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rate(id: &str, active: bool) -> BillingRate {
        serde_json::from_value(json!({
            "_id": id, "name": format!("Rate {}", id), "type": "hourly",
            "category": "research", "amount": 300, "currency": "USD", "isActive": active
        }))
        .unwrap()
    }

    #[test]
    fn members_resolve_bare_ids_against_loaded_rates() {
        let group: RateGroup = serde_json::from_value(json!({
            "_id": "g1", "name": "Research", "rates": ["r1", "missing"]
        }))
        .unwrap();
        let rows = member_rows(&group, &[rate("r1", true)]);
        assert_eq!(rows[0], ("r1".to_string(), "Rate r1 (300.00 USD)".to_string()));
        assert_eq!(rows[1], ("missing".to_string(), "missing".to_string()));
    }

    #[test]
    fn addable_rates_skip_members_and_inactive() {
        let group: RateGroup =
            serde_json::from_value(json!({ "_id": "g1", "name": "Research", "rates": ["r1"] }))
                .unwrap();
        let rates = vec![rate("r1", true), rate("r2", true), rate("r3", false)];
        let ids: Vec<String> = addable_rates(&group, &rates)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["r2".to_string()]);
    }
}

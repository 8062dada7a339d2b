use crate::components::{common::Badge, empty_state::EmptyState};
use crate::models::billing::RateGroup;
use crate::utils::format::format_percent;
use leptos::*;

const HEADER_CELL: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

fn targets_label(group: &RateGroup) -> String {
    if group.applicable_to.is_empty() {
        return "-".to_string();
    }
    group
        .applicable_to
        .iter()
        .map(|target| target.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn GroupTable(
    groups: Signal<Vec<RateGroup>>,
    on_open: Callback<RateGroup>,
    on_edit: Callback<RateGroup>,
    on_duplicate: Callback<RateGroup>,
    on_delete: Callback<RateGroup>,
) -> impl IntoView {
    view! {
        <Show
            when=move || groups.with(|list| !list.is_empty())
            fallback=|| {
                view! {
                    <EmptyState
                        title="No rate groups yet"
                        description="Groups bundle rates with an optional discount for clients, cases or services."
                    />
                }
            }
        >
            <div class="overflow-x-auto rounded-lg bg-surface-elevated shadow">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=HEADER_CELL>"Group"</th>
                            <th class=HEADER_CELL>"Applies to"</th>
                            <th class=HEADER_CELL>"Discount"</th>
                            <th class=HEADER_CELL>"Rates"</th>
                            <th class=HEADER_CELL>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || groups.get()
                            key=|group| (group.id.clone(), group.rates.len(), group.name.clone())
                            children=move |group: RateGroup| {
                                let targets = targets_label(&group);
                                let discount = group
                                    .discount
                                    .map(format_percent)
                                    .unwrap_or_else(|| "-".to_string());
                                let rate_count = group.rates.len();
                                let is_default = group.is_default;
                                let swatch = format!("background-color: {}", group.color);
                                let group = store_value(group);
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class=CELL>
                                            <button
                                                type="button"
                                                class="flex items-center gap-2 font-medium hover:underline"
                                                on:click=move |_| on_open.call(group.get_value())
                                            >
                                                <span class="inline-block h-3 w-3 rounded-full" style=swatch></span>
                                                {group.with_value(|g| g.name.clone())}
                                            </button>
                                            {is_default.then(|| view! { <Badge label="Default" /> })}
                                        </td>
                                        <td class=CELL>{targets}</td>
                                        <td class=CELL>{discount}</td>
                                        <td class=CELL>{rate_count}</td>
                                        <td class=CELL>
                                            <div class="flex gap-3">
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_edit.call(group.get_value())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-fg-muted hover:underline"
                                                    on:click=move |_| on_duplicate.call(group.get_value())
                                                >
                                                    "Duplicate"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-status-error-text hover:underline"
                                                    on:click=move |_| on_delete.call(group.get_value())
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn group_row_lists_targets_discount_and_count() {
        let group: RateGroup = serde_json::from_value(json!({
            "_id": "g1", "name": "Corporate", "discount": 12.5,
            "applicableTo": ["clients", "cases"], "rates": ["r1", "r2"], "isDefault": true
        }))
        .unwrap();
        let html = render_to_string(move || {
            view! {
                <GroupTable
                    groups=Signal::derive(move || vec![group.clone()])
                    on_open=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_duplicate=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Clients, Cases"));
        assert!(html.contains("12.5%"));
        assert!(html.contains("Default"));
        assert!(html.contains("Duplicate"));
    }
}

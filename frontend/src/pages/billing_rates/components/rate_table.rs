use crate::components::{
    common::Badge,
    empty_state::EmptyState,
    table::{RowCheckbox, SelectAllCheckbox},
};
use crate::models::billing::BillingRate;
use crate::utils::{format::format_money, selection::RowSelection};
use leptos::*;

const HEADER_CELL: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

fn active_badge(is_active: bool) -> (&'static str, &'static str) {
    if is_active {
        ("Active", "bg-status-success-bg text-status-success-text")
    } else {
        ("Inactive", "bg-surface-muted text-fg-muted")
    }
}

#[component]
pub fn RateTable(
    rates: Signal<Vec<BillingRate>>,
    selection: RwSignal<RowSelection>,
    on_edit: Callback<BillingRate>,
    on_toggle_active: Callback<BillingRate>,
    on_delete: Callback<BillingRate>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let visible_ids: Signal<Vec<String>> =
        Signal::derive(move || rates.with(|list| list.iter().map(|r| r.id.clone()).collect()));

    view! {
        <Show
            when=move || rates.with(|list| !list.is_empty())
            fallback=|| {
                view! {
                    <EmptyState
                        title="No billing rates yet"
                        description="Create a rate to start pricing consultations, court days and other work."
                    />
                }
            }
        >
            <div class="overflow-x-auto rounded-lg bg-surface-elevated shadow">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=HEADER_CELL>
                                <SelectAllCheckbox selection=selection visible_ids=visible_ids />
                            </th>
                            <th class=HEADER_CELL>"Name"</th>
                            <th class=HEADER_CELL>"Type"</th>
                            <th class=HEADER_CELL>"Category"</th>
                            <th class=HEADER_CELL>"Amount"</th>
                            <th class=HEADER_CELL>"Status"</th>
                            <th class=HEADER_CELL>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || rates.get()
                            key=|rate| (rate.id.clone(), rate.is_active, rate.amount.to_bits())
                            children=move |rate: BillingRate| {
                                let (status_label, status_class) = active_badge(rate.is_active);
                                let toggle_label = if rate.is_active { "Deactivate" } else { "Activate" };
                                let amount = format_money(rate.amount, rate.currency.as_str());
                                let unit = rate.unit.clone().map(|unit| format!(" / {}", unit));
                                let rate = store_value(rate);
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class=CELL>
                                            <RowCheckbox selection=selection id=rate.with_value(|r| r.id.clone()) />
                                        </td>
                                        <td class=CELL>
                                            <div class="font-medium">{rate.with_value(|r| r.name.clone())}</div>
                                            <div class="text-xs text-fg-muted" dir="rtl">
                                                {rate.with_value(|r| r.name_ar.clone())}
                                            </div>
                                        </td>
                                        <td class=CELL>{rate.with_value(|r| r.rate_type.label())}</td>
                                        <td class=CELL>{rate.with_value(|r| r.category.label())}</td>
                                        <td class=CELL>{amount}{unit}</td>
                                        <td class=CELL>
                                            <Badge label=status_label class=status_class.to_string() />
                                        </td>
                                        <td class=CELL>
                                            <div class="flex gap-3">
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_edit.call(rate.get_value())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-fg-muted hover:underline disabled:opacity-50"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_toggle_active.call(rate.get_value())
                                                >
                                                    {toggle_label}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-status-error-text hover:underline"
                                                    on:click=move |_| on_delete.call(rate.get_value())
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

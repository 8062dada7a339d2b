use crate::components::{
    common::Badge,
    empty_state::EmptyState,
    table::{RowCheckbox, SelectAllCheckbox},
};
use crate::models::lead::Lead;
use crate::pages::leads::utils::status_badge_class;
use crate::utils::{
    format::{format_date, format_number},
    selection::RowSelection,
};
use leptos::*;

const HEADER_CELL: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

fn contact_line(lead: &Lead) -> String {
    [lead.email.as_deref(), lead.phone.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
pub fn LeadTable(
    leads: Signal<Vec<Lead>>,
    selection: RwSignal<RowSelection>,
    on_edit: Callback<Lead>,
    on_delete: Callback<Lead>,
) -> impl IntoView {
    let visible_ids: Signal<Vec<String>> =
        Signal::derive(move || leads.with(|list| list.iter().map(|l| l.id.clone()).collect()));

    view! {
        <Show
            when=move || leads.with(|list| !list.is_empty())
            fallback=|| {
                view! {
                    <EmptyState
                        title="No leads found"
                        description="Capture enquiries from the website, referrals and events here."
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
                            <th class=HEADER_CELL>"Lead"</th>
                            <th class=HEADER_CELL>"Company"</th>
                            <th class=HEADER_CELL>"Source"</th>
                            <th class=HEADER_CELL>"Status"</th>
                            <th class=HEADER_CELL>"Est. value"</th>
                            <th class=HEADER_CELL>"Expected close"</th>
                            <th class=HEADER_CELL>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || leads.get()
                            key=|lead| (lead.id.clone(), lead.status)
                            children=move |lead: Lead| {
                                let contact = contact_line(&lead);
                                let value = lead.estimated_value.map(format_number).unwrap_or_default();
                                let close = format_date(lead.expected_close_date.as_ref());
                                let status = lead.status;
                                let lead = store_value(lead);
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class=CELL>
                                            <RowCheckbox selection=selection id=lead.with_value(|l| l.id.clone()) />
                                        </td>
                                        <td class=CELL>
                                            <div class="font-medium">{lead.with_value(Lead::full_name)}</div>
                                            <div class="text-xs text-fg-muted">{contact}</div>
                                        </td>
                                        <td class=CELL>{lead.with_value(|l| l.company.clone().unwrap_or_default())}</td>
                                        <td class=CELL>{lead.with_value(|l| l.source.label())}</td>
                                        <td class=CELL>
                                            <Badge label=status.label() class=status_badge_class(status).to_string() />
                                        </td>
                                        <td class=CELL>{value}</td>
                                        <td class=CELL>{close}</td>
                                        <td class=CELL>
                                            <div class="flex gap-3">
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_edit.call(lead.get_value())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-status-error-text hover:underline"
                                                    on:click=move |_| on_delete.call(lead.get_value())
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

    fn render(leads: Vec<Lead>) -> String {
        render_to_string(move || {
            let leads = Signal::derive(move || leads.clone());
            view! {
                <LeadTable
                    leads=leads
                    selection=create_rw_signal(RowSelection::default())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn lists_lead_with_contact_and_value() {
        let lead: Lead = serde_json::from_value(json!({
            "_id": "l1", "firstName": "Faisal", "lastName": "Al-Qahtani",
            "email": "faisal@example.com", "phone": "+966501234567", "company": "Qahtani Trading",
            "source": "social_media", "status": "negotiation", "estimatedValue": 25000
        }))
        .unwrap();
        let html = render(vec![lead]);
        assert!(html.contains("Faisal Al-Qahtani"));
        assert!(html.contains("faisal@example.com · +966501234567"));
        assert!(html.contains("Social media"));
        assert!(html.contains("Negotiation"));
        assert!(html.contains("25,000"));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        assert!(render(Vec::new()).contains("No leads found"));
    }
}

use crate::components::{
    common::Badge,
    empty_state::EmptyState,
    table::{RowCheckbox, SelectAllCheckbox},
};
use crate::models::staff::StaffMember;
use crate::pages::staff::utils::status_badge_class;
use crate::utils::{format::format_date, selection::RowSelection};
use leptos::*;

const HEADER_CELL: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

#[component]
pub fn StaffTable(
    staff: Signal<Vec<StaffMember>>,
    selection: RwSignal<RowSelection>,
    on_edit: Callback<StaffMember>,
    on_depart: Callback<StaffMember>,
    on_reinstate: Callback<StaffMember>,
    on_delete: Callback<StaffMember>,
) -> impl IntoView {
    let visible_ids: Signal<Vec<String>> =
        Signal::derive(move || staff.with(|list| list.iter().map(|m| m.id.clone()).collect()));

    view! {
        <Show
            when=move || staff.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No staff members found" /> }
        >
            <div class="overflow-x-auto rounded-lg bg-surface-elevated shadow">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=HEADER_CELL>
                                <SelectAllCheckbox selection=selection visible_ids=visible_ids />
                            </th>
                            <th class=HEADER_CELL>"Name"</th>
                            <th class=HEADER_CELL>"Email"</th>
                            <th class=HEADER_CELL>"Role"</th>
                            <th class=HEADER_CELL>"Status"</th>
                            <th class=HEADER_CELL>"Specialization"</th>
                            <th class=HEADER_CELL>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || staff.get()
                            key=|member| (member.id.clone(), member.status, member.role)
                            children=move |member: StaffMember| {
                                let departed = member.is_departed();
                                let status = member.status;
                                let departed_note = member.departed_at.as_ref().map(|date| {
                                    format!("Left {}", format_date(Some(date)))
                                });
                                let member = store_value(member);
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class=CELL>
                                            <RowCheckbox selection=selection id=member.with_value(|m| m.id.clone()) />
                                        </td>
                                        <td class=CELL>
                                            <div class="font-medium">{member.with_value(StaffMember::full_name)}</div>
                                            {departed_note.map(|note| view! { <div class="text-xs text-fg-muted">{note}</div> })}
                                        </td>
                                        <td class=CELL>{member.with_value(|m| m.email.clone())}</td>
                                        <td class=CELL>{member.with_value(|m| m.role.label())}</td>
                                        <td class=CELL>
                                            <Badge label=status.label() class=status_badge_class(status).to_string() />
                                        </td>
                                        <td class=CELL>
                                            {member.with_value(|m| m.specialization.clone().unwrap_or_default())}
                                        </td>
                                        <td class=CELL>
                                            <div class="flex gap-3">
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_edit.call(member.get_value())
                                                >
                                                    "Edit"
                                                </button>
                                                {if departed {
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class="text-action-primary-bg hover:underline"
                                                            on:click=move |_| on_reinstate.call(member.get_value())
                                                        >
                                                            "Reinstate"
                                                        </button>
                                                    }
                                                } else {
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class="text-fg-muted hover:underline"
                                                            on:click=move |_| on_depart.call(member.get_value())
                                                        >
                                                            "Record departure"
                                                        </button>
                                                    }
                                                }}
                                                <button
                                                    type="button"
                                                    class="text-status-error-text hover:underline"
                                                    on:click=move |_| on_delete.call(member.get_value())
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

    fn member(id: &str, status: &str, role: &str) -> StaffMember {
        serde_json::from_value(json!({
            "_id": id, "firstName": "Ali", "lastName": id, "email": format!("{}@firm.test", id),
            "role": role, "status": status, "departedAt": if status == "departed" { json!("2025-02-01") } else { json!(null) }
        }))
        .unwrap()
    }

    fn render(staff: Vec<StaffMember>) -> String {
        render_to_string(move || {
            view! {
                <StaffTable
                    staff=Signal::derive(move || staff.clone())
                    selection=create_rw_signal(RowSelection::default())
                    on_edit=Callback::new(|_| {})
                    on_depart=Callback::new(|_| {})
                    on_reinstate=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn reinstate_offered_only_for_departed_rows() {
        let active = render(vec![member("a1", "active", "lawyer")]);
        assert!(active.contains("Record departure"));
        assert!(!active.contains("Reinstate"));

        let departed = render(vec![member("d1", "departed", "departed")]);
        assert!(departed.contains("Reinstate"));
        assert!(!departed.contains("Record departure"));
        assert!(departed.contains("Left "));
    }

    #[test]
    fn empty_staff_list_shows_empty_state() {
        assert!(render(Vec::new()).contains("No staff members found"));
    }
}

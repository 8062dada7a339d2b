use crate::components::{common::Badge, empty_state::EmptyState};
use crate::models::leave::LeaveRequest;
use crate::pages::leave::utils::format_days;
use crate::utils::format::format_date;
use leptos::*;

const HEADER_CELL: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

pub fn detail_href(id: &str) -> String {
    format!("/leave/{}", id)
}

#[component]
pub fn LeaveTable(requests: Signal<Vec<LeaveRequest>>) -> impl IntoView {
    view! {
        <Show
            when=move || requests.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No leave requests match these filters" /> }
        >
            <div class="overflow-x-auto rounded-lg bg-surface-elevated shadow">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=HEADER_CELL>"Request"</th>
                            <th class=HEADER_CELL>"Employee"</th>
                            <th class=HEADER_CELL>"Type"</th>
                            <th class=HEADER_CELL>"Dates"</th>
                            <th class=HEADER_CELL>"Days"</th>
                            <th class=HEADER_CELL>"Status"</th>
                            <th class=HEADER_CELL></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || requests.get()
                            key=|request| (request.id.clone(), request.status)
                            children=move |request: LeaveRequest| {
                                let dates = format!(
                                    "{} - {}",
                                    format_date(Some(&request.dates.start_date)),
                                    format_date(Some(&request.dates.end_date))
                                );
                                let number = if request.request_number.is_empty() {
                                    request.id.clone()
                                } else {
                                    request.request_number.clone()
                                };
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class=CELL>{number}</td>
                                        <td class=CELL>
                                            <div>{request.employee_name.clone()}</div>
                                            {request
                                                .department
                                                .clone()
                                                .map(|dept| view! { <div class="text-xs text-fg-muted">{dept}</div> })}
                                        </td>
                                        <td class=CELL>{request.leave_type.label()}</td>
                                        <td class=CELL>{dates}</td>
                                        <td class=CELL>{format_days(request.dates.total_days)}</td>
                                        <td class=CELL>
                                            <Badge
                                                label=request.status.label()
                                                class=request.status.badge_class().to_string()
                                            />
                                        </td>
                                        <td class=CELL>
                                            <a
                                                class="text-action-primary-bg hover:underline"
                                                href=detail_href(&request.id)
                                            >
                                                "View"
                                            </a>
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
    fn rows_link_to_detail_and_show_status() {
        let request: LeaveRequest = serde_json::from_value(json!({
            "_id": "lr-1", "requestNumber": "LR-2025-014", "employeeName": "Sara Al-Harbi",
            "leaveType": "sick", "status": "pending_approval",
            "dates": { "startDate": "2025-03-01", "endDate": "2025-03-02", "totalDays": 2 }
        }))
        .unwrap();
        let html = render_to_string(move || {
            view! { <LeaveTable requests=Signal::derive(move || vec![request.clone()]) /> }
        });
        assert!(html.contains("LR-2025-014"));
        assert!(html.contains("Sick leave"));
        assert!(html.contains("Pending approval"));
        assert!(html.contains("2025-03-01 - 2025-03-02"));
        assert!(html.contains("href=\"/leave/lr-1\""));
    }
}

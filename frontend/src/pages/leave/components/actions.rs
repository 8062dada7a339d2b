use crate::models::leave::LeaveActionFlags;
use crate::pages::leave::utils::LeaveDialog;
use leptos::*;

const NEUTRAL: &str = "rounded-md border border-border px-4 py-2 text-sm font-semibold text-fg disabled:opacity-50";
const PRIMARY: &str = "rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50";
const DANGER: &str = "rounded-md bg-action-danger-bg px-4 py-2 text-sm font-semibold text-action-danger-text disabled:opacity-50";

/// Buttons appear when the status offers the action and are disabled while
/// any action is in flight.
#[component]
pub fn LeaveActionBar(
    visible: Signal<LeaveActionFlags>,
    enabled: Signal<LeaveActionFlags>,
    on_open: Callback<LeaveDialog>,
    on_complete_handover: Callback<()>,
) -> impl IntoView {
    let dialog_button = move |dialog: LeaveDialog,
                              shown: fn(&LeaveActionFlags) -> bool,
                              class: &'static str| {
        view! {
            <Show when=move || visible.with(shown)>
                <button
                    type="button"
                    class=class
                    disabled=move || !enabled.with(shown)
                    on:click=move |_| on_open.call(dialog)
                >
                    {dialog.submit_label()}
                </button>
            </Show>
        }
    };

    view! {
        <Show when=move || visible.get().any()>
            <div class="flex flex-wrap gap-2" role="group" aria-label="Leave request actions">
                {dialog_button(LeaveDialog::Approve, |f| f.approve, PRIMARY)}
                {dialog_button(LeaveDialog::Reject, |f| f.reject, DANGER)}
                {dialog_button(LeaveDialog::ConfirmReturn, |f| f.confirm_return, NEUTRAL)}
                <Show when=move || visible.get().complete_handover>
                    <button
                        type="button"
                        class=NEUTRAL
                        disabled=move || !enabled.get().complete_handover
                        on:click=move |_| on_complete_handover.call(())
                    >
                        "Complete handover"
                    </button>
                </Show>
                {dialog_button(LeaveDialog::Cancel, |f| f.cancel, DANGER)}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::models::leave::{available_actions, enabled_actions, LeaveRequest, LeaveStatus};
    use crate::test_support::ssr::{element_containing, has_bool_attr, render_to_string};
    use serde_json::json;

    fn request(status: LeaveStatus) -> LeaveRequest {
        serde_json::from_value(json!({
            "_id": "lr-1", "leaveType": "annual", "status": status.as_str(),
            "dates": { "startDate": "2025-03-01", "endDate": "2025-03-05", "totalDays": 5 }
        }))
        .unwrap()
    }

    fn render(status: LeaveStatus, pending: bool) -> String {
        let request = request(status);
        render_to_string(move || {
            let visible = available_actions(&request);
            let enabled = enabled_actions(&request, pending);
            view! {
                <LeaveActionBar
                    visible=Signal::derive(move || visible)
                    enabled=Signal::derive(move || enabled)
                    on_open=Callback::new(|_| {})
                    on_complete_handover=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn approve_and_reject_only_for_requests_awaiting_decision() {
        for status in LeaveStatus::FILTERABLE {
            let html = render(*status, false);
            let expected = matches!(status, LeaveStatus::Submitted | LeaveStatus::PendingApproval);
            assert_eq!(html.contains(">Approve<"), expected, "approve for {}", status);
            assert_eq!(html.contains(">Reject<"), expected, "reject for {}", status);
        }
    }

    #[test]
    fn approved_request_offers_return_and_cancel() {
        let html = render(LeaveStatus::Approved, false);
        assert!(html.contains("Confirm return"));
        assert!(html.contains("Cancel request"));
        assert!(!html.contains(">Approve<"));
    }

    #[test]
    fn pending_action_disables_visible_buttons() {
        let html = render(LeaveStatus::Submitted, true);
        let approve = element_containing(&html, "button", ">Approve<").expect("approve button");
        assert!(has_bool_attr(approve, "disabled"));
        let idle = render(LeaveStatus::Submitted, false);
        let approve = element_containing(&idle, "button", ">Approve<").expect("approve button");
        assert!(!has_bool_attr(approve, "disabled"));
    }

    #[test]
    fn closed_requests_render_no_actions() {
        assert!(!render(LeaveStatus::Completed, false).contains("Leave request actions"));
    }
}

use crate::components::{
    layout::{ErrorMessage, LoadingSpinner},
    reason_dialog::ReasonDialog,
};
use crate::pages::leave::{
    components::{HandoverPanel, LeaveActionBar, LeaveSummary, WorkflowSteps},
    detail_view_model::use_leave_detail_view_model,
    layout::LeaveFrame,
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn LeaveDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));
    view! { <LeaveDetailPanel id=id /> }
}

#[component]
pub fn LeaveDetailPanel(id: Signal<String>) -> impl IntoView {
    let vm = use_leave_detail_view_model(id);
    let visible = vm.visible_actions();
    let enabled = vm.enabled_actions();
    let pending = Signal::derive(move || vm.action.pending().get());
    let dialog_error = Signal::derive(move || vm.dialog_message.get().error);

    view! {
        <LeaveFrame title="Leave request" description="Approval workflow, handover and return.">
            <a href="/leave" class="text-sm text-action-primary-bg hover:underline">
                "Back to leave requests"
            </a>
            {move || match vm.request_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(request)) => {
                    let steps = request.approval_workflow.clone();
                    let handover = request.work_handover.clone();
                    view! {
                        <div class="space-y-6">
                            <LeaveSummary request=request />
                            <LeaveActionBar
                                visible=visible
                                enabled=enabled
                                on_open=Callback::new(move |dialog| vm.open_dialog(dialog))
                                on_complete_handover=Callback::new(move |_| vm.complete_handover())
                            />
                            <WorkflowSteps steps=steps />
                            <HandoverPanel handover=handover />
                        </div>
                    }
                    .into_view()
                }
            }}
            {move || {
                vm.dialog.get().map(|dialog| {
                    view! {
                        <ReasonDialog
                            is_open=Signal::derive(|| true)
                            title=dialog.title()
                            label=dialog.label()
                            value=vm.dialog_value
                            on_submit=Callback::new(move |value| vm.submit_dialog(value))
                            on_cancel=Callback::new(move |_| vm.close_dialog())
                            submit_label=dialog.submit_label()
                            required=dialog.required()
                            destructive=dialog.destructive()
                            input_type=dialog.input_type()
                            pending=pending
                            error=dialog_error
                        />
                    }
                })
            }}
        </LeaveFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::leave::detail_view_model::LeaveDetailViewModel;
    use crate::pages::leave::utils::LeaveDialog;
    use crate::test_support::helpers::{owner_user, provide_auth};
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    fn render(status: &str, dialog: Option<LeaveDialog>) -> String {
        let status = status.to_string();
        with_runtime(move || {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(Some(owner_user()));
            let id = Signal::derive(|| "lr-1".to_string());
            let vm = LeaveDetailViewModel::new(id);
            vm.request_resource.set(Ok(serde_json::from_value(json!({
                "_id": "lr-1", "requestNumber": "LR-2025-001", "employeeName": "Omar Nasser",
                "leaveType": "annual", "status": status,
                "dates": { "startDate": "2025-03-01", "endDate": "2025-03-05", "totalDays": 5 }
            }))
            .unwrap()));
            if let Some(dialog) = dialog {
                vm.open_dialog(dialog);
            }
            provide_context(vm);
            let html = view! { <LeaveDetailPanel id=id /> }
                .into_view()
                .render_to_string()
                .to_string();
            leptos_reactive::suppress_resource_load(false);
            html
        })
    }

    #[test]
    fn submitted_request_offers_decision() {
        let html = render("submitted", None);
        assert!(html.contains("Omar Nasser"));
        assert!(html.contains(">Approve<"));
        assert!(html.contains(">Reject<"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn open_reject_dialog_requires_reason() {
        let html = render("pending_approval", Some(LeaveDialog::Reject));
        assert!(html.contains("Reject leave request"));
        assert!(html.contains("Rejection reason"));
        assert!(html.contains("<textarea"));
    }

    #[test]
    fn confirm_return_dialog_uses_date_input() {
        let html = render("approved", Some(LeaveDialog::ConfirmReturn));
        assert!(html.contains("Confirm return from leave"));
        assert!(html.contains("type=\"date\""));
    }
}

use crate::models::leave::{ApprovalStep, StepStatus, WorkHandover};
use leptos::*;

fn step_marker(status: StepStatus) -> (&'static str, &'static str) {
    match status {
        StepStatus::Approved => ("Approved", "bg-status-success-bg text-status-success-text"),
        StepStatus::Rejected => ("Rejected", "bg-status-error-bg text-status-error-text"),
        StepStatus::Skipped => ("Skipped", "bg-surface-muted text-fg-muted"),
        StepStatus::Pending | StepStatus::Other => ("Pending", "bg-status-warning-bg text-status-warning-text"),
    }
}

#[component]
pub fn WorkflowSteps(steps: Vec<ApprovalStep>) -> impl IntoView {
    if steps.is_empty() {
        return ().into_view();
    }
    view! {
        <section class="rounded-lg bg-surface-elevated p-6 shadow space-y-3">
            <h3 class="text-sm font-semibold text-fg">"Approval workflow"</h3>
            <ol class="space-y-2">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let (label, class) = step_marker(step.status);
                        view! {
                            <li class="flex items-start gap-3 text-sm">
                                <span class="mt-0.5 flex h-6 w-6 items-center justify-center rounded-full bg-surface-muted text-xs">
                                    {index + 1}
                                </span>
                                <div class="flex-1">
                                    <div class="flex items-center gap-2">
                                        <span class="font-medium text-fg">{step.step_name}</span>
                                        <span class={format!("rounded-full px-2 py-0.5 text-xs {}", class)}>{label}</span>
                                    </div>
                                    {step.approver_name.map(|name| view! { <p class="text-fg-muted">{name}</p> })}
                                    {step.action_date.map(|date| view! { <p class="text-xs text-fg-muted">{date}</p> })}
                                    {step.comments.map(|comments| view! { <p class="text-fg">{comments}</p> })}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
    .into_view()
}

#[component]
pub fn HandoverPanel(handover: Option<WorkHandover>) -> impl IntoView {
    let Some(handover) = handover else {
        return ().into_view();
    };
    view! {
        <section class="rounded-lg bg-surface-elevated p-6 shadow space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-semibold text-fg">"Work handover"</h3>
                <span class="text-xs text-fg-muted">
                    {if handover.handover_completed { "Completed" } else { "In progress" }}
                </span>
            </div>
            <p class="text-sm text-fg">
                "Delegate: "
                {handover.delegate_name.unwrap_or_else(|| "-".to_string())}
            </p>
            <ul class="list-disc pl-5 text-sm text-fg">
                {handover
                    .tasks
                    .into_iter()
                    .map(|task| {
                        view! {
                            <li>
                                {task.task_name}
                                {task.status.map(|status| format!(" ({})", status))}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
    .into_view()
}

use crate::components::common::Badge;
use crate::models::leave::{LeaveConflict, LeaveRequest};
use crate::pages::leave::utils::format_days;
use crate::utils::format::{format_date, format_number};
use leptos::*;

fn conflict_class(conflict: &LeaveConflict) -> &'static str {
    match conflict.severity.as_deref() {
        Some("high") | Some("critical") => "border-status-error-text text-status-error-text",
        Some("medium") => "border-status-warning-text text-status-warning-text",
        _ => "border-border text-fg-muted",
    }
}

/// Request header, dates, balance impact and conflicts. Balance and
/// conflicts come from the server as-is.
#[component]
pub fn LeaveSummary(request: LeaveRequest) -> impl IntoView {
    let days = match request.dates.working_days {
        Some(working) if working != request.dates.total_days => format!(
            "{} ({} working)",
            format_days(request.dates.total_days),
            format_days(working)
        ),
        _ => format_days(request.dates.total_days),
    };
    let balance = request.balance_impact.clone();
    let conflicts = request.conflicts.clone();

    view! {
        <section class="rounded-lg bg-surface-elevated p-6 shadow space-y-4">
            <div class="flex flex-wrap items-start justify-between gap-3">
                <div>
                    <p class="text-sm text-fg-muted">{request.request_number.clone()}</p>
                    <h2 class="text-xl font-semibold text-fg">{request.employee_name.clone()}</h2>
                    {request
                        .employee_name_ar
                        .clone()
                        .map(|name| view! { <p class="text-sm text-fg-muted" dir="rtl">{name}</p> })}
                </div>
                <Badge label=request.status.label() class=request.status.badge_class().to_string() />
            </div>
            <dl class="grid grid-cols-2 gap-4 text-sm md:grid-cols-4">
                <div>
                    <dt class="text-fg-muted">"Leave type"</dt>
                    <dd class="text-fg">{request.leave_type.label()}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"From"</dt>
                    <dd class="text-fg">{format_date(Some(&request.dates.start_date))}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"To"</dt>
                    <dd class="text-fg">{format_date(Some(&request.dates.end_date))}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Duration"</dt>
                    <dd class="text-fg">{days}</dd>
                </div>
            </dl>
            {request
                .reason
                .clone()
                .map(|reason| view! { <p class="text-sm text-fg"><span class="text-fg-muted">"Reason: "</span>{reason}</p> })}
            {request
                .rejection_reason
                .clone()
                .map(|reason| {
                    view! {
                        <p class="text-sm text-status-error-text">
                            "Rejected: "
                            {reason}
                        </p>
                    }
                })}
            {balance
                .map(|balance| {
                    view! {
                        <div class="rounded-md bg-surface-muted p-3 text-sm" data-testid="balance-impact">
                            "Balance: "
                            {format_number(balance.balance_before)}
                            " → "
                            {format_number(balance.balance_after)}
                            " days"
                        </div>
                    }
                })}
            {(!conflicts.is_empty())
                .then(|| {
                    view! {
                        <div class="space-y-2">
                            <h3 class="text-sm font-semibold text-fg">"Conflicts"</h3>
                            <ul class="space-y-1">
                                {conflicts
                                    .into_iter()
                                    .map(|conflict| {
                                        let class = format!("rounded border-l-4 px-3 py-1 text-sm {}", conflict_class(&conflict));
                                        view! {
                                            <li class=class>
                                                <span class="font-medium">{conflict.conflict_type.clone()}</span>
                                                {conflict.description.clone().map(|d| format!(": {}", d))}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
        </section>
    }
}

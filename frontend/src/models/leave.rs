//! Leave requests as the HR API returns them, plus the status model that
//! decides which workflow actions a reviewer may trigger.
//!
//! The server owns the workflow. The client only renders the status it is
//! given and gates the action buttons on it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::{Validate, ValidationError};

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Draft,
    Submitted,
    PendingApproval,
    Approved,
    Rejected,
    Cancelled,
    Completed,
    /// Any status this build does not know; no actions are offered for it.
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub const FILTERABLE: &'static [LeaveStatus] = &[
        LeaveStatus::Draft,
        LeaveStatus::Submitted,
        LeaveStatus::PendingApproval,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
        LeaveStatus::Cancelled,
        LeaveStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Draft => "draft",
            LeaveStatus::Submitted => "submitted",
            LeaveStatus::PendingApproval => "pending_approval",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
            LeaveStatus::Completed => "completed",
            LeaveStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Draft => "Draft",
            LeaveStatus::Submitted => "Submitted",
            LeaveStatus::PendingApproval => "Pending approval",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
            LeaveStatus::Completed => "Completed",
            LeaveStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            LeaveStatus::Submitted | LeaveStatus::PendingApproval => {
                "bg-status-warning-bg text-status-warning-text"
            }
            LeaveStatus::Approved | LeaveStatus::Completed => {
                "bg-status-success-bg text-status-success-text"
            }
            LeaveStatus::Rejected | LeaveStatus::Cancelled => {
                "bg-status-error-bg text-status-error-text"
            }
            LeaveStatus::Draft | LeaveStatus::Unknown => "bg-surface-muted text-fg-muted",
        }
    }

    pub fn awaits_decision(&self) -> bool {
        matches!(self, LeaveStatus::Submitted | LeaveStatus::PendingApproval)
    }

    pub fn is_cancellable(&self) -> bool {
        !matches!(
            self,
            LeaveStatus::Cancelled | LeaveStatus::Completed | LeaveStatus::Unknown
        )
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

wire_enum! {
    LeaveType {
        Annual => "annual", "Annual leave",
        Sick => "sick", "Sick leave",
        Hajj => "hajj", "Hajj leave",
        Marriage => "marriage", "Marriage leave",
        Birth => "birth", "Birth leave",
        Death => "death", "Bereavement leave",
        Eid => "eid", "Eid leave",
        Maternity => "maternity", "Maternity leave",
        Paternity => "paternity", "Paternity leave",
        Exam => "exam", "Exam leave",
        Unpaid => "unpaid", "Unpaid leave",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Approved,
    Rejected,
    Skipped,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalStep {
    #[serde(default)]
    pub step_name: String,
    #[serde(default)]
    pub approver_name: Option<String>,
    pub status: StepStatus,
    #[serde(default)]
    pub action_date: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDates {
    #[serde(with = "super::day")]
    pub start_date: NaiveDate,
    #[serde(with = "super::day")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub total_days: f64,
    #[serde(default)]
    pub working_days: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverTask {
    pub task_name: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkHandover {
    pub delegate_name: Option<String>,
    pub tasks: Vec<HandoverTask>,
    pub handover_completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceImpact {
    pub balance_before: f64,
    pub balance_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveConflict {
    pub conflict_type: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnFromLeave {
    pub returned: bool,
    #[serde(with = "super::day::option")]
    pub return_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub request_number: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_name_ar: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
    pub dates: LeaveDates,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub approval_workflow: Vec<ApprovalStep>,
    #[serde(default)]
    pub work_handover: Option<WorkHandover>,
    #[serde(default)]
    pub balance_impact: Option<BalanceImpact>,
    #[serde(default)]
    pub conflicts: Vec<LeaveConflict>,
    #[serde(default)]
    pub return_from_leave: Option<ReturnFromLeave>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub rejected_by: Option<String>,
}

impl LeaveRequest {
    pub fn has_returned(&self) -> bool {
        self.return_from_leave
            .as_ref()
            .map(|r| r.returned)
            .unwrap_or(false)
    }

    pub fn handover_pending(&self) -> bool {
        self.work_handover
            .as_ref()
            .map(|h| !h.handover_completed)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveStats {
    pub total_requests: u64,
    pub pending_approval: u64,
    pub approved: u64,
    pub rejected: u64,
    pub on_leave_today: u64,
}

/// Which workflow buttons are enabled for a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaveActionFlags {
    pub approve: bool,
    pub reject: bool,
    pub confirm_return: bool,
    pub complete_handover: bool,
    pub cancel: bool,
}

impl LeaveActionFlags {
    pub fn any(&self) -> bool {
        self.approve || self.reject || self.confirm_return || self.complete_handover || self.cancel
    }
}

/// Actions the request's status offers.
pub fn available_actions(request: &LeaveRequest) -> LeaveActionFlags {
    let status = request.status;
    let approved = status == LeaveStatus::Approved;
    LeaveActionFlags {
        approve: status.awaits_decision(),
        reject: status.awaits_decision(),
        confirm_return: approved && !request.has_returned(),
        complete_handover: approved && request.handover_pending(),
        cancel: status.is_cancellable(),
    }
}

/// Offered actions that can be clicked now. While a mutation is in flight
/// nothing is enabled.
pub fn enabled_actions(request: &LeaveRequest, pending: bool) -> LeaveActionFlags {
    if pending {
        LeaveActionFlags::default()
    } else {
        available_actions(request)
    }
}

pub fn is_reason_valid(reason: &str) -> bool {
    !reason.trim().is_empty()
}

/// One workflow mutation on a leave request.
#[derive(Debug, Clone, PartialEq)]
pub enum LeaveAction {
    Approve { comments: Option<String> },
    Reject { reason: String },
    Cancel { reason: String },
    ConfirmReturn { return_date: NaiveDate },
    CompleteHandover,
}

impl LeaveAction {
    pub fn approve(comments: &str) -> Self {
        let comments = comments.trim();
        LeaveAction::Approve {
            comments: (!comments.is_empty()).then(|| comments.to_string()),
        }
    }

    pub fn reject(reason: &str) -> Result<Self, ApiError> {
        if !is_reason_valid(reason) {
            return Err(ApiError::validation("A rejection reason is required"));
        }
        Ok(LeaveAction::Reject {
            reason: reason.trim().to_string(),
        })
    }

    pub fn cancel(reason: &str) -> Result<Self, ApiError> {
        if !is_reason_valid(reason) {
            return Err(ApiError::validation("A cancellation reason is required"));
        }
        Ok(LeaveAction::Cancel {
            reason: reason.trim().to_string(),
        })
    }

    pub fn confirm_return(return_date: &str) -> Result<Self, ApiError> {
        super::day::parse(return_date)
            .filter(|_| return_date.trim().len() == 10)
            .map(|return_date| LeaveAction::ConfirmReturn { return_date })
            .ok_or_else(|| ApiError::validation("Return date must be in YYYY-MM-DD format"))
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            LeaveAction::Approve { .. } => "approve",
            LeaveAction::Reject { .. } => "reject",
            LeaveAction::Cancel { .. } => "cancel",
            LeaveAction::ConfirmReturn { .. } => "confirm-return",
            LeaveAction::CompleteHandover => "complete-handover",
        }
    }

    pub fn body(&self) -> Value {
        match self {
            LeaveAction::Approve { comments } => json!({ "comments": comments }),
            LeaveAction::Reject { reason } | LeaveAction::Cancel { reason } => {
                json!({ "reason": reason })
            }
            LeaveAction::ConfirmReturn { return_date } => {
                json!({ "returnDate": return_date.format("%Y-%m-%d").to_string() })
            }
            LeaveAction::CompleteHandover => json!({}),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            LeaveAction::Approve { .. } => "Leave request approved",
            LeaveAction::Reject { .. } => "Leave request rejected",
            LeaveAction::Cancel { .. } => "Leave request cancelled",
            LeaveAction::ConfirmReturn { .. } => "Return from leave confirmed",
            LeaveAction::CompleteHandover => "Work handover marked complete",
        }
    }
}

fn validate_leave_dates(payload: &CreateLeavePayload) -> Result<(), ValidationError> {
    if payload.end_date < payload.start_date {
        return Err(ValidationError::new("date_range").with_message(std::borrow::Cow::from(
            "End date must be on or after the start date",
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_leave_dates", skip_on_field_errors = false))]
pub struct CreateLeavePayload {
    pub leave_type: LeaveType,
    #[serde(with = "super::day")]
    pub start_date: NaiveDate,
    #[serde(with = "super::day")]
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "Reason must be at most 1000 characters"))]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_id: Option<String>,
}

use crate::api::ApiError;
use crate::models::leave::{CreateLeavePayload, LeaveAction, LeaveType};
use crate::utils::form::{optional_string, parse_choice, parse_date};
use leptos::*;
use validator::Validate;

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
    delegate_id: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LeaveType::Annual.as_str().to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            delegate_id: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_date_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_date_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn delegate_id_signal(&self) -> RwSignal<String> {
        self.delegate_id
    }

    pub fn reset(&self) {
        self.leave_type.set(LeaveType::Annual.as_str().to_string());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
        self.delegate_id.set(String::new());
    }

    pub fn to_payload(self) -> Result<CreateLeavePayload, ApiError> {
        let payload = CreateLeavePayload {
            leave_type: parse_choice(&self.leave_type.get_untracked(), LeaveType::parse, "leave type")?,
            start_date: parse_date(&self.start_date.get_untracked(), "Start date")?,
            end_date: parse_date(&self.end_date.get_untracked(), "End date")?,
            reason: optional_string(self.reason.get_untracked()),
            delegate_id: optional_string(self.delegate_id.get_untracked()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

/// The workflow actions that collect input before they are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveDialog {
    Approve,
    Reject,
    Cancel,
    ConfirmReturn,
}

impl LeaveDialog {
    pub fn title(&self) -> &'static str {
        match self {
            LeaveDialog::Approve => "Approve leave request",
            LeaveDialog::Reject => "Reject leave request",
            LeaveDialog::Cancel => "Cancel leave request",
            LeaveDialog::ConfirmReturn => "Confirm return from leave",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveDialog::Approve => "Comments",
            LeaveDialog::Reject => "Rejection reason",
            LeaveDialog::Cancel => "Cancellation reason",
            LeaveDialog::ConfirmReturn => "Return date",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            LeaveDialog::Approve => "Approve",
            LeaveDialog::Reject => "Reject",
            LeaveDialog::Cancel => "Cancel request",
            LeaveDialog::ConfirmReturn => "Confirm return",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, LeaveDialog::Approve)
    }

    pub fn destructive(&self) -> bool {
        matches!(self, LeaveDialog::Reject | LeaveDialog::Cancel)
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            LeaveDialog::ConfirmReturn => "date",
            _ => "textarea",
        }
    }

    pub fn build_action(&self, value: &str) -> Result<LeaveAction, ApiError> {
        match self {
            LeaveDialog::Approve => Ok(LeaveAction::approve(value)),
            LeaveDialog::Reject => LeaveAction::reject(value),
            LeaveDialog::Cancel => LeaveAction::cancel(value),
            LeaveDialog::ConfirmReturn => LeaveAction::confirm_return(value),
        }
    }
}

pub fn format_days(days: f64) -> String {
    if days == 1.0 {
        "1 day".to_string()
    } else if days.fract() == 0.0 {
        format!("{} days", days as i64)
    } else {
        format!("{:.1} days", days)
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn leave_form_builds_payload_with_delegate() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.leave_type_signal().set("hajj".into());
            form.start_date_signal().set("2025-06-01".into());
            form.end_date_signal().set("2025-06-10".into());
            form.delegate_id_signal().set("s-2".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.leave_type, LeaveType::Hajj);
            assert_eq!(payload.delegate_id.as_deref(), Some("s-2"));
            assert!(payload.reason.is_none());
        });
    }

    #[test]
    fn leave_form_rejects_missing_or_inverted_dates() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.start_date_signal().set("2025-06-10".into());
            assert_eq!(
                form.to_payload().unwrap_err().error,
                "End date must be in YYYY-MM-DD format"
            );
            form.end_date_signal().set("2025-06-01".into());
            assert_eq!(
                form.to_payload().unwrap_err().error,
                "End date must be on or after the start date"
            );
        });
    }

    #[test]
    fn overlong_reason_is_rejected() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.start_date_signal().set("2025-06-01".into());
            form.end_date_signal().set("2025-06-02".into());
            form.reason_signal().set("x".repeat(1001));
            assert!(form.to_payload().unwrap_err().is_validation());
        });
    }
}

use crate::api::ApiError;
use crate::models::staff::{
    DeparturePayload, InviteStaffPayload, StaffMember, StaffPayload, StaffRole, StaffStatus,
};
use crate::utils::form::{optional_string, parse_choice, parse_date};
use leptos::*;
use validator::Validate;

#[derive(Clone, Copy)]
pub struct StaffFormState {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    role: RwSignal<String>,
    status: RwSignal<String>,
    specialization: RwSignal<String>,
}

impl Default for StaffFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            role: create_rw_signal(StaffRole::Lawyer.as_str().to_string()),
            status: create_rw_signal(StaffStatus::Active.as_str().to_string()),
            specialization: create_rw_signal(String::new()),
        }
    }
}

impl StaffFormState {
    pub fn first_name_signal(&self) -> RwSignal<String> {
        self.first_name
    }

    pub fn last_name_signal(&self) -> RwSignal<String> {
        self.last_name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn phone_signal(&self) -> RwSignal<String> {
        self.phone
    }

    pub fn role_signal(&self) -> RwSignal<String> {
        self.role
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn specialization_signal(&self) -> RwSignal<String> {
        self.specialization
    }

    pub fn reset(&self) {
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.role.set(StaffRole::Lawyer.as_str().to_string());
        self.status.set(StaffStatus::Active.as_str().to_string());
        self.specialization.set(String::new());
    }

    pub fn load_from(&self, member: &StaffMember) {
        self.first_name.set(member.first_name.clone());
        self.last_name.set(member.last_name.clone());
        self.email.set(member.email.clone());
        self.phone.set(member.phone.clone().unwrap_or_default());
        self.role.set(member.role.as_str().to_string());
        self.status.set(member.status.as_str().to_string());
        self.specialization
            .set(member.specialization.clone().unwrap_or_default());
    }

    pub fn to_payload(self) -> Result<StaffPayload, ApiError> {
        let payload = StaffPayload {
            first_name: self.first_name.get_untracked().trim().to_string(),
            last_name: self.last_name.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            phone: optional_string(self.phone.get_untracked()),
            role: parse_choice(&self.role.get_untracked(), StaffRole::parse, "role")?,
            status: parse_choice(&self.status.get_untracked(), StaffStatus::parse, "status")?,
            specialization: optional_string(self.specialization.get_untracked()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Clone, Copy)]
pub struct InviteFormState {
    email: RwSignal<String>,
    role: RwSignal<String>,
}

impl Default for InviteFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            role: create_rw_signal(StaffRole::Lawyer.as_str().to_string()),
        }
    }
}

impl InviteFormState {
    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn role_signal(&self) -> RwSignal<String> {
        self.role
    }

    pub fn reset(&self) {
        self.email.set(String::new());
        self.role.set(StaffRole::Lawyer.as_str().to_string());
    }

    pub fn to_payload(self) -> Result<InviteStaffPayload, ApiError> {
        let payload = InviteStaffPayload {
            email: self.email.get_untracked().trim().to_string(),
            role: parse_choice(&self.role.get_untracked(), StaffRole::parse, "role")?,
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Clone, Copy)]
pub struct DepartureFormState {
    reason: RwSignal<String>,
    departed_at: RwSignal<String>,
}

impl Default for DepartureFormState {
    fn default() -> Self {
        Self {
            reason: create_rw_signal(String::new()),
            departed_at: create_rw_signal(String::new()),
        }
    }
}

impl DepartureFormState {
    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn departed_at_signal(&self) -> RwSignal<String> {
        self.departed_at
    }

    /// Clears the reason and dates the departure `today`.
    pub fn reset(&self, today: &str) {
        self.reason.set(String::new());
        self.departed_at.set(today.to_string());
    }

    pub fn to_payload(self) -> Result<DeparturePayload, ApiError> {
        let payload = DeparturePayload {
            reason: self.reason.get_untracked().trim().to_string(),
            departed_at: parse_date(&self.departed_at.get_untracked(), "Departure date")?,
        };
        payload.validate()?;
        Ok(payload)
    }
}

pub fn status_badge_class(status: StaffStatus) -> &'static str {
    match status {
        StaffStatus::Active => "bg-status-success-bg text-status-success-text",
        StaffStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        StaffStatus::Suspended | StaffStatus::Departed => "bg-status-error-bg text-status-error-text",
        StaffStatus::Inactive => "bg-surface-muted text-fg-muted",
    }
}

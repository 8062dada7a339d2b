use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

wire_enum! {
    StaffRole {
        Owner => "owner", "Owner",
        Admin => "admin", "Administrator",
        Partner => "partner", "Partner",
        Lawyer => "lawyer", "Lawyer",
        Paralegal => "paralegal", "Paralegal",
        Secretary => "secretary", "Secretary",
        Accountant => "accountant", "Accountant",
        Assistant => "assistant", "Assistant",
        Departed => "departed", "Departed",
    }
}

impl StaffRole {
    /// Roles that may be assigned from the staff forms.
    pub const ASSIGNABLE: &'static [StaffRole] = &[
        StaffRole::Admin,
        StaffRole::Partner,
        StaffRole::Lawyer,
        StaffRole::Paralegal,
        StaffRole::Secretary,
        StaffRole::Accountant,
        StaffRole::Assistant,
    ];
}

wire_enum! {
    StaffStatus {
        Active => "active", "Active",
        Inactive => "inactive", "Inactive",
        Departed => "departed", "Departed",
        Suspended => "suspended", "Suspended",
        Pending => "pending", "Pending invitation",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: StaffRole,
    pub status: StaffStatus,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub previous_role: Option<StaffRole>,
    #[serde(default)]
    pub departure_reason: Option<String>,
    #[serde(default, with = "super::day::option")]
    pub departed_at: Option<NaiveDate>,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_departed(&self) -> bool {
        self.status == StaffStatus::Departed || self.role == StaffRole::Departed
    }

    /// Role offered when reinstating: the one held before departure.
    pub fn reinstate_role(&self) -> StaffRole {
        self.previous_role
            .filter(|role| *role != StaffRole::Departed)
            .unwrap_or(StaffRole::Lawyer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StaffPayload {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Email address is invalid"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: StaffRole,
    pub status: StaffStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InviteStaffPayload {
    #[validate(email(message = "Email address is invalid"))]
    pub email: String,
    pub role: StaffRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeparturePayload {
    #[validate(custom(function = "super::validation::validate_not_blank"))]
    pub reason: String,
    #[serde(with = "super::day")]
    pub departed_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinstatePayload {
    pub role: StaffRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn staff_payload_requires_valid_email() {
        let mut payload = StaffPayload {
            first_name: "Huda".into(),
            last_name: "Saleh".into(),
            email: "huda@firm.test".into(),
            phone: None,
            role: StaffRole::Lawyer,
            status: StaffStatus::Active,
            specialization: None,
        };
        assert!(payload.validate().is_ok());
        payload.email = "huda".into();
        assert!(payload.validate().is_err());
    }

    #[wasm_bindgen_test]
    fn departure_requires_reason() {
        let payload = DeparturePayload {
            reason: "  ".into(),
            departed_at: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        };
        assert!(payload.validate().is_err());
    }

    #[wasm_bindgen_test]
    fn departed_member_reinstates_to_previous_role() {
        let member: StaffMember = serde_json::from_value(json!({
            "_id": "s1",
            "firstName": "Ali",
            "lastName": "Hassan",
            "email": "ali@firm.test",
            "role": "departed",
            "status": "departed",
            "previousRole": "partner",
            "departedAt": "2025-02-01T00:00:00Z"
        }))
        .unwrap();
        assert!(member.is_departed());
        assert_eq!(member.reinstate_role(), StaffRole::Partner);
        assert_eq!(member.departed_at, NaiveDate::from_ymd_opt(2025, 2, 1));
    }
}

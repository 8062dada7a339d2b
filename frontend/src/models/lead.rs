use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

wire_enum! {
    LeadSource {
        Website => "website", "Website",
        Referral => "referral", "Referral",
        SocialMedia => "social_media", "Social media",
        Advertising => "advertising", "Advertising",
        ColdCall => "cold_call", "Cold call",
        WalkIn => "walk_in", "Walk-in",
        Event => "event", "Event",
        Other => "other", "Other",
    }
}

wire_enum! {
    LeadStatus {
        New => "new", "New",
        Contacted => "contacted", "Contacted",
        Qualified => "qualified", "Qualified",
        Proposal => "proposal", "Proposal",
        Negotiation => "negotiation", "Negotiation",
        Won => "won", "Won",
        Lost => "lost", "Lost",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub lead_number: Option<String>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default, with = "super::day::option")]
    pub expected_close_date: Option<NaiveDate>,
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub utm_source: Option<String>,
    #[serde(default)]
    pub utm_medium: Option<String>,
    #[serde(default)]
    pub utm_campaign: Option<String>,
    #[serde(default)]
    pub territory: Option<String>,
    #[serde(default)]
    pub sales_team: Option<String>,
    #[serde(default)]
    pub external_crm_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Email address is invalid"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "Phone number is too long"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Estimated value cannot be negative"))]
    pub estimated_value: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "super::day::option"
    )]
    pub expected_close_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_crm_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;

wire_enum! {
    /// How a rate is charged.
    RateType {
        Hourly => "hourly", "Hourly",
        Flat => "flat", "Flat fee",
        Contingency => "contingency", "Contingency",
        Retainer => "retainer", "Retainer",
        TaskBased => "task_based", "Task based",
        Milestone => "milestone", "Milestone",
    }
}

wire_enum! {
    RateCategory {
        Consultation => "consultation", "Consultation",
        CourtAppearance => "court_appearance", "Court appearance",
        DocumentPreparation => "document_preparation", "Document preparation",
        Research => "research", "Research",
        Meeting => "meeting", "Meeting",
        Travel => "travel", "Travel",
        Administrative => "administrative", "Administrative",
        Other => "other", "Other",
    }
}

wire_enum! {
    Currency {
        Sar => "SAR", "Saudi riyal",
        Usd => "USD", "US dollar",
        Eur => "EUR", "Euro",
        Gbp => "GBP", "Pound sterling",
        Aed => "AED", "UAE dirham",
    }
}

wire_enum! {
    /// Which billable entities a rate group may be attached to.
    ApplicableTo {
        Clients => "clients", "Clients",
        Cases => "cases", "Cases",
        Services => "services", "Services",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRate {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(rename = "type")]
    pub rate_type: RateType,
    pub category: RateCategory,
    pub amount: f64,
    pub currency: Currency,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub minimum_charge: Option<f64>,
    #[serde(default)]
    pub rounding_increment: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// A group's `rates` array holds populated rates or bare ids depending on
/// the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupRate {
    Rate(Box<BillingRate>),
    Id(String),
}

impl GroupRate {
    pub fn id(&self) -> &str {
        match self {
            GroupRate::Rate(rate) => &rate.id,
            GroupRate::Id(id) => id,
        }
    }

    pub fn rate(&self) -> Option<&BillingRate> {
        match self {
            GroupRate::Rate(rate) => Some(rate),
            GroupRate::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateGroup {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default = "default_group_color")]
    pub color: String,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub applicable_to: Vec<ApplicableTo>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub rates: Vec<GroupRate>,
}

pub fn default_group_color() -> String {
    "#1e40af".to_string()
}

impl RateGroup {
    pub fn contains_rate(&self, rate_id: &str) -> bool {
        self.rates.iter().any(|rate| rate.id() == rate_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateStats {
    pub total_rates: u64,
    pub active_rates: u64,
    pub total_groups: u64,
    pub average_hourly_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatePayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Arabic name is required"))]
    pub name_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    #[serde(rename = "type")]
    pub rate_type: RateType,
    pub category: RateCategory,
    #[validate(range(exclusive_min = 0.0, message = "Amount must be greater than 0"))]
    pub amount: f64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Minimum charge cannot be negative"))]
    pub minimum_charge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(
        exclusive_min = 0.0,
        message = "Rounding increment must be greater than 0"
    ))]
    pub rounding_increment: Option<f64>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateGroupPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Arabic name is required"))]
    pub name_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    #[validate(custom(function = "super::validation::validate_hex_color"))]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0, message = "Discount must be between 0 and 100"))]
    pub discount: Option<f64>,
    #[validate(length(min = 1, message = "Select at least one of clients, cases or services"))]
    pub applicable_to: Vec<ApplicableTo>,
    pub is_default: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroupPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Arabic name is required"))]
    pub name_ar: String,
}

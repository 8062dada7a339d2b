use crate::api::ApiError;
use crate::models::lead::{Lead, LeadPayload, LeadSource, LeadStatus};
use crate::utils::form::{
    format_optional_f64, optional_string, parse_choice, parse_optional_date, parse_optional_f64,
    split_list,
};
use leptos::*;
use validator::Validate;

#[derive(Clone, Copy)]
pub struct LeadFormState {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    company: RwSignal<String>,
    source: RwSignal<String>,
    status: RwSignal<String>,
    estimated_value: RwSignal<String>,
    expected_close_date: RwSignal<String>,
    case_type: RwSignal<String>,
    description: RwSignal<String>,
    notes: RwSignal<String>,
    assigned_to: RwSignal<String>,
    utm_source: RwSignal<String>,
    utm_medium: RwSignal<String>,
    utm_campaign: RwSignal<String>,
    territory: RwSignal<String>,
    sales_team: RwSignal<String>,
    external_crm_id: RwSignal<String>,
    tags: RwSignal<String>,
    show_advanced: RwSignal<bool>,
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            company: create_rw_signal(String::new()),
            source: create_rw_signal(LeadSource::Website.as_str().to_string()),
            status: create_rw_signal(LeadStatus::New.as_str().to_string()),
            estimated_value: create_rw_signal(String::new()),
            expected_close_date: create_rw_signal(String::new()),
            case_type: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            notes: create_rw_signal(String::new()),
            assigned_to: create_rw_signal(String::new()),
            utm_source: create_rw_signal(String::new()),
            utm_medium: create_rw_signal(String::new()),
            utm_campaign: create_rw_signal(String::new()),
            territory: create_rw_signal(String::new()),
            sales_team: create_rw_signal(String::new()),
            external_crm_id: create_rw_signal(String::new()),
            tags: create_rw_signal(String::new()),
            show_advanced: create_rw_signal(false),
        }
    }
}

impl LeadFormState {
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

    pub fn company_signal(&self) -> RwSignal<String> {
        self.company
    }

    pub fn source_signal(&self) -> RwSignal<String> {
        self.source
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn estimated_value_signal(&self) -> RwSignal<String> {
        self.estimated_value
    }

    pub fn expected_close_date_signal(&self) -> RwSignal<String> {
        self.expected_close_date
    }

    pub fn case_type_signal(&self) -> RwSignal<String> {
        self.case_type
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn notes_signal(&self) -> RwSignal<String> {
        self.notes
    }

    pub fn assigned_to_signal(&self) -> RwSignal<String> {
        self.assigned_to
    }

    pub fn utm_source_signal(&self) -> RwSignal<String> {
        self.utm_source
    }

    pub fn utm_medium_signal(&self) -> RwSignal<String> {
        self.utm_medium
    }

    pub fn utm_campaign_signal(&self) -> RwSignal<String> {
        self.utm_campaign
    }

    pub fn territory_signal(&self) -> RwSignal<String> {
        self.territory
    }

    pub fn sales_team_signal(&self) -> RwSignal<String> {
        self.sales_team
    }

    pub fn external_crm_id_signal(&self) -> RwSignal<String> {
        self.external_crm_id
    }

    pub fn tags_signal(&self) -> RwSignal<String> {
        self.tags
    }

    pub fn show_advanced_signal(&self) -> RwSignal<bool> {
        self.show_advanced
    }

    fn advanced_fields(&self) -> [RwSignal<String>; 7] {
        [
            self.utm_source,
            self.utm_medium,
            self.utm_campaign,
            self.territory,
            self.sales_team,
            self.external_crm_id,
            self.tags,
        ]
    }

    pub fn reset(&self) {
        for field in [
            self.first_name,
            self.last_name,
            self.email,
            self.phone,
            self.company,
            self.estimated_value,
            self.expected_close_date,
            self.case_type,
            self.description,
            self.notes,
            self.assigned_to,
        ]
        .into_iter()
        .chain(self.advanced_fields())
        {
            field.set(String::new());
        }
        self.source.set(LeadSource::Website.as_str().to_string());
        self.status.set(LeadStatus::New.as_str().to_string());
        self.show_advanced.set(false);
    }

    /// Opens the advanced section when the lead already carries any of its
    /// fields.
    pub fn load_from(&self, lead: &Lead) {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        self.first_name.set(lead.first_name.clone());
        self.last_name.set(lead.last_name.clone());
        self.email.set(text(&lead.email));
        self.phone.set(text(&lead.phone));
        self.company.set(text(&lead.company));
        self.source.set(lead.source.as_str().to_string());
        self.status.set(lead.status.as_str().to_string());
        self.estimated_value
            .set(format_optional_f64(lead.estimated_value));
        self.expected_close_date.set(
            lead.expected_close_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        self.case_type.set(text(&lead.case_type));
        self.description.set(text(&lead.description));
        self.notes.set(text(&lead.notes));
        self.assigned_to.set(text(&lead.assigned_to));
        self.utm_source.set(text(&lead.utm_source));
        self.utm_medium.set(text(&lead.utm_medium));
        self.utm_campaign.set(text(&lead.utm_campaign));
        self.territory.set(text(&lead.territory));
        self.sales_team.set(text(&lead.sales_team));
        self.external_crm_id.set(text(&lead.external_crm_id));
        self.tags.set(lead.tags.join(", "));
        let has_advanced = self
            .advanced_fields()
            .iter()
            .any(|field| !field.get_untracked().is_empty());
        self.show_advanced.set(has_advanced);
    }

    pub fn to_payload(self) -> Result<LeadPayload, ApiError> {
        let payload = LeadPayload {
            first_name: self.first_name.get_untracked().trim().to_string(),
            last_name: self.last_name.get_untracked().trim().to_string(),
            email: optional_string(self.email.get_untracked()),
            phone: optional_string(self.phone.get_untracked()),
            company: optional_string(self.company.get_untracked()),
            source: parse_choice(&self.source.get_untracked(), LeadSource::parse, "lead source")?,
            status: parse_choice(&self.status.get_untracked(), LeadStatus::parse, "lead status")?,
            estimated_value: parse_optional_f64(
                &self.estimated_value.get_untracked(),
                "Estimated value",
            )?,
            expected_close_date: parse_optional_date(
                &self.expected_close_date.get_untracked(),
                "Expected close date",
            )?,
            case_type: optional_string(self.case_type.get_untracked()),
            description: optional_string(self.description.get_untracked()),
            notes: optional_string(self.notes.get_untracked()),
            assigned_to: optional_string(self.assigned_to.get_untracked()),
            utm_source: optional_string(self.utm_source.get_untracked()),
            utm_medium: optional_string(self.utm_medium.get_untracked()),
            utm_campaign: optional_string(self.utm_campaign.get_untracked()),
            territory: optional_string(self.territory.get_untracked()),
            sales_team: optional_string(self.sales_team.get_untracked()),
            external_crm_id: optional_string(self.external_crm_id.get_untracked()),
            tags: split_list(&self.tags.get_untracked()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

pub fn status_badge_class(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::Won => "bg-status-success-bg text-status-success-text",
        LeadStatus::Lost => "bg-status-error-bg text-status-error-text",
        LeadStatus::Proposal | LeadStatus::Negotiation => {
            "bg-status-warning-bg text-status-warning-text"
        }
        LeadStatus::New | LeadStatus::Contacted | LeadStatus::Qualified => {
            "bg-status-info-bg text-status-info-text"
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn payload_parses_optional_fields_and_tags() {
        with_runtime(|| {
            let form = LeadFormState::default();
            form.first_name_signal().set(" Faisal ".into());
            form.last_name_signal().set("Al-Qahtani".into());
            form.estimated_value_signal().set("25000".into());
            form.expected_close_date_signal().set("2025-09-30".into());
            form.tags_signal().set("vip, commercial,".into());

            let payload = form.to_payload().unwrap();
            assert_eq!(payload.first_name, "Faisal");
            assert_eq!(payload.source, LeadSource::Website);
            assert_eq!(payload.estimated_value, Some(25000.0));
            assert_eq!(payload.expected_close_date, NaiveDate::from_ymd_opt(2025, 9, 30));
            assert_eq!(payload.tags, vec!["vip".to_string(), "commercial".to_string()]);
            assert!(payload.email.is_none());
        });
    }

    #[test]
    fn payload_rejects_bad_email_and_negative_value() {
        with_runtime(|| {
            let form = LeadFormState::default();
            form.first_name_signal().set("Faisal".into());
            form.last_name_signal().set("Al-Qahtani".into());
            form.email_signal().set("faisal@".into());
            assert!(form.to_payload().unwrap_err().is_validation());

            form.email_signal().set("faisal@example.com".into());
            form.estimated_value_signal().set("-10".into());
            assert!(form.to_payload().unwrap_err().is_validation());
        });
    }

    #[test]
    fn load_from_opens_advanced_section_when_needed() {
        with_runtime(|| {
            let form = LeadFormState::default();
            let plain: Lead = serde_json::from_value(json!({
                "_id": "l1", "firstName": "Noura", "source": "website", "status": "new"
            }))
            .unwrap();
            form.load_from(&plain);
            assert!(!form.show_advanced_signal().get());

            let tracked: Lead = serde_json::from_value(json!({
                "_id": "l2", "firstName": "Noura", "source": "advertising", "status": "new",
                "utmCampaign": "ramadan-2025", "tags": ["family", "urgent"]
            }))
            .unwrap();
            form.load_from(&tracked);
            assert!(form.show_advanced_signal().get());
            assert_eq!(form.tags_signal().get(), "family, urgent");

            form.reset();
            assert!(!form.show_advanced_signal().get());
            assert!(form.utm_campaign_signal().get().is_empty());
        });
    }
}

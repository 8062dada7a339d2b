use crate::api::ApiError;
use crate::models::billing::{
    default_group_color, ApplicableTo, BillingRate, Currency, DuplicateGroupPayload, RateCategory,
    RateGroup, RateGroupPayload, RatePayload, RateType,
};
use crate::utils::form::{
    format_optional_f64, optional_string, parse_choice, parse_optional_f64, parse_required_f64,
};
use leptos::*;
use validator::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingTab {
    Rates,
    Groups,
}

/// Which row a destructive confirmation refers to, with its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Rate { id: String, name: String },
    Group { id: String, name: String },
}

impl DeleteTarget {
    pub fn message(&self) -> String {
        match self {
            DeleteTarget::Rate { name, .. } => {
                format!("Delete the rate \"{}\"? This cannot be undone.", name)
            }
            DeleteTarget::Group { name, .. } => format!(
                "Delete the group \"{}\"? Its rates are kept but no longer grouped.",
                name
            ),
        }
    }
}

#[derive(Clone, Copy)]
pub struct RateFormState {
    name: RwSignal<String>,
    name_ar: RwSignal<String>,
    description: RwSignal<String>,
    description_ar: RwSignal<String>,
    rate_type: RwSignal<String>,
    category: RwSignal<String>,
    amount: RwSignal<String>,
    currency: RwSignal<String>,
    unit: RwSignal<String>,
    minimum_charge: RwSignal<String>,
    rounding_increment: RwSignal<String>,
    is_active: RwSignal<bool>,
    group_id: RwSignal<String>,
}

impl Default for RateFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            name_ar: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            description_ar: create_rw_signal(String::new()),
            rate_type: create_rw_signal(RateType::Hourly.as_str().to_string()),
            category: create_rw_signal(RateCategory::Consultation.as_str().to_string()),
            amount: create_rw_signal(String::new()),
            currency: create_rw_signal(Currency::Sar.as_str().to_string()),
            unit: create_rw_signal(String::new()),
            minimum_charge: create_rw_signal(String::new()),
            rounding_increment: create_rw_signal(String::new()),
            is_active: create_rw_signal(true),
            group_id: create_rw_signal(String::new()),
        }
    }
}

impl RateFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn name_ar_signal(&self) -> RwSignal<String> {
        self.name_ar
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn description_ar_signal(&self) -> RwSignal<String> {
        self.description_ar
    }

    pub fn rate_type_signal(&self) -> RwSignal<String> {
        self.rate_type
    }

    pub fn category_signal(&self) -> RwSignal<String> {
        self.category
    }

    pub fn amount_signal(&self) -> RwSignal<String> {
        self.amount
    }

    pub fn currency_signal(&self) -> RwSignal<String> {
        self.currency
    }

    pub fn unit_signal(&self) -> RwSignal<String> {
        self.unit
    }

    pub fn minimum_charge_signal(&self) -> RwSignal<String> {
        self.minimum_charge
    }

    pub fn rounding_increment_signal(&self) -> RwSignal<String> {
        self.rounding_increment
    }

    pub fn is_active_signal(&self) -> RwSignal<bool> {
        self.is_active
    }

    pub fn group_id_signal(&self) -> RwSignal<String> {
        self.group_id
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.name_ar.set(String::new());
        self.description.set(String::new());
        self.description_ar.set(String::new());
        self.rate_type.set(RateType::Hourly.as_str().to_string());
        self.category.set(RateCategory::Consultation.as_str().to_string());
        self.amount.set(String::new());
        self.currency.set(Currency::Sar.as_str().to_string());
        self.unit.set(String::new());
        self.minimum_charge.set(String::new());
        self.rounding_increment.set(String::new());
        self.is_active.set(true);
        self.group_id.set(String::new());
    }

    pub fn load_from(&self, rate: &BillingRate) {
        self.name.set(rate.name.clone());
        self.name_ar.set(rate.name_ar.clone());
        self.description.set(rate.description.clone().unwrap_or_default());
        self.description_ar
            .set(rate.description_ar.clone().unwrap_or_default());
        self.rate_type.set(rate.rate_type.as_str().to_string());
        self.category.set(rate.category.as_str().to_string());
        self.amount.set(rate.amount.to_string());
        self.currency.set(rate.currency.as_str().to_string());
        self.unit.set(rate.unit.clone().unwrap_or_default());
        self.minimum_charge.set(format_optional_f64(rate.minimum_charge));
        self.rounding_increment
            .set(format_optional_f64(rate.rounding_increment));
        self.is_active.set(rate.is_active);
        self.group_id.set(rate.group_id.clone().unwrap_or_default());
    }

    pub fn to_payload(self) -> Result<RatePayload, ApiError> {
        let payload = RatePayload {
            name: self.name.get_untracked().trim().to_string(),
            name_ar: self.name_ar.get_untracked().trim().to_string(),
            description: optional_string(self.description.get_untracked()),
            description_ar: optional_string(self.description_ar.get_untracked()),
            rate_type: parse_choice(&self.rate_type.get_untracked(), RateType::parse, "rate type")?,
            category: parse_choice(&self.category.get_untracked(), RateCategory::parse, "category")?,
            amount: parse_required_f64(&self.amount.get_untracked(), "Amount")?,
            currency: parse_choice(&self.currency.get_untracked(), Currency::parse, "currency")?,
            unit: optional_string(self.unit.get_untracked()),
            minimum_charge: parse_optional_f64(
                &self.minimum_charge.get_untracked(),
                "Minimum charge",
            )?,
            rounding_increment: parse_optional_f64(
                &self.rounding_increment.get_untracked(),
                "Rounding increment",
            )?,
            is_active: self.is_active.get_untracked(),
            group_id: optional_string(self.group_id.get_untracked()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Clone, Copy)]
pub struct GroupFormState {
    name: RwSignal<String>,
    name_ar: RwSignal<String>,
    description: RwSignal<String>,
    description_ar: RwSignal<String>,
    color: RwSignal<String>,
    discount: RwSignal<String>,
    applicable_to: RwSignal<Vec<ApplicableTo>>,
    is_default: RwSignal<bool>,
    is_active: RwSignal<bool>,
}

impl Default for GroupFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            name_ar: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            description_ar: create_rw_signal(String::new()),
            color: create_rw_signal(default_group_color()),
            discount: create_rw_signal(String::new()),
            applicable_to: create_rw_signal(vec![ApplicableTo::Clients]),
            is_default: create_rw_signal(false),
            is_active: create_rw_signal(true),
        }
    }
}

impl GroupFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn name_ar_signal(&self) -> RwSignal<String> {
        self.name_ar
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn description_ar_signal(&self) -> RwSignal<String> {
        self.description_ar
    }

    pub fn color_signal(&self) -> RwSignal<String> {
        self.color
    }

    pub fn discount_signal(&self) -> RwSignal<String> {
        self.discount
    }

    pub fn applicable_to_signal(&self) -> RwSignal<Vec<ApplicableTo>> {
        self.applicable_to
    }

    pub fn is_default_signal(&self) -> RwSignal<bool> {
        self.is_default
    }

    pub fn is_active_signal(&self) -> RwSignal<bool> {
        self.is_active
    }

    pub fn toggle_target(&self, target: ApplicableTo) {
        self.applicable_to.update(|targets| {
            if let Some(index) = targets.iter().position(|t| *t == target) {
                targets.remove(index);
            } else {
                targets.push(target);
            }
        });
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.name_ar.set(String::new());
        self.description.set(String::new());
        self.description_ar.set(String::new());
        self.color.set(default_group_color());
        self.discount.set(String::new());
        self.applicable_to.set(vec![ApplicableTo::Clients]);
        self.is_default.set(false);
        self.is_active.set(true);
    }

    pub fn load_from(&self, group: &RateGroup) {
        self.name.set(group.name.clone());
        self.name_ar.set(group.name_ar.clone());
        self.description.set(group.description.clone().unwrap_or_default());
        self.description_ar
            .set(group.description_ar.clone().unwrap_or_default());
        self.color.set(group.color.clone());
        self.discount.set(format_optional_f64(group.discount));
        self.applicable_to.set(group.applicable_to.clone());
        self.is_default.set(group.is_default);
        self.is_active.set(group.is_active);
    }

    pub fn to_payload(self) -> Result<RateGroupPayload, ApiError> {
        // Keep the enum order stable on the wire regardless of click order.
        let selected = self.applicable_to.get_untracked();
        let applicable_to = ApplicableTo::ALL
            .iter()
            .copied()
            .filter(|target| selected.contains(target))
            .collect();
        let payload = RateGroupPayload {
            name: self.name.get_untracked().trim().to_string(),
            name_ar: self.name_ar.get_untracked().trim().to_string(),
            description: optional_string(self.description.get_untracked()),
            description_ar: optional_string(self.description_ar.get_untracked()),
            color: self.color.get_untracked().trim().to_string(),
            discount: parse_optional_f64(&self.discount.get_untracked(), "Discount")?,
            applicable_to,
            is_default: self.is_default.get_untracked(),
            is_active: self.is_active.get_untracked(),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Clone, Copy)]
pub struct DuplicateFormState {
    name: RwSignal<String>,
    name_ar: RwSignal<String>,
}

impl Default for DuplicateFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            name_ar: create_rw_signal(String::new()),
        }
    }
}

impl DuplicateFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn name_ar_signal(&self) -> RwSignal<String> {
        self.name_ar
    }

    /// Pre-fills the copy's names from the source group.
    pub fn load_from(&self, group: &RateGroup) {
        self.name.set(format!("{} (copy)", group.name));
        self.name_ar.set(format!("{} (نسخة)", group.name_ar));
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.name_ar.set(String::new());
    }

    pub fn to_payload(self) -> Result<DuplicateGroupPayload, ApiError> {
        let payload = DuplicateGroupPayload {
            name: self.name.get_untracked().trim().to_string(),
            name_ar: self.name_ar.get_untracked().trim().to_string(),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn filled_rate_form() -> RateFormState {
        let form = RateFormState::default();
        form.name_signal().set("Partner hour".into());
        form.name_ar_signal().set("ساعة شريك".into());
        form.amount_signal().set("1500".into());
        form
    }

    #[test]
    fn rate_form_builds_payload_with_defaults() {
        with_runtime(|| {
            let form = filled_rate_form();
            form.rounding_increment_signal().set("0.25".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.rate_type, RateType::Hourly);
            assert_eq!(payload.currency, Currency::Sar);
            assert_eq!(payload.amount, 1500.0);
            assert_eq!(payload.rounding_increment, Some(0.25));
            assert_eq!(payload.group_id, None);
        });
    }

    #[test]
    fn rate_form_rejects_non_positive_amount() {
        with_runtime(|| {
            let form = filled_rate_form();
            for amount in ["0", "-10"] {
                form.amount_signal().set(amount.into());
                let err = form.to_payload().unwrap_err();
                assert!(err.is_validation());
                assert_eq!(err.error, "Amount must be greater than 0");
            }
            form.amount_signal().set(String::new());
            assert_eq!(form.to_payload().unwrap_err().error, "Amount is required");
        });
    }

    #[test]
    fn rate_form_rejects_empty_names() {
        with_runtime(|| {
            let form = filled_rate_form();
            form.name_signal().set("  ".into());
            form.name_ar_signal().set(String::new());
            let err = form.to_payload().unwrap_err();
            assert_eq!(
                err.validation_messages(),
                vec!["Arabic name is required".to_string(), "Name is required".to_string()]
            );
        });
    }

    #[test]
    fn rate_form_reset_restores_defaults_after_edit() {
        with_runtime(|| {
            let form = filled_rate_form();
            form.currency_signal().set("USD".into());
            form.is_active_signal().set(false);
            form.reset();
            assert!(form.name_signal().get().is_empty());
            assert_eq!(form.currency_signal().get(), "SAR");
            assert!(form.is_active_signal().get());
        });
    }

    #[test]
    fn group_form_discount_must_be_within_percentage_range() {
        with_runtime(|| {
            let form = GroupFormState::default();
            form.name_signal().set("Litigation".into());
            form.name_ar_signal().set("التقاضي".into());
            for ok in ["0", "100", "12.5", ""] {
                form.discount_signal().set(ok.into());
                assert!(form.to_payload().is_ok(), "discount {:?} should pass", ok);
            }
            for bad in ["-1", "100.01", "150"] {
                form.discount_signal().set(bad.into());
                let err = form.to_payload().unwrap_err();
                assert_eq!(err.error, "Discount must be between 0 and 100");
            }
        });
    }

    #[test]
    fn group_form_orders_targets_and_requires_one() {
        with_runtime(|| {
            let form = GroupFormState::default();
            form.name_signal().set("Litigation".into());
            form.name_ar_signal().set("التقاضي".into());
            form.toggle_target(ApplicableTo::Services);
            form.toggle_target(ApplicableTo::Cases);
            assert_eq!(
                form.to_payload().unwrap().applicable_to,
                vec![ApplicableTo::Clients, ApplicableTo::Cases, ApplicableTo::Services]
            );

            for target in ApplicableTo::ALL {
                if form.applicable_to_signal().get().contains(target) {
                    form.toggle_target(*target);
                }
            }
            assert!(form.to_payload().is_err());
        });
    }

    #[test]
    fn duplicate_form_prefills_copy_names() {
        with_runtime(|| {
            let group: RateGroup = serde_json::from_value(serde_json::json!({
                "_id": "g1", "name": "Corporate", "nameAr": "الشركات"
            }))
            .unwrap();
            let form = DuplicateFormState::default();
            form.load_from(&group);
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.name, "Corporate (copy)");
        });
    }
}

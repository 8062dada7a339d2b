use crate::api::ApiError;
use crate::models::settings::{
    ApiKeyPayload, BrandingSettings, ExportFormat, PrivacySettings, SecuritySettings,
};
use crate::utils::form::{optional_string, parse_choice, parse_required_u32, split_list};
use leptos::*;
use validator::Validate;

#[derive(Clone, Copy)]
pub struct SecurityFormState {
    mfa_required: RwSignal<bool>,
    session_timeout_minutes: RwSignal<String>,
    password_min_length: RwSignal<String>,
    ip_whitelist: RwSignal<String>,
}

impl Default for SecurityFormState {
    fn default() -> Self {
        let state = Self {
            mfa_required: create_rw_signal(false),
            session_timeout_minutes: create_rw_signal(String::new()),
            password_min_length: create_rw_signal(String::new()),
            ip_whitelist: create_rw_signal(String::new()),
        };
        state.load_from(&SecuritySettings::default());
        state
    }
}

impl SecurityFormState {
    pub fn mfa_required_signal(&self) -> RwSignal<bool> {
        self.mfa_required
    }

    pub fn session_timeout_signal(&self) -> RwSignal<String> {
        self.session_timeout_minutes
    }

    pub fn password_min_length_signal(&self) -> RwSignal<String> {
        self.password_min_length
    }

    pub fn ip_whitelist_signal(&self) -> RwSignal<String> {
        self.ip_whitelist
    }

    /// One address per line.
    pub fn load_from(&self, settings: &SecuritySettings) {
        self.mfa_required.set(settings.mfa_required);
        self.session_timeout_minutes
            .set(settings.session_timeout_minutes.to_string());
        self.password_min_length
            .set(settings.password_min_length.to_string());
        self.ip_whitelist.set(settings.ip_whitelist.join("\n"));
    }

    pub fn to_payload(self) -> Result<SecuritySettings, ApiError> {
        let payload = SecuritySettings {
            mfa_required: self.mfa_required.get_untracked(),
            session_timeout_minutes: parse_required_u32(
                &self.session_timeout_minutes.get_untracked(),
                "Session timeout",
            )?,
            password_min_length: parse_required_u32(
                &self.password_min_length.get_untracked(),
                "Minimum password length",
            )?,
            ip_whitelist: split_list(&self.ip_whitelist.get_untracked()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Clone, Copy)]
pub struct BrandingFormState {
    company_name: RwSignal<String>,
    company_name_ar: RwSignal<String>,
    primary_color: RwSignal<String>,
    secondary_color: RwSignal<String>,
    custom_logo: RwSignal<String>,
}

impl Default for BrandingFormState {
    fn default() -> Self {
        let state = Self {
            company_name: create_rw_signal(String::new()),
            company_name_ar: create_rw_signal(String::new()),
            primary_color: create_rw_signal(String::new()),
            secondary_color: create_rw_signal(String::new()),
            custom_logo: create_rw_signal(String::new()),
        };
        state.load_from(&BrandingSettings::default());
        state
    }
}

impl BrandingFormState {
    pub fn company_name_signal(&self) -> RwSignal<String> {
        self.company_name
    }

    pub fn company_name_ar_signal(&self) -> RwSignal<String> {
        self.company_name_ar
    }

    pub fn primary_color_signal(&self) -> RwSignal<String> {
        self.primary_color
    }

    pub fn secondary_color_signal(&self) -> RwSignal<String> {
        self.secondary_color
    }

    pub fn custom_logo_signal(&self) -> RwSignal<String> {
        self.custom_logo
    }

    pub fn load_from(&self, settings: &BrandingSettings) {
        self.company_name.set(settings.company_name.clone());
        self.company_name_ar.set(settings.company_name_ar.clone());
        self.primary_color.set(settings.primary_color.clone());
        self.secondary_color.set(settings.secondary_color.clone());
        self.custom_logo.set(settings.custom_logo.clone());
    }

    pub fn to_payload(self) -> Result<BrandingSettings, ApiError> {
        let payload = BrandingSettings {
            company_name: self.company_name.get_untracked().trim().to_string(),
            company_name_ar: self.company_name_ar.get_untracked().trim().to_string(),
            primary_color: self.primary_color.get_untracked().trim().to_string(),
            secondary_color: self.secondary_color.get_untracked().trim().to_string(),
            custom_logo: self.custom_logo.get_untracked().trim().to_string(),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Clone, Copy)]
pub struct PrivacyFormState {
    data_retention_days: RwSignal<String>,
    data_export_format: RwSignal<String>,
    anonymize_departed: RwSignal<bool>,
}

impl Default for PrivacyFormState {
    fn default() -> Self {
        let state = Self {
            data_retention_days: create_rw_signal(String::new()),
            data_export_format: create_rw_signal(String::new()),
            anonymize_departed: create_rw_signal(false),
        };
        state.load_from(&PrivacySettings::default());
        state
    }
}

impl PrivacyFormState {
    pub fn data_retention_days_signal(&self) -> RwSignal<String> {
        self.data_retention_days
    }

    pub fn data_export_format_signal(&self) -> RwSignal<String> {
        self.data_export_format
    }

    pub fn anonymize_departed_signal(&self) -> RwSignal<bool> {
        self.anonymize_departed
    }

    pub fn load_from(&self, settings: &PrivacySettings) {
        self.data_retention_days
            .set(settings.data_retention_days.to_string());
        self.data_export_format
            .set(settings.data_export_format.as_str().to_string());
        self.anonymize_departed.set(settings.anonymize_departed);
    }

    pub fn to_payload(self) -> Result<PrivacySettings, ApiError> {
        let payload = PrivacySettings {
            data_retention_days: parse_required_u32(
                &self.data_retention_days.get_untracked(),
                "Data retention",
            )?,
            data_export_format: parse_choice(
                &self.data_export_format.get_untracked(),
                ExportFormat::parse,
                "export format",
            )?,
            anonymize_departed: self.anonymize_departed.get_untracked(),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Clone, Copy)]
pub struct ApiKeyFormState {
    name: RwSignal<String>,
    name_ar: RwSignal<String>,
}

impl Default for ApiKeyFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            name_ar: create_rw_signal(String::new()),
        }
    }
}

impl ApiKeyFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn name_ar_signal(&self) -> RwSignal<String> {
        self.name_ar
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.name_ar.set(String::new());
    }

    pub fn to_payload(self) -> Result<ApiKeyPayload, ApiError> {
        let payload = ApiKeyPayload {
            name: self.name.get_untracked().trim().to_string(),
            name_ar: optional_string(self.name_ar.get_untracked()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn security_form_reads_one_address_per_line() {
        with_runtime(|| {
            let form = SecurityFormState::default();
            assert_eq!(form.session_timeout_signal().get(), "60");
            form.ip_whitelist_signal()
                .set("10.0.0.1\n\n 2001:db8::1 ".into());
            form.mfa_required_signal().set(true);
            let payload = form.to_payload().unwrap();
            assert!(payload.mfa_required);
            assert_eq!(payload.ip_whitelist, vec!["10.0.0.1", "2001:db8::1"]);
        });
    }

    #[test]
    fn security_form_rejects_out_of_range_timeout() {
        with_runtime(|| {
            let form = SecurityFormState::default();
            form.session_timeout_signal().set("2".into());
            assert!(form.to_payload().unwrap_err().is_validation());
            form.session_timeout_signal().set("ten".into());
            assert_eq!(
                form.to_payload().unwrap_err().error,
                "Session timeout must be a whole number"
            );
        });
    }

    #[test]
    fn branding_form_requires_company_name() {
        with_runtime(|| {
            let form = BrandingFormState::default();
            assert_eq!(form.primary_color_signal().get(), "#1e40af");
            assert!(form.to_payload().is_err());
            form.company_name_signal().set(" Al-Rashid Law ".into());
            assert_eq!(form.to_payload().unwrap().company_name, "Al-Rashid Law");
        });
    }

    #[test]
    fn privacy_form_round_trips_loaded_settings() {
        with_runtime(|| {
            let form = PrivacyFormState::default();
            let settings = PrivacySettings {
                data_retention_days: 730,
                data_export_format: ExportFormat::Xlsx,
                anonymize_departed: true,
            };
            form.load_from(&settings);
            assert_eq!(form.to_payload().unwrap(), settings);

            form.data_retention_days_signal().set("10".into());
            assert!(form.to_payload().is_err());
        });
    }

    #[test]
    fn api_key_form_drops_blank_arabic_name() {
        with_runtime(|| {
            let form = ApiKeyFormState::default();
            assert!(form.to_payload().is_err());
            form.name_signal().set("Zapier".into());
            form.name_ar_signal().set("  ".into());
            assert_eq!(form.to_payload().unwrap().name_ar, None);
        });
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

wire_enum! {
    ExportFormat {
        Json => "json", "JSON",
        Csv => "csv", "CSV",
        Xlsx => "xlsx", "Excel (XLSX)",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySettings {
    pub mfa_required: bool,
    #[validate(range(min = 5, max = 1440, message = "Session timeout must be between 5 and 1440 minutes"))]
    pub session_timeout_minutes: u32,
    #[validate(range(min = 8, max = 128, message = "Minimum password length must be between 8 and 128"))]
    pub password_min_length: u32,
    #[validate(custom(function = "super::validation::validate_ip_list"))]
    pub ip_whitelist: Vec<String>,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            mfa_required: false,
            session_timeout_minutes: 60,
            password_min_length: 8,
            ip_whitelist: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingSettings {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    pub company_name_ar: String,
    #[validate(custom(function = "super::validation::validate_hex_color"))]
    pub primary_color: String,
    #[validate(custom(function = "super::validation::validate_hex_color"))]
    pub secondary_color: String,
    #[validate(custom(function = "super::validation::validate_optional_url"))]
    pub custom_logo: String,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            company_name_ar: String::new(),
            primary_color: "#1e40af".to_string(),
            secondary_color: "#64748b".to_string(),
            custom_logo: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacySettings {
    #[validate(range(min = 30, max = 3650, message = "Data retention must be between 30 and 3650 days"))]
    pub data_retention_days: u32,
    pub data_export_format: ExportFormat,
    pub anonymize_departed: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            data_retention_days: 365,
            data_export_format: ExportFormat::Json,
            anonymize_departed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub masked_key: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
}

/// Returned once on creation; `key` is never shown again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedApiKey {
    #[serde(flatten)]
    pub api_key: ApiKey,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyPayload {
    #[validate(length(min = 1, max = 100, message = "Key name must be 1 to 100 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnterpriseSettings {
    pub security: SecuritySettings,
    pub branding: BrandingSettings,
    pub privacy: PrivacySettings,
    pub api_keys: Vec<ApiKey>,
}

/// The independently saved settings sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Security,
    Branding,
    Privacy,
}

impl SettingsSection {
    pub fn path_segment(&self) -> &'static str {
        match self {
            SettingsSection::Security => "security",
            SettingsSection::Branding => "branding",
            SettingsSection::Privacy => "privacy",
        }
    }
}

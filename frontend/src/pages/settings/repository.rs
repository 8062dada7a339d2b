use crate::api::{ApiClient, ApiError};
use crate::models::settings::{
    ApiKeyPayload, BrandingSettings, CreatedApiKey, EnterpriseSettings, PrivacySettings,
    SecuritySettings, SettingsSection,
};
use std::rc::Rc;

/// One section's new values; each section is saved on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Security(SecuritySettings),
    Branding(BrandingSettings),
    Privacy(PrivacySettings),
}

impl SectionUpdate {
    pub fn section(&self) -> SettingsSection {
        match self {
            SectionUpdate::Security(_) => SettingsSection::Security,
            SectionUpdate::Branding(_) => SettingsSection::Branding,
            SectionUpdate::Privacy(_) => SettingsSection::Privacy,
        }
    }
}

#[derive(Clone)]
pub struct SettingsRepository {
    client: Rc<ApiClient>,
}

impl SettingsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load(&self) -> Result<EnterpriseSettings, ApiError> {
        self.client.get_enterprise_settings().await
    }

    pub async fn save_section(&self, update: &SectionUpdate) -> Result<(), ApiError> {
        let section = update.section();
        match update {
            SectionUpdate::Security(payload) => {
                self.client.update_settings_section(section, payload).await
            }
            SectionUpdate::Branding(payload) => {
                self.client.update_settings_section(section, payload).await
            }
            SectionUpdate::Privacy(payload) => {
                self.client.update_settings_section(section, payload).await
            }
        }
    }

    pub async fn create_api_key(&self, payload: ApiKeyPayload) -> Result<CreatedApiKey, ApiError> {
        self.client.create_api_key(&payload).await
    }

    pub async fn revoke_api_key(&self, id: &str) -> Result<(), ApiError> {
        self.client.revoke_api_key(id).await
    }
}

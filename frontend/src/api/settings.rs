use serde::Serialize;

use super::{client::ApiClient, types::ApiError};
use crate::models::settings::{ApiKeyPayload, CreatedApiKey, EnterpriseSettings, SettingsSection};

impl ApiClient {
    pub async fn get_enterprise_settings(&self) -> Result<EnterpriseSettings, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/settings/enterprise", base_url)))
            })
            .await?;
        self.map_typed_response(response).await
    }

    /// Saves one section; the others are left untouched on the server.
    pub async fn update_settings_section<T: Serialize>(
        &self,
        section: SettingsSection,
        payload: &T,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .put(format!(
                        "{}/settings/enterprise/{}",
                        base_url,
                        section.path_segment()
                    ))
                    .json(payload))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn create_api_key(&self, payload: &ApiKeyPayload) -> Result<CreatedApiKey, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/settings/enterprise/api-keys", base_url))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn revoke_api_key(&self, id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .delete(format!("{}/settings/enterprise/api-keys/{}", base_url, id)))
            })
            .await?;
        self.map_empty_response(response).await
    }
}

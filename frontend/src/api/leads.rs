use super::{
    client::ApiClient,
    types::{ApiError, BulkDeleteRequest, BulkDeleteResponse, ListQuery, ListResponse},
};
use crate::models::lead::{Lead, LeadPayload};

impl ApiClient {
    pub async fn list_leads(&self, query: &ListQuery) -> Result<ListResponse<Lead>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = query.to_params("source");
        let response = self
            .send_with_refresh(|| {
                let mut request = self.http_client().get(format!("{}/leads", base_url));
                if !params.is_empty() {
                    request = request.query(&params);
                }
                Ok(request)
            })
            .await?;
        self.map_list_response(response).await
    }

    pub async fn get_lead(&self, id: &str) -> Result<Lead, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(format!("{}/leads/{}", base_url, id))))
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn create_lead(&self, payload: &LeadPayload) -> Result<Lead, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/leads", base_url))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn update_lead(&self, id: &str, payload: &LeadPayload) -> Result<Lead, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .put(format!("{}/leads/{}", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn delete_lead(&self, id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .delete(format!("{}/leads/{}", base_url, id)))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn bulk_delete_leads(&self, ids: Vec<String>) -> Result<BulkDeleteResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = BulkDeleteRequest { ids };
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/leads/bulk-delete", base_url))
                    .json(&body))
            })
            .await?;
        self.map_typed_response(response).await
    }
}

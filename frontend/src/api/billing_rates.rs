use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, BulkDeleteRequest, BulkDeleteResponse, ListQuery, ListResponse},
};
use crate::models::billing::{
    BillingRate, DuplicateGroupPayload, RateGroup, RateGroupPayload, RatePayload, RateStats,
};

impl ApiClient {
    pub async fn list_rates(&self, query: &ListQuery) -> Result<ListResponse<BillingRate>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = query.to_params("type");
        let response = self
            .send_with_refresh(|| {
                let mut request = self.http_client().get(format!("{}/billing/rates", base_url));
                if !params.is_empty() {
                    request = request.query(&params);
                }
                Ok(request)
            })
            .await?;
        self.map_list_response(response).await
    }

    pub async fn get_rate(&self, id: &str) -> Result<BillingRate, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/billing/rates/{}", base_url, id)))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn create_rate(&self, payload: &RatePayload) -> Result<BillingRate, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/billing/rates", base_url))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn update_rate(&self, id: &str, payload: &RatePayload) -> Result<BillingRate, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .put(format!("{}/billing/rates/{}", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    /// Flips `isActive` without touching the rest of the rate.
    pub async fn set_rate_active(&self, id: &str, is_active: bool) -> Result<BillingRate, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .put(format!("{}/billing/rates/{}", base_url, id))
                    .json(&json!({ "isActive": is_active })))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn delete_rate(&self, id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .delete(format!("{}/billing/rates/{}", base_url, id)))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn bulk_delete_rates(&self, ids: Vec<String>) -> Result<BulkDeleteResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = BulkDeleteRequest { ids };
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/billing/rates/bulk-delete", base_url))
                    .json(&body))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn get_rate_stats(&self) -> Result<RateStats, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/billing/rates/stats", base_url)))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn list_rate_groups(&self, query: &ListQuery) -> Result<ListResponse<RateGroup>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = query.to_params("applicableTo");
        let response = self
            .send_with_refresh(|| {
                let mut request = self.http_client().get(format!("{}/billing/groups", base_url));
                if !params.is_empty() {
                    request = request.query(&params);
                }
                Ok(request)
            })
            .await?;
        self.map_list_response(response).await
    }

    pub async fn get_rate_group(&self, id: &str) -> Result<RateGroup, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/billing/groups/{}", base_url, id)))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn create_rate_group(&self, payload: &RateGroupPayload) -> Result<RateGroup, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/billing/groups", base_url))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn update_rate_group(
        &self,
        id: &str,
        payload: &RateGroupPayload,
    ) -> Result<RateGroup, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .patch(format!("{}/billing/groups/{}", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn delete_rate_group(&self, id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .delete(format!("{}/billing/groups/{}", base_url, id)))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn add_rate_to_group(&self, group_id: &str, rate_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/billing/groups/{}/rates", base_url, group_id))
                    .json(&json!({ "rateId": rate_id })))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn remove_rate_from_group(
        &self,
        group_id: &str,
        rate_id: &str,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self.http_client().delete(format!(
                    "{}/billing/groups/{}/rates/{}",
                    base_url, group_id, rate_id
                )))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn duplicate_rate_group(
        &self,
        id: &str,
        payload: &DuplicateGroupPayload,
    ) -> Result<RateGroup, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/billing/groups/{}/duplicate", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }
}

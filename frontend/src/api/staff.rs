use super::{
    client::ApiClient,
    types::{ApiError, BulkDeleteRequest, BulkDeleteResponse, ListQuery, ListResponse},
};
use crate::models::staff::{
    DeparturePayload, InviteStaffPayload, ReinstatePayload, StaffMember, StaffPayload,
};

impl ApiClient {
    pub async fn list_staff(&self, query: &ListQuery) -> Result<ListResponse<StaffMember>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = query.to_params("role");
        let response = self
            .send_with_refresh(|| {
                let mut request = self.http_client().get(format!("{}/staff", base_url));
                if !params.is_empty() {
                    request = request.query(&params);
                }
                Ok(request)
            })
            .await?;
        self.map_list_response(response).await
    }

    pub async fn get_staff_member(&self, id: &str) -> Result<StaffMember, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(format!("{}/staff/{}", base_url, id))))
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn create_staff_member(&self, payload: &StaffPayload) -> Result<StaffMember, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/staff", base_url))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn update_staff_member(
        &self,
        id: &str,
        payload: &StaffPayload,
    ) -> Result<StaffMember, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .put(format!("{}/staff/{}", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn delete_staff_member(&self, id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .delete(format!("{}/staff/{}", base_url, id)))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn bulk_delete_staff(&self, ids: Vec<String>) -> Result<BulkDeleteResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = BulkDeleteRequest { ids };
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/staff/bulk-delete", base_url))
                    .json(&body))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn invite_staff(&self, payload: &InviteStaffPayload) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/staff/invite", base_url))
                    .json(payload))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn record_departure(&self, id: &str, payload: &DeparturePayload) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/staff/{}/departure", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn reinstate_staff(&self, id: &str, payload: &ReinstatePayload) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/staff/{}/reinstate", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_empty_response(response).await
    }
}

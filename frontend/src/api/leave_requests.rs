use super::{
    client::ApiClient,
    types::{ApiError, ListQuery, ListResponse},
};
use crate::models::leave::{CreateLeavePayload, LeaveAction, LeaveRequest, LeaveStats};

impl ApiClient {
    pub async fn list_leave_requests(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = query.to_params("leaveType");
        let response = self
            .send_with_refresh(|| {
                let mut request = self.http_client().get(format!("{}/leave-requests", base_url));
                if !params.is_empty() {
                    request = request.query(&params);
                }
                Ok(request)
            })
            .await?;
        self.map_list_response(response).await
    }

    pub async fn get_leave_request(&self, id: &str) -> Result<LeaveRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/leave-requests/{}", base_url, id)))
            })
            .await?;
        self.map_typed_response(response).await
    }

    pub async fn create_leave_request(
        &self,
        payload: &CreateLeavePayload,
    ) -> Result<LeaveRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/leave-requests", base_url))
                    .json(payload))
            })
            .await?;
        self.map_typed_response(response).await
    }

    /// Posts one workflow transition; the caller reloads the request afterwards.
    pub async fn perform_leave_action(&self, id: &str, action: &LeaveAction) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = action.body();
        let segment = action.path_segment();
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/leave-requests/{}/{}", base_url, id, segment))
                    .json(&body))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn get_leave_stats(&self) -> Result<LeaveStats, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/leave-requests/stats", base_url)))
            })
            .await?;
        self.map_typed_response(response).await
    }
}

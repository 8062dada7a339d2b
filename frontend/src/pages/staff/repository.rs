use crate::api::{ApiClient, ApiError, BulkDeleteResponse, ListQuery, ListResponse};
use crate::models::staff::{
    DeparturePayload, InviteStaffPayload, ReinstatePayload, StaffMember, StaffPayload,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct StaffRepository {
    client: Rc<ApiClient>,
}

impl StaffRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, query: ListQuery) -> Result<ListResponse<StaffMember>, ApiError> {
        self.client.list_staff(&query).await
    }

    pub async fn save(&self, id: Option<String>, payload: StaffPayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self
                .client
                .update_staff_member(&id, &payload)
                .await
                .map(|_| ()),
            None => self.client.create_staff_member(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_staff_member(id).await
    }

    pub async fn bulk_delete(&self, ids: Vec<String>) -> Result<BulkDeleteResponse, ApiError> {
        self.client.bulk_delete_staff(ids).await
    }

    pub async fn invite(&self, payload: InviteStaffPayload) -> Result<(), ApiError> {
        self.client.invite_staff(&payload).await
    }

    pub async fn record_departure(&self, id: &str, payload: DeparturePayload) -> Result<(), ApiError> {
        self.client.record_departure(id, &payload).await
    }

    pub async fn reinstate(&self, id: &str, payload: ReinstatePayload) -> Result<(), ApiError> {
        self.client.reinstate_staff(id, &payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::models::staff::StaffRole;
    use chrono::NaiveDate;
    use serde_json::json;

    fn repo(server: &MockServer) -> StaffRepository {
        StaffRepository::new(ApiClient::new_with_base_url(server.url("/api")))
    }

    #[tokio::test]
    async fn list_filters_by_role_and_status() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/staff");
            then.status(200).json_body(json!({ "data": [], "total": 0 }));
        });

        repo(&server)
            .list(ListQuery {
                status: Some("departed".into()),
                kind: Some("partner".into()),
                ..ListQuery::default()
            })
            .await
            .unwrap();

        let sent = server.received_for(GET, "/api/staff");
        assert_eq!(sent[0].query_value("status"), Some("departed"));
        assert_eq!(sent[0].query_value("role"), Some("partner"));
    }

    #[tokio::test]
    async fn departure_and_reinstate_post_their_bodies() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/staff/s1/departure");
            then.status(200).json_body(json!({ "success": true }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/staff/s1/reinstate");
            then.status(200).json_body(json!({ "success": true }));
        });

        let repo = repo(&server);
        repo.record_departure(
            "s1",
            DeparturePayload {
                reason: "Relocated abroad".into(),
                departed_at: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
            },
        )
        .await
        .unwrap();
        repo.reinstate("s1", ReinstatePayload { role: StaffRole::Partner })
            .await
            .unwrap();

        let departure = server.received_for(POST, "/api/staff/s1/departure");
        assert_eq!(
            departure[0].body,
            Some(json!({ "reason": "Relocated abroad", "departedAt": "2025-05-31" }))
        );
        let reinstate = server.received_for(POST, "/api/staff/s1/reinstate");
        assert_eq!(reinstate[0].body, Some(json!({ "role": "partner" })));
    }

    #[tokio::test]
    async fn invite_conflict_is_reported() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/staff/invite");
            then.status(409)
                .json_body(json!({ "error": "User already belongs to this firm", "code": "CONFLICT" }));
        });

        let err = repo(&server)
            .invite(InviteStaffPayload {
                email: "huda@firm.test".into(),
                role: StaffRole::Lawyer,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "User already belongs to this firm");
        assert_eq!(err.code, "CONFLICT");
    }
}

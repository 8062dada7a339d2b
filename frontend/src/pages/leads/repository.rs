use crate::api::{ApiClient, ApiError, BulkDeleteResponse, ListQuery, ListResponse};
use crate::models::lead::{Lead, LeadPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeadsRepository {
    client: Rc<ApiClient>,
}

impl LeadsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, query: ListQuery) -> Result<ListResponse<Lead>, ApiError> {
        self.client.list_leads(&query).await
    }

    pub async fn save(&self, id: Option<String>, payload: LeadPayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_lead(&id, &payload).await.map(|_| ()),
            None => self.client.create_lead(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_lead(id).await
    }

    pub async fn bulk_delete(&self, ids: Vec<String>) -> Result<BulkDeleteResponse, ApiError> {
        self.client.bulk_delete_leads(ids).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::models::lead::{LeadSource, LeadStatus};
    use serde_json::json;

    fn repo(server: &MockServer) -> LeadsRepository {
        LeadsRepository::new(ApiClient::new_with_base_url(server.url("/api")))
    }

    #[tokio::test]
    async fn list_sends_status_and_source_filters() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leads");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{ "_id": "l1", "firstName": "Noura", "source": "website", "status": "new" }],
                "total": 31
            }));
        });

        let list = repo(&server)
            .list(ListQuery {
                status: Some("new".into()),
                kind: Some("website".into()),
                page: Some(2),
                ..ListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(list.total_count(), 31);
        assert_eq!(list.data[0].source, LeadSource::Website);
        let sent = server.received_for(GET, "/api/leads");
        assert_eq!(sent[0].query_value("status"), Some("new"));
        assert_eq!(sent[0].query_value("source"), Some("website"));
        assert_eq!(sent[0].query_value("page"), Some("2"));
    }

    #[tokio::test]
    async fn save_posts_new_and_puts_existing() {
        let server = MockServer::start_async().await;
        let lead = json!({ "_id": "l2", "firstName": "Sami", "lastName": "Odeh", "source": "referral", "status": "contacted" });
        server.mock(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(201).json_body(lead.clone());
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/leads/l2");
            then.status(200).json_body(lead.clone());
        });
        let payload = LeadPayload {
            first_name: "Sami".into(),
            last_name: "Odeh".into(),
            email: None,
            phone: Some("+966500000000".into()),
            company: None,
            source: LeadSource::Referral,
            status: LeadStatus::Contacted,
            estimated_value: None,
            expected_close_date: None,
            case_type: None,
            description: None,
            notes: None,
            assigned_to: None,
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            territory: None,
            sales_team: None,
            external_crm_id: None,
            tags: vec!["vip".into()],
        };

        let repo = repo(&server);
        repo.save(None, payload.clone()).await.unwrap();
        repo.save(Some("l2".into()), payload).await.unwrap();

        let created = server.received_for(POST, "/api/leads");
        assert_eq!(created[0].body.as_ref().unwrap()["tags"], json!(["vip"]));
        assert_eq!(server.hits(PUT, "/api/leads/l2"), 1);
    }

    #[tokio::test]
    async fn delete_failure_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/leads/l9");
            then.status(404).json_body(json!({ "error": "Lead not found", "code": "NOT_FOUND" }));
        });

        let err = repo(&server).delete("l9").await.unwrap_err();
        assert_eq!(err.error, "Lead not found");
    }
}

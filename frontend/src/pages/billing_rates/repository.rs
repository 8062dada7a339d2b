use crate::api::{ApiClient, ApiError, BulkDeleteResponse, ListQuery, ListResponse};
use crate::models::billing::{
    BillingRate, DuplicateGroupPayload, RateGroup, RateGroupPayload, RatePayload, RateStats,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct BillingRatesRepository {
    client: Rc<ApiClient>,
}

impl BillingRatesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_rates(&self, query: ListQuery) -> Result<ListResponse<BillingRate>, ApiError> {
        self.client.list_rates(&query).await
    }

    pub async fn list_groups(&self, query: ListQuery) -> Result<ListResponse<RateGroup>, ApiError> {
        self.client.list_rate_groups(&query).await
    }

    pub async fn stats(&self) -> Result<RateStats, ApiError> {
        self.client.get_rate_stats().await
    }

    /// Creates when `id` is `None`, otherwise replaces the rate.
    pub async fn save_rate(&self, id: Option<String>, payload: RatePayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_rate(&id, &payload).await.map(|_| ()),
            None => self.client.create_rate(&payload).await.map(|_| ()),
        }
    }

    pub async fn set_rate_active(&self, id: &str, is_active: bool) -> Result<(), ApiError> {
        self.client.set_rate_active(id, is_active).await.map(|_| ())
    }

    pub async fn delete_rate(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_rate(id).await
    }

    pub async fn bulk_delete_rates(&self, ids: Vec<String>) -> Result<BulkDeleteResponse, ApiError> {
        self.client.bulk_delete_rates(ids).await
    }

    pub async fn get_group(&self, id: &str) -> Result<RateGroup, ApiError> {
        self.client.get_rate_group(id).await
    }

    pub async fn save_group(
        &self,
        id: Option<String>,
        payload: RateGroupPayload,
    ) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_rate_group(&id, &payload).await.map(|_| ()),
            None => self.client.create_rate_group(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete_group(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_rate_group(id).await
    }

    pub async fn add_rate_to_group(&self, group_id: &str, rate_id: &str) -> Result<(), ApiError> {
        self.client.add_rate_to_group(group_id, rate_id).await
    }

    pub async fn remove_rate_from_group(&self, group_id: &str, rate_id: &str) -> Result<(), ApiError> {
        self.client.remove_rate_from_group(group_id, rate_id).await
    }

    pub async fn duplicate_group(
        &self,
        id: &str,
        payload: DuplicateGroupPayload,
    ) -> Result<RateGroup, ApiError> {
        self.client.duplicate_rate_group(id, &payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::models::billing::{ApplicableTo, Currency, RateCategory, RateType};
    use serde_json::json;

    fn repo(server: &MockServer) -> BillingRatesRepository {
        BillingRatesRepository::new(ApiClient::new_with_base_url(server.url("/api")))
    }

    fn rate_payload() -> RatePayload {
        RatePayload {
            name: "Senior associate hour".into(),
            name_ar: "ساعة محامي أول".into(),
            description: None,
            description_ar: None,
            rate_type: RateType::Hourly,
            category: RateCategory::Research,
            amount: 900.0,
            currency: Currency::Sar,
            unit: Some("hour".into()),
            minimum_charge: None,
            rounding_increment: None,
            is_active: true,
            group_id: None,
        }
    }

    #[tokio::test]
    async fn save_rate_posts_new_and_puts_existing() {
        let server = MockServer::start_async().await;
        let created = json!({
            "_id": "r1", "name": "Senior associate hour", "type": "hourly",
            "category": "research", "amount": 900, "currency": "SAR"
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/billing/rates");
            then.status(201).json_body(created.clone());
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/billing/rates/r1");
            then.status(200).json_body(created.clone());
        });

        let repo = repo(&server);
        repo.save_rate(None, rate_payload()).await.unwrap();
        repo.save_rate(Some("r1".into()), rate_payload()).await.unwrap();

        assert_eq!(server.hits(POST, "/api/billing/rates"), 1);
        let put = server.received_for(PUT, "/api/billing/rates/r1");
        assert_eq!(put[0].body.as_ref().unwrap()["category"], "research");
    }

    #[tokio::test]
    async fn save_group_creates_and_patches() {
        let server = MockServer::start_async().await;
        let group = json!({ "_id": "g1", "name": "Corporate", "applicableTo": ["clients"] });
        server.mock(|when, then| {
            when.method(POST).path("/api/billing/groups");
            then.status(201).json_body(group.clone());
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/api/billing/groups/g1");
            then.status(200).json_body(group.clone());
        });
        let payload = RateGroupPayload {
            name: "Corporate".into(),
            name_ar: "الشركات".into(),
            description: None,
            description_ar: None,
            color: "#0f766e".into(),
            discount: Some(15.0),
            applicable_to: vec![ApplicableTo::Clients, ApplicableTo::Cases],
            is_default: false,
            is_active: true,
        };

        let repo = repo(&server);
        repo.save_group(None, payload.clone()).await.unwrap();
        repo.save_group(Some("g1".into()), payload).await.unwrap();

        let created = server.received_for(POST, "/api/billing/groups");
        assert_eq!(
            created[0].body.as_ref().unwrap()["applicableTo"],
            json!(["clients", "cases"])
        );
        assert_eq!(server.hits(PATCH, "/api/billing/groups/g1"), 1);
    }
}

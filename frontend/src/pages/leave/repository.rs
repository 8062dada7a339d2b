use crate::api::{ApiClient, ApiError, ListQuery, ListResponse};
use crate::models::leave::{CreateLeavePayload, LeaveAction, LeaveRequest, LeaveStats};
use crate::models::staff::{StaffMember, StaffStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, query: ListQuery) -> Result<ListResponse<LeaveRequest>, ApiError> {
        self.client.list_leave_requests(&query).await
    }

    pub async fn stats(&self) -> Result<LeaveStats, ApiError> {
        self.client.get_leave_stats().await
    }

    pub async fn get(&self, id: &str) -> Result<LeaveRequest, ApiError> {
        self.client.get_leave_request(id).await
    }

    pub async fn create(&self, payload: CreateLeavePayload) -> Result<(), ApiError> {
        self.client.create_leave_request(&payload).await.map(|_| ())
    }

    pub async fn perform(&self, id: &str, action: &LeaveAction) -> Result<(), ApiError> {
        self.client.perform_leave_action(id, action).await
    }

    /// Active colleagues offered as handover delegates. Users who may not
    /// list staff simply get no choices.
    pub async fn delegates(&self) -> Vec<StaffMember> {
        let query = ListQuery {
            status: Some(StaffStatus::Active.as_str().to_string()),
            per_page: Some(100),
            ..ListQuery::default()
        };
        match self.client.list_staff(&query).await {
            Ok(list) => list.data,
            Err(err) => {
                log::warn!("delegate list unavailable: {}", err);
                Vec::new()
            }
        }
    }
}

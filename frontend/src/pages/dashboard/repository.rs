use crate::api::{ApiClient, ApiError};
use crate::models::{billing::RateStats, leave::LeaveStats};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub rates: Option<RateStats>,
    pub leave: Option<LeaveStats>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Each statistics endpoint may fail on its own (a lawyer cannot read
    /// billing stats, for instance); only when both fail is it an error.
    pub async fn load_overview(&self) -> Result<DashboardOverview, ApiError> {
        let rates = self.client.get_rate_stats().await;
        let leave = self.client.get_leave_stats().await;
        match (rates, leave) {
            (Err(err), Err(_)) => Err(err),
            (rates, leave) => {
                if let Err(err) = &rates {
                    log::warn!("rate statistics unavailable: {}", err);
                }
                if let Err(err) = &leave {
                    log::warn!("leave statistics unavailable: {}", err);
                }
                Ok(DashboardOverview {
                    rates: rates.ok(),
                    leave: leave.ok(),
                })
            }
        }
    }
}

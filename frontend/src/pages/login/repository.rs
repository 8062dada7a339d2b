use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::utils::storage;
    use serde_json::json;

    #[tokio::test]
    async fn login_repository_persists_session_and_logs_out() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({
                "accessToken": "access-1",
                "refreshToken": "refresh-1",
                "user": { "_id": "u1", "email": "maha@firm.test", "role": "owner" }
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(200).json_body(json!({ "success": true }));
        });

        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let response = repo
            .login(LoginRequest {
                email: "maha@firm.test".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.id, "u1");
        assert_eq!(
            storage::get_item(storage::REFRESH_TOKEN_KEY).as_deref(),
            Some("refresh-1")
        );

        repo.logout().await.unwrap();
        assert!(storage::get_item(storage::ACCESS_TOKEN_KEY).is_none());
        let logout = server.received_for(POST, "/api/auth/logout");
        assert_eq!(logout[0].body, Some(json!({ "refreshToken": "refresh-1" })));
    }
}

use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RefreshResponse, UserResponse},
};
use crate::utils::storage;

fn persist_tokens(access_token: &str, refresh_token: Option<&str>) -> Result<(), ApiError> {
    storage::set_item(storage::ACCESS_TOKEN_KEY, access_token)?;
    if let Some(refresh) = refresh_token {
        storage::set_item(storage::REFRESH_TOKEN_KEY, refresh)?;
    }
    Ok(())
}

fn persist_session(response: &LoginResponse) -> Result<(), ApiError> {
    persist_tokens(&response.access_token, response.refresh_token.as_deref())?;
    let user = serde_json::to_string(&response.user)
        .map_err(|e| ApiError::unknown(format!("Failed to store user: {}", e)))?;
    storage::set_item(storage::CURRENT_USER_KEY, &user)?;
    Ok(())
}

pub fn stored_user() -> Option<UserResponse> {
    storage::get_item(storage::CURRENT_USER_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(&request),
            )
            .await?;
        let login: LoginResponse = self.map_typed_response(response).await?;
        persist_session(&login)?;
        Ok(login)
    }

    /// Exchanges the stored refresh token for a new access token.
    pub async fn refresh_session(&self) -> Result<(), ApiError> {
        let refresh_token = storage::get_item(storage::REFRESH_TOKEN_KEY)
            .ok_or_else(|| ApiError::unknown("No refresh token"))?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.http_client()
                    .post(format!("{}/auth/refresh", base_url))
                    .json(&json!({ "refreshToken": refresh_token })),
            )
            .await?;
        let refreshed: RefreshResponse = self.map_typed_response(response).await?;
        persist_tokens(&refreshed.access_token, refreshed.refresh_token.as_deref())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let refresh = storage::get_item(storage::REFRESH_TOKEN_KEY);
        let body = match refresh {
            Some(token) => json!({ "refreshToken": token }),
            None => json!({}),
        };
        let result = match self
            .execute(
                self.http_client()
                    .post(format!("{}/auth/logout", base_url))
                    .json(&body),
            )
            .await
        {
            Ok(response) => self.map_empty_response(response).await,
            Err(err) => Err(err),
        };
        storage::clear_session();
        result
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(format!("{}/auth/me", base_url))))
            .await?;
        self.map_typed_response(response).await
    }
}

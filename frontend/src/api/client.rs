use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Client, Request, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{ApiError, ListResponse};
use crate::{config, utils::storage};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Sends the request built by `build`; on 401 refreshes the session once
    /// and replays a freshly built request.
    pub(crate) async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let response = self.execute(build()?).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        match self.refresh_session().await {
            Ok(()) => self.execute(build()?).await,
            Err(err) => {
                log::debug!("session refresh skipped: {}", err);
                Ok(response)
            }
        }
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let mut request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        attach_bearer_token(&mut request);

        if let Some(result) = test_hooks::dispatch(&request) {
            return result;
        }

        let method = request.method().clone();
        let url = request.url().path().to_string();
        self.client.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            storage::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}

    pub(crate) fn map_error_payload_parse_failure(status: StatusCode) -> ApiError {
        ApiError::request_failed(format!("Request failed with status {}", status.as_u16()))
    }

    async fn read_body(response: Response) -> Result<(StatusCode, String), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        if status.is_success() {
            Ok((status, body))
        } else {
            let err = error_from_body(status, &body);
            log::warn!("request failed with {}: {}", status.as_u16(), err.error);
            Err(err)
        }
    }

    pub(crate) async fn map_json_response(&self, response: Response) -> Result<Value, ApiError> {
        let (_, body) = Self::read_body(response).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    /// Decodes a single entity, unwrapping the `{ success, data }` envelope
    /// when the server uses it.
    pub(crate) async fn map_typed_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let value = self.map_json_response(response).await?;
        serde_json::from_value(unwrap_envelope(value))
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn map_list_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<ListResponse<T>, ApiError> {
        let value = self.map_json_response(response).await?;
        let value = match value {
            Value::Array(items) => serde_json::json!({ "data": items }),
            other => other,
        };
        serde_json::from_value(value)
            .map_err(|e| ApiError::unknown(format!("Failed to parse list response: {}", e)))
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        Self::read_body(response).await.map(|_| ())
    }
}

fn attach_bearer_token(request: &mut Request) {
    if request.headers().contains_key(AUTHORIZATION) {
        return;
    }
    let Some(token) = storage::get_item(storage::ACCESS_TOKEN_KEY) else {
        return;
    };
    if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
        request.headers_mut().insert(AUTHORIZATION, value);
    }
}

/// Single-record keys some endpoints use instead of `data`.
const LEGACY_RECORD_KEYS: &[&str] = &["billingRate"];

pub(crate) fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("success") => {
            if let Some(data) = map.remove("data") {
                return data;
            }
            match LEGACY_RECORD_KEYS.iter().find(|key| map.contains_key(**key)) {
                Some(key) => map.remove(*key).unwrap_or(Value::Null),
                None => Value::Object(map),
            }
        }
        other => other,
    }
}

fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return ApiClient::map_error_payload_parse_failure(status);
    };
    let message = value
        .get("error")
        .and_then(|e| {
            e.as_str()
                .map(str::to_string)
                .or_else(|| e.get("message").and_then(|m| m.as_str()).map(str::to_string))
        })
        .or_else(|| value.get("message").and_then(|m| m.as_str()).map(str::to_string));
    let Some(message) = message else {
        return ApiClient::map_error_payload_parse_failure(status);
    };
    let code = value
        .get("code")
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| "REQUEST_FAILED".to_string());
    ApiError {
        error: message,
        code,
        details: value.get("details").cloned(),
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
mod test_hooks {
    use super::ApiError;

    pub fn dispatch(_request: &reqwest::Request) -> Option<Result<reqwest::Response, ApiError>> {
        None
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_envelope_extracts_data_only_for_envelopes() {
        let wrapped = json!({ "success": true, "data": { "_id": "r1" } });
        assert_eq!(unwrap_envelope(wrapped), json!({ "_id": "r1" }));

        let bare = json!({ "_id": "r1", "data": "kept" });
        assert_eq!(unwrap_envelope(bare.clone()), bare);
    }

    #[test]
    fn unwrap_envelope_reads_legacy_rate_key() {
        let legacy = json!({ "success": true, "billingRate": { "_id": "r7" } });
        assert_eq!(unwrap_envelope(legacy), json!({ "_id": "r7" }));

        let ack = json!({ "success": true, "message": "Deleted" });
        assert_eq!(unwrap_envelope(ack.clone()), ack);
    }

    #[test]
    fn error_from_body_reads_error_message_and_code() {
        let err = error_from_body(
            StatusCode::BAD_REQUEST,
            r#"{ "error": "Amount must be positive", "code": "INVALID_AMOUNT" }"#,
        );
        assert_eq!(err.error, "Amount must be positive");
        assert_eq!(err.code, "INVALID_AMOUNT");

        let err = error_from_body(StatusCode::NOT_FOUND, r#"{ "message": "Rate not found" }"#);
        assert_eq!(err.error, "Rate not found");
        assert_eq!(err.code, "REQUEST_FAILED");
    }

    #[test]
    fn error_from_body_falls_back_on_unparsable_payload() {
        let err = error_from_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.code, "REQUEST_FAILED");
        assert!(err.error.contains("502"));
    }
}

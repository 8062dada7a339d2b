use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::ValidationErrors;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: String,
    #[serde(default)]
    pub firm_id: Option<String>,
    #[serde(default)]
    pub firm_name: Option<String>,
}

impl UserResponse {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role.as_str(), "owner" | "admin")
    }
}

/// Paging block sent alongside `data` by the collection endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub total: Option<u64>,
    pub pages: Option<u32>,
}

/// Paged list payload returned by every collection endpoint. The total
/// arrives either at the top level or inside `pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            page: None,
            pagination: None,
        }
    }
}

impl<T> ListResponse<T> {
    pub fn total_count(&self) -> u64 {
        self.total
            .or_else(|| self.pagination.as_ref().and_then(|p| p.total))
            .unwrap_or(self.data.len() as u64)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    #[serde(default, alias = "deletedCount")]
    pub deleted: u64,
    #[serde(default)]
    pub failed: Vec<String>,
}

/// Common list query: search text, status filter and page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    /// `kind_key` names the secondary filter on the wire (`type`, `source`, `role`...).
    pub fn to_params(&self, kind_key: &'static str) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_string()));
        }
        if let Some(kind) = self.kind.as_deref().filter(|s| !s.is_empty()) {
            params.push((kind_key, kind.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("limit", per_page.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl From<crate::utils::storage::StorageError> for ApiError {
    fn from(error: crate::utils::storage::StorageError) -> Self {
        ApiError::unknown(error.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|msg| msg.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        messages.dedup();
        let summary = messages
            .first()
            .cloned()
            .unwrap_or_else(|| "Validation failed".to_string());
        ApiError {
            error: summary,
            code: "VALIDATION_ERROR".to_string(),
            details: Some(json!({ "errors": messages })),
        }
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }

    pub fn validation_messages(&self) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|details| details.get("errors"))
            .and_then(|errors| errors.as_array())
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;
    use wasm_bindgen_test::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 0.0, max = 100.0, message = "Discount must be between 0 and 100"))]
        discount: f64,
    }

    #[wasm_bindgen_test]
    fn api_error_from_validation_errors_lists_messages() {
        let sample = Sample {
            name: String::new(),
            discount: 150.0,
        };
        let err: ApiError = sample.validate().unwrap_err().into();
        assert!(err.is_validation());
        assert_eq!(
            err.validation_messages(),
            vec![
                "Discount must be between 0 and 100".to_string(),
                "Name is required".to_string()
            ]
        );
        assert_eq!(err.error, "Discount must be between 0 and 100");
    }

    #[wasm_bindgen_test]
    fn list_query_skips_empty_filters() {
        let query = ListQuery {
            search: Some("  ".into()),
            status: Some("approved".into()),
            kind: Some(String::new()),
            page: Some(2),
            per_page: Some(20),
        };
        assert_eq!(
            query.to_params("type"),
            vec![
                ("status", "approved".to_string()),
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[wasm_bindgen_test]
    fn list_response_defaults_total_to_len() {
        let list: ListResponse<Value> =
            serde_json::from_value(json!({ "data": [{}, {}] })).unwrap();
        assert_eq!(list.total_count(), 2);
    }

    #[wasm_bindgen_test]
    fn list_response_reads_total_from_pagination_block() {
        let list: ListResponse<Value> = serde_json::from_value(json!({
            "success": true,
            "data": [{}, {}],
            "pagination": { "page": 1, "limit": 2, "total": 45, "pages": 23 }
        }))
        .unwrap();
        assert_eq!(list.total_count(), 45);

        let both: ListResponse<Value> = serde_json::from_value(json!({
            "data": [], "total": 7, "pagination": { "total": 45 }
        }))
        .unwrap();
        assert_eq!(both.total_count(), 7);
    }

    #[wasm_bindgen_test]
    fn user_display_name_falls_back_to_email() {
        let user: UserResponse = serde_json::from_value(json!({
            "_id": "u1",
            "email": "a@firm.test",
            "role": "lawyer"
        }))
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name(), "a@firm.test");
        assert!(!user.is_admin());
    }
}

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "PAGE_SIZE")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub page_size: u32,
}

impl ResolvedConfig {
    fn from_runtime(cfg: RuntimeConfig) -> Self {
        let api_base_url = cfg
            .api_base_url
            .map(|url| normalize_base_url(&url))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let page_size = cfg
            .page_size
            .filter(|size| (1..=200).contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self {
            api_base_url,
            page_size,
        }
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn cache(cfg: RuntimeConfig) -> ResolvedConfig {
    let resolved = ResolvedConfig::from_runtime(cfg);
    let _ = RESOLVED.set(resolved.clone());
    RESOLVED.get().cloned().unwrap_or(resolved)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};
    use wasm_bindgen::JsValue;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        // Expect an optional global object such as window.__LEXBOARD_ENV = { API_BASE_URL: "..." }
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let string_field = |keys: &[&str]| {
            keys.iter().find_map(|key| {
                js_sys::Reflect::get(&any, &JsValue::from_str(key))
                    .ok()
                    .and_then(|v| v.as_string())
            })
        };
        let number_field = |keys: &[&str]| {
            keys.iter().find_map(|key| {
                js_sys::Reflect::get(&any, &JsValue::from_str(key))
                    .ok()
                    .and_then(|v| v.as_f64())
            })
        };
        Some(RuntimeConfig {
            api_base_url: string_field(&["API_BASE_URL", "api_base_url"]),
            page_size: number_field(&["PAGE_SIZE", "page_size"]).map(|v| v as u32),
        })
    }

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        read_global("__LEXBOARD_ENV").or_else(|| read_global("__LEXBOARD_CONFIG"))
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let origin = web_sys::window()
            .ok_or_else(|| anyhow!("no window"))?
            .location()
            .origin()
            .map_err(|_| anyhow!("no location origin"))?;
        let response = reqwest::get(format!("{}/config.json", origin))
            .await
            .context("fetching config.json")?;
        if !response.status().is_success() {
            return Err(anyhow!("config.json returned {}", response.status()));
        }
        response
            .json::<RuntimeConfig>()
            .await
            .context("parsing config.json")
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> RuntimeConfig {
    if let Some(cfg) = browser::snapshot_from_globals() {
        log::debug!("Runtime config taken from window globals");
        return cfg;
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::info!("Falling back to default runtime config: {:#}", err);
            RuntimeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn resolved() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    cache(load_runtime_config().await)
}

pub async fn await_api_base_url() -> String {
    resolved().await.api_base_url
}

/// Page size for list views; the default until the config is resolved.
pub fn page_size() -> u32 {
    RESOLVED
        .get()
        .map(|cfg| cfg.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

pub async fn init() {
    let cfg = resolved().await;
    log::info!("API base URL: {}", cfg.api_base_url);
}

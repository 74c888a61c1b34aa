//! Endpoint resolution and API origin configuration.

use std::fmt;

pub const REPORTS_PATH: &str = "/api/reports";
pub const UPLOAD_PATH: &str = "/api/upload";

/// Environment variable naming the API origin (e.g. `https://docs.example.com`).
pub const API_URL_ENV: &str = "DOCBOARD_API_URL";

/// Fallback origin for native builds, matching the backend's default bind address.
#[cfg(not(target_arch = "wasm32"))]
pub const NATIVE_DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";

/// Which slice of the report the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SchemaFilter {
    #[default]
    All,
    Schema(String),
}

impl SchemaFilter {
    /// Sentinel used by the filter `<select>` for "every schema".
    pub const ALL_SENTINEL: &'static str = "all";

    /// Parse a select value; the sentinel and blank values mean `All`.
    pub fn from_select_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == Self::ALL_SENTINEL {
            Self::All
        } else {
            Self::Schema(trimmed.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Schema(id) => id,
        }
    }
}

impl fmt::Display for SchemaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.select_value())
    }
}

/// Path (origin-relative) of the report endpoint for `filter`.
pub fn resolve_endpoint(filter: &SchemaFilter) -> String {
    match filter {
        SchemaFilter::All => REPORTS_PATH.to_string(),
        SchemaFilter::Schema(id) => format!("{REPORTS_PATH}/{}", urlencoding::encode(id)),
    }
}

/// Where API calls go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    /// Explicit origin. `None` means same-origin paths through the reverse proxy.
    pub base_url: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalise_base(&base_url.into()),
        }
    }

    /// Read [`API_URL_ENV`]: at runtime on native, at compile time for the browser bundle.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(value) = std::env::var(API_URL_ENV) {
                return Self {
                    base_url: normalise_base(&value),
                };
            }
        }
        Self {
            base_url: option_env!("DOCBOARD_API_URL").and_then(normalise_base),
        }
    }

    /// Absolute URL for an origin-relative `path`.
    pub fn url_for(&self, path: &str) -> String {
        match self.base_url.as_deref() {
            Some(base) => format!("{base}{path}"),
            None => format!("{}{path}", default_origin()),
        }
    }
}

fn normalise_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn default_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_origin() -> String {
    NATIVE_DEFAULT_ORIGIN.to_string()
}

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

pub use gut_kitchen_model::API_BASE_URL_META;

/// Where the recipes API lives. Built once at startup and handed to [`crate::App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ApiConfig {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Takes the first non-blank candidate, falling back to [`DEFAULT_API_BASE_URL`].
    pub fn resolve<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        candidates
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.trim().is_empty())
            .map(ApiConfig::new)
            .unwrap_or_default()
    }

    /// Page meta tag first, then the value baked in at compile time.
    pub fn from_document() -> Self {
        Self::resolve([
            meta_content(API_BASE_URL_META),
            option_env!("GUT_KITCHEN_API_BASE_URL").map(str::to_string),
        ])
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_API_BASE_URL)
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??
        .get_attribute("content")
}

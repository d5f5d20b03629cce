use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HTTPConfig {
    pub host: String,
    pub port: u16,
}

impl HTTPConfig {
    pub fn connection_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub dist_dir: String,
    /// Written into the served page for the browser app to pick up.
    #[serde(default)]
    pub api_base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub http_config: HTTPConfig,
    pub site_config: SiteConfig,
}

impl AppConfig {
    pub fn load(path_str: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(path_str, |key| std::env::var(key).ok())
    }

    /// The file is optional; anything missing falls back to defaults, and the
    /// `GUT_KITCHEN_*` variables override both.
    pub fn load_with_env<E>(path_str: &str, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let conf = Config::builder()
            .set_default("http.host", "127.0.0.1")?
            .set_default("http.port", 8080_i64)?
            .set_default("site.dist_dir", "dist")?
            .add_source(File::new(path_str, FileFormat::Toml).required(false))
            .build()?;

        let mut http_config = conf.get::<HTTPConfig>("http")?;
        if let Some(host) = env("GUT_KITCHEN_SERVER_HOST") {
            info!("getting server host from env: {host}");
            http_config.host = host;
        } else {
            info!("getting server host from file");
        }
        if let Some(port) = env("GUT_KITCHEN_SERVER_PORT") {
            info!("getting server port from env: {port}");
            http_config.port = port.parse::<u16>().map_err(|_| {
                ConfigError::Message(format!("Failed to parse server port {port:?}"))
            })?;
        }

        let mut site_config = conf.get::<SiteConfig>("site")?;
        if let Some(dist_dir) = env("GUT_KITCHEN_DIST_DIR") {
            info!("getting dist dir from env: {dist_dir}");
            site_config.dist_dir = dist_dir;
        }
        if let Some(api_base_url) = env("GUT_KITCHEN_API_BASE_URL") {
            info!("getting api base url from env: {api_base_url}");
            site_config.api_base_url = Some(api_base_url);
        }

        Ok(AppConfig {
            http_config,
            site_config,
        })
    }
}

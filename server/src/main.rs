use gut_kitchen_server::app_config::AppConfig;
use gut_kitchen_server::site;
use thiserror::Error as ThisError;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, ThisError)]
enum Error {
    #[error("gut_kitchen failed to bind server with io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("gut_kitchen failed to load config from {DEFAULT_CONFIG_PATH}, Config Error {0}")]
    Confg(#[from] config::ConfigError),
    #[error("gut_kitchen failed to set up the site: {0}")]
    Site(#[from] site::Error),
}
type Result<T> = std::result::Result<T, Error>;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = AppConfig::load(DEFAULT_CONFIG_PATH)?;
    let app = site::router(&conf.site_config)?;

    let host_port = conf.http_config.connection_string();
    let listener = tokio::net::TcpListener::bind(&host_port).await?;
    info!("Successfully bound server to {host_port}");

    axum::serve(listener, app).await?;
    Ok(())
}

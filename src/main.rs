use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gemini_suite::config::Config;
use gemini_suite::routes;
use gemini_suite::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_suite=debug,tower_http=debug".into()),
        )
        .init();

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) if std::path::Path::new(path).exists() => {
                return Err(e.context(format!("Invalid configuration in {}", path)));
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }
    let config = config.unwrap_or_else(|| {
        info!("No config file found in {:?}, using defaults", config_paths);
        Config::default()
    });

    // Missing credential is fatal
    let app_state = AppState::new(config.clone()).context("Failed to initialize AI client")?;

    let app = routes::build_app(app_state);

    let host: std::net::IpAddr = config
        .system_config
        .host
        .parse()
        .with_context(|| format!("Invalid host: {}", config.system_config.host))?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP server for the shift reconciliation engine.
//!
//! Environment:
//! - `SHIFT_RECONCILER_CONFIG`: directory containing `shifts.yaml`
//!   (default `./config/default`, falling back to the built-in policy when
//!   that directory has no policy file)
//! - `SHIFT_RECONCILER_ADDR`: bind address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter (default `shift_reconciler=info`)

use std::env;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shift_reconciler::api::{AppState, create_router};
use shift_reconciler::config::ConfigLoader;
use shift_reconciler::error::EngineError;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_reconciler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    info!(
        policy = config.name(),
        version = config.version(),
        default_expected_hours = %config.policy().default_hours(),
        "Shift policy loaded"
    );

    let addr = env::var("SHIFT_RECONCILER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}

fn load_config() -> Result<ConfigLoader, EngineError> {
    match env::var("SHIFT_RECONCILER_CONFIG") {
        Ok(dir) => ConfigLoader::load(dir),
        Err(_) => match ConfigLoader::load(DEFAULT_CONFIG_DIR) {
            Err(EngineError::ConfigNotFound { path }) => {
                warn!(path = %path, "No shift policy file, using built-in policy");
                Ok(ConfigLoader::builtin())
            }
            other => other,
        },
    }
}

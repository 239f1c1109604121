use tracing_subscriber::EnvFilter;

use dqa_api::config::{self, DqaConfig};
use dqa_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    if std::env::args().nth(1).as_deref() == Some("init-config") {
        let path = config::config_path()?;
        if path.exists() {
            return Err(eyre::eyre!("config already exists at {}", path.display()));
        }
        config::save_config_to(&path, &DqaConfig::default())?;
        println!("wrote default config to {}", path.display());
        return Ok(());
    }

    let config = config::load_config()?;
    let state = AppState::from_config(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "dqa-api listening");

    axum::serve(listener, dqa_api::app::router(state)).await?;
    Ok(())
}

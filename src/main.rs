use anyhow::Result;
use axum::serve;
use dotenv::dotenv;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod careers;
use careers::{AppState, config::Config, router};

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast on missing credentials or unreadable PEM material
    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;
    info!(
        base_url = %config.base_url,
        revalidate_secs = config.revalidate_after.as_secs(),
        "ADP client configured"
    );

    info!("Starting server on {}", config.bind_address);
    let tcp_listener = TcpListener::bind(&config.bind_address).await?;

    // Graceful shutdown on CTRL+C
    let shutdown = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            tracing::error!("failed to install CTRL+C handler: {e}");
        });
    };

    serve(tcp_listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yp_core::YappsterConfig;
use yp_enhancer::Enhancer;
use yp_server::{app_with_state, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = YappsterConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Yappster v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config)?;
    if config.enhancer.enabled {
        if state.enhancer().is_available().await {
            info!(host = %config.enhancer.host, model = %config.enhancer.model, "local model connected");
        } else {
            warn!(host = %config.enhancer.host, "local model not reachable, serving local compression only");
        }
    }

    let app = app_with_state(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

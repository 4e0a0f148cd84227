use prompt_enhancer::{build_app, run_server, AppConfig, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.api_key().is_none() {
        warn!("RAPIDAPI_KEY is not set; /api/enhance will answer 500 until it is");
    }
    info!(?config, "starting prompt enhancer");

    let port = config.port;
    let app = build_app(AppState::new(config));

    run_server(app, port).await
}

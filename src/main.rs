use creditwise::{server, Artifacts, Config, Predictor};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting CreditWise loan approval service");

    let config = Config::from_env()?;
    log::info!("Loading artifacts from {}", config.artifact_dir.display());

    // Loaded once; a failure here means nothing can be scored
    let artifacts = Artifacts::load(&config)?;
    let predictor = Arc::new(Predictor::new(artifacts));

    let app = server::router(predictor);

    let addr = SocketAddr::new(config.bind, config.port);
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

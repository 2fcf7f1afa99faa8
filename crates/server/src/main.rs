use std::net::SocketAddr;
use std::sync::Arc;

use sakina_agent::ScreeningEngine;
use sakina_config::{load_settings, ObservabilitySettings};
use sakina_llm::{ChatApiBackend, HttpClassifier};
use sakina_server::{create_router, AppState, Logbook};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = std::env::var("SAKINA_ENV").unwrap_or_else(|_| "default".to_string());
    let settings = load_settings(&env)?;
    init_tracing(&settings.observability);

    tracing::info!(env, "starting sakina screening service");

    let classifier = Arc::new(HttpClassifier::new(&settings.classifier)?);
    let generator = Arc::new(ChatApiBackend::new(&settings.generator)?);
    let engine = Arc::new(ScreeningEngine::new(
        classifier,
        generator,
        settings.generator.max_tokens,
    ));

    let logbook = if settings.logbook.enabled {
        Some(Arc::new(Logbook::new(&settings.logbook.dir)?))
    } else {
        None
    };

    let router = create_router(AppState { engine, logbook }, &settings.server);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing(settings: &ObservabilitySettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    if settings.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install sigterm handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

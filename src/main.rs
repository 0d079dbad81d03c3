//! Skill endpoint server.

use std::sync::Arc;

use alexa_gpt::adapters::http::{skill_router, SkillAppState};
use alexa_gpt::application::standard_skill;
use alexa_gpt::bootstrap::{completion_bridge, StartupError};
use alexa_gpt::config::AppConfig;
use alexa_gpt::telemetry::{init_tracing, LogFormat};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    let _ = init_tracing(&config.server, LogFormat::for_server(&config.server));
    config.validate()?;

    let bridge = completion_bridge(&config.ai)?;
    let skill = standard_skill(bridge)?;

    let app = skill_router(
        SkillAppState::new(Arc::new(skill)),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        model = %config.ai.model,
        "skill endpoint listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

use dotenvy::dotenv;
use rollcall::logging::{init_tracing, shutdown_tracer};
use rollcall::metrics::{init_metrics, metrics_app, set_observability_enabled};
use rollcall::router::init_router;
use rollcall::state::init_app_state;
use rollcall_config::ServerConfig;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = ServerConfig::from_env()?;
    set_observability_enabled(config.observability_enabled);
    init_tracing(config.observability_enabled)?;

    let state = init_app_state(&config).await?;
    let app = init_router(state);

    if let Some(handle) = init_metrics()? {
        let metrics_listener = TcpListener::bind(config.metrics_addr()).await?;
        info!("Metrics available on http://{}/metrics", config.metrics_addr());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on http://localhost:{}", config.port);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);
    info!("Scalar UI available at http://localhost:{}/scalar", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received");
}

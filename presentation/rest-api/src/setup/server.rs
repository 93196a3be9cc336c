use std::time::Duration;

use poem::listener::TcpListener;
use poem::middleware::{Compression, Tracing};
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::api::rate_limit::{ClientRateLimiter, RateLimit};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let info = &config.info;

        let rate_limit = RateLimit::per_minute(config.rate_limit.per_minute);
        if config.rate_limit.enabled {
            spawn_rate_limit_cleanup(rate_limit.limiter());
            info!(
                per_minute = config.rate_limit.per_minute.get(),
                "Rate limiting enabled"
            );
        } else {
            info!("Rate limiting disabled");
        }
        if info.debug {
            info!(
                "API docs at http://{}/docs and http://{}/redoc",
                addr, addr
            );
        }

        let app = build_app(&config, container, rate_limit);

        info!(
            app = %info.name,
            version = %info.version,
            environment = %info.environment,
            "Server running at http://{}",
            addr
        );
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(Duration::from_secs(10)))
            .await?;
        info!("Server stopped");
        Ok(())
    }
}

/// Health at `/`, v1 under the API prefix, docs only in debug mode, wrapped
/// in rate limit, compression, CORS and request tracing.
pub fn build_app(
    config: &AppConfig,
    container: DependencyContainer,
    rate_limit: RateLimit,
) -> impl Endpoint + use<> {
    let info = &config.info;

    let health_service = OpenApiService::new(container.health_api, &info.name, &info.version);
    let api_service = OpenApiService::new(
        (container.user_api, container.analysis_api),
        &info.name,
        &info.version,
    )
    .description("BloomSkin skincare backend: user profiles and Haut.ai skin analysis")
    .server(info.api_prefix.clone());

    let mut app = Route::new();
    if info.debug {
        app = app
            .nest("/docs", api_service.swagger_ui())
            .nest("/redoc", api_service.redoc())
            .nest("/openapi.json", api_service.spec_endpoint());
    }

    app.nest(info.api_prefix.clone(), api_service)
        .nest("/", health_service)
        .with_if(config.rate_limit.enabled, rate_limit)
        .with(Compression::new())
        .with(config.cors.middleware())
        .with(Tracing)
        .data(container.token_verifier)
}

fn spawn_rate_limit_cleanup(limiter: std::sync::Arc<ClientRateLimiter>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
    });
}

/// Resolves on Ctrl-C or SIGTERM (Cloud Run stops instances with SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

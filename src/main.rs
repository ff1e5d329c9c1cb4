//! TopsisCore server entry point.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use topsis_core::adapters::http::{api_router, TopsisAppState};
use topsis_core::adapters::{InMemoryMailer, ResendConfig, ResendMailer};
use topsis_core::config::{AppConfig, EmailConfig, ServerConfig};
use topsis_core::ports::{MailerError, ResultMailer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let addr = config.server.socket_addr()?;
    let mailer = build_mailer(&config.email, config.is_production())?;
    let app = build_app(TopsisAppState::new(mailer), &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        email_enabled = config.email.is_enabled(),
        "TopsisCore listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_mailer(
    email: &EmailConfig,
    production: bool,
) -> Result<Arc<dyn ResultMailer>, MailerError> {
    match email.api_key() {
        Some(api_key) => {
            let config = ResendConfig::new(api_key, email.from_header())
                .with_base_url(&email.api_base_url)
                .with_timeout(email.timeout());
            tracing::info!(from = %config.from, "Emailing results via Resend");
            Ok(Arc::new(ResendMailer::new(config)?))
        }
        // Production keeps nothing; development keeps a bounded history.
        None if production => {
            tracing::warn!("No Resend API key configured; result emails are only logged");
            Ok(Arc::new(InMemoryMailer::with_limit(0)))
        }
        None => {
            tracing::warn!("No Resend API key configured; recent result emails are kept in memory");
            Ok(Arc::new(InMemoryMailer::new()))
        }
    }
}

fn build_app(state: TopsisAppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Explicit origins when configured, permissive otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}

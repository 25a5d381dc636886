//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, slug generator setup, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::repositories::UrlStore;
use crate::domain::slug_generator::SlugGenerator;
use crate::infrastructure::generator::OpenAiSlugGenerator;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Deadline for the initial Redis connection and PING.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - URL store (Redis or in-memory)
/// - Slug generator (when an API key is configured)
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the server stops accepting connections, lets in-flight
/// requests finish within the configured drain deadline, then closes the store.
///
/// # Errors
///
/// Returns an error if:
/// - Redis is selected but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;
    let generator = build_generator(&config)?;

    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        generator,
        config.shortener_settings(),
    ));
    let state = AppState::new(shortener, store.clone());

    let app = app_router(state, &config.cors_origin)?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let signal_received = Arc::new(Notify::new());
    let on_signal = signal_received.clone();

    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            on_signal.notify_one();
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => result?,
        _ = signal_received.notified() => {
            let drain = config.shutdown_timeout();
            match tokio::time::timeout(drain, &mut server).await {
                Ok(result) => result?,
                Err(_) => tracing::warn!(
                    "In-flight requests did not finish within {}s, forcing shutdown",
                    drain.as_secs()
                ),
            }
        }
    }

    if let Err(e) = store.close().await {
        tracing::warn!("Failed to close store: {}", e);
    }
    tracing::info!("Server exited");

    Ok(())
}

/// Connects the store selected by `STORAGE_BACKEND`.
///
/// # Errors
///
/// Returns an error if Redis is selected and the connection or initial PING
/// fails.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    if !config.uses_redis() {
        tracing::warn!("Using in-memory store; mappings are lost on restart");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = RedisStore::connect(
        &config.redis_url,
        config.redis_key_prefix.clone(),
        CONNECT_TIMEOUT,
    )
    .await
    .context("Failed to initialize Redis storage")?;

    Ok(Arc::new(store))
}

/// Builds the slug generator, or `None` when generation is disabled.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_generator(config: &Config) -> Result<Option<Arc<dyn SlugGenerator>>> {
    let Some(settings) = config.openai_settings() else {
        tracing::info!("Slug generation disabled - no API key provided");
        return Ok(None);
    };

    let generator =
        OpenAiSlugGenerator::new(settings).context("Failed to initialize slug generator")?;
    tracing::info!("Slug generation enabled ({})", config.openai_model);

    Ok(Some(Arc::new(generator)))
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutting down server...");
}

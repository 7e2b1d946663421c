//! forecastcal HTTP server
//!
//! Main entry point: loads configuration, resolves the upstream credential,
//! wires the adapters into the calendar service, and serves the API.

use std::{sync::Arc, time::Duration};

use application::ForecastCalendarService;
use application::ports::SecretStorePort;
use infrastructure::{
    AppConfig, EnvSecretStore, IcsCalendarAdapter, VaultSecretStore, WeatherAdapter,
};
use integration_weather::OwmConfig;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecastcal_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("⛅ forecastcal v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.weather.base_url,
        "Configuration loaded"
    );

    // Resolve the upstream credential from the configured secret store
    let secret_store: Arc<dyn SecretStorePort> = if config.vault.enabled {
        let store = VaultSecretStore::new(config.vault.to_vault_config())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to Vault: {e}"))?;
        Arc::new(store)
    } else {
        Arc::new(EnvSecretStore::new())
    };
    config.resolve_secrets(secret_store.as_ref()).await;

    let api_key = config
        .weather
        .api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("No weather API key configured; set OPENWEATHER_API_KEY or enable Vault"))?;

    // Wire adapters into the service
    let weather_adapter = WeatherAdapter::new(OwmConfig {
        base_url: config.weather.base_url.clone(),
        timeout_secs: config.weather.timeout_secs,
        api_key,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;

    let weather: Arc<dyn application::ports::WeatherFeedPort> = Arc::new(weather_adapter);
    let calendar: Arc<dyn application::ports::CalendarPort> = Arc::new(IcsCalendarAdapter::new());

    let calendar_service = ForecastCalendarService::new(Arc::clone(&weather), calendar);

    let state = AppState {
        calendar_service: Arc::new(calendar_service),
        weather,
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📅 Calendar feed: http://{}/calendar?q=London", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}

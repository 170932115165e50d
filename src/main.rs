use prep_portal::{
    AppState, MockAuthService, SessionStore,
    config::{AppConfig, Env},
    create_router,
    slot::{FileSlot, SlotState},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point, responsible for initializing all core
/// components: Configuration, Logging, the Session Store (with its startup
/// restore), and the HTTP Server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prep_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Session Store Initialization
    // The durable slot is a single local file; the identity provider is the
    // in-process mock (no real authentication service exists in this model).
    let slot = Arc::new(FileSlot::new(config.session_file.clone())) as SlotState;
    let auth = Arc::new(MockAuthService::new(&config));
    let sessions = Arc::new(SessionStore::new(slot, auth));

    // Startup restore: load any persisted session before accepting traffic,
    // so the guard never observes a pending restore in normal operation.
    sessions.restore().await;

    // 5. Unified State Assembly
    let app_state = AppState {
        sessions,
        config: config.clone(),
    };

    // 6. Router and Server Startup
    let app = create_router(app_state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("FATAL: failed to bind listener. Check BIND_ADDR.");

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on {}", config.bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at: /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("FATAL: server terminated unexpectedly.");
}

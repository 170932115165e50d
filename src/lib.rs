use axum::{Router, extract::FromRef, http::HeaderName, middleware};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod session;
pub mod slot;

// Module for routing segregation (Public, role-Gated).
pub mod routes;
use models::Role;
use routes::{gated, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the application entry point (main.rs).
pub use auth::{AuthState, MockAuthService};
pub use config::AppConfig;
pub use session::{SessionState, SessionStore};
pub use slot::{FileSlot, MockSlot, SlotState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the session
/// action surface. Page-shell routes are deliberately undocumented here: they
/// are navigation scaffolding for the presentation layer, not an API
/// contract. The resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::login,
        handlers::register,
        handlers::logout,
        handlers::current_session,
        handlers::complete_payment,
        handlers::approve_verification,
    ),
    components(
        schemas(
            models::Session,
            models::Role,
            models::LoginRequest,
            models::RegisterRequest,
            models::SessionSnapshot,
            models::PageShell,
        )
    ),
    tags(
        (name = "prep-portal", description = "Exam-prep portal session and navigation API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Implements the **Unified State Pattern**: the single, thread-safe container
/// holding the Session Store and configuration, shared across all requests.
#[derive(Clone)]
pub struct AppState {
    /// The single source of truth for the current authenticated identity.
    pub sessions: SessionState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These implementations allow handlers and middleware to selectively pull
// components from the shared AppState.

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the application's entire routing structure: the public surface,
/// the four role-gated routers (each wrapped with the guard configured for
/// its role), and the observability/CORS layers.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // Guard layer: one required role per restricted router. The guard runs
    // before any handler below it and resolves to render, redirect, or the
    // loading shell.
    fn guarded(router: Router<AppState>, state: &AppState, role: Role) -> Router<AppState> {
        router.route_layer(middleware::from_fn_with_state(
            (state.clone(), role),
            guard::require_role,
        ))
    }

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public Routes: No guard applied. Includes every redirect target.
        .merge(public::public_routes())
        // Gated Routes: each router carries exactly one required role.
        .merge(guarded(gated::student_routes(), &state, Role::Student))
        .merge(guarded(gated::teacher_routes(), &state, Role::Teacher))
        .merge(guarded(gated::agent_routes(), &state, Role::Agent))
        .merge(guarded(gated::admin_routes(), &state, Role::Admin))
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID for every request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle in
                // a span correlated by the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns x-request-id to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation: extracts the
/// `x-request-id` header (if present) and includes it alongside the HTTP
/// method and URI, so every log line for a request is correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}

use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines the navigation paths and session actions that are accessible to
/// any client, anonymous or authenticated. No guard is applied here: the
/// login, registration, payment, and verification pages must stay reachable
/// precisely *because* they are where denied navigations get redirected.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring checks.
        .route("/health", get(|| async { "ok" }))
        // --- Public Pages ---
        // GET /
        // The landing page, also the redirect target for wrong-role navigations.
        .route("/", get(handlers::landing_page))
        // GET/POST /login
        // The login page and the credential-exchange action. POST activates a
        // session via the mocked identity provider.
        .route("/login", get(handlers::login_page).post(handlers::login))
        // GET/POST /register
        // Student/agent registration. POST creates and activates a session.
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register),
        )
        // GET /teacher-login, /teacher-register
        // Dedicated teacher entry pages. They submit to the same /login and
        // /register actions, with the teacher role hint in the payload.
        .route("/teacher-login", get(handlers::teacher_login_page))
        .route("/teacher-register", get(handlers::teacher_register_page))
        // GET /teacher-verification
        // The redirect target for unverified teachers, plus the simulated
        // approval action that closes that gate.
        .route(
            "/teacher-verification",
            get(handlers::teacher_verification_page),
        )
        .route(
            "/teacher-verification/complete",
            post(handlers::approve_verification),
        )
        // GET /payment
        // The redirect target for unpaid students, plus the simulated payment
        // completion action that closes that gate.
        .route("/payment", get(handlers::payment_page))
        .route("/payment/complete", post(handlers::complete_payment))
        // GET /courses, /subjects
        // Public catalogue pages; no session required to browse.
        .route("/courses", get(handlers::courses_page))
        .route("/subjects", get(handlers::subjects_page))
        // --- Session Surface ---
        // GET /session
        // The current session snapshot (including restore completion).
        .route("/session", get(handlers::current_session))
        // POST /logout
        // Clears the active session and removes the persisted record.
        .route("/logout", post(handlers::logout))
}

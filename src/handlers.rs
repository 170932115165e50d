use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    models::{LoginRequest, PageShell, RegisterRequest, Session, SessionSnapshot},
};

// --- Session Actions ---

/// login
///
/// [Public Action] Exchanges a credential pair for an active session.
/// The mocked provider accepts any non-empty pair; the optional `role` hint
/// (sent by the teacher login page) overrides email-based role inference.
///
/// *Failure semantics*: a generic 401 with no detail — the store logs the
/// underlying cause and leaves the current state untouched.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session activated", body = Session),
        (status = 401, description = "Login failed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Session>, StatusCode> {
    match state
        .sessions
        .login(&payload.email, &payload.password, payload.role)
        .await
    {
        Ok(session) => Ok(Json(session)),
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}

/// register
///
/// [Public Action] Creates a new identity from submitted profile fields and
/// activates it. Non-teacher roles start unpaid, teachers start unverified,
/// and agents receive a freshly generated referral code.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Session created", body = Session),
        (status = 400, description = "Registration failed")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Session>, StatusCode> {
    match state.sessions.register(payload).await {
        Ok(session) => Ok(Json(session)),
        Err(_) => Err(StatusCode::BAD_REQUEST),
    }
}

/// logout
///
/// [Public Action] Clears the active session and its persisted record.
/// Logging out while anonymous is a successful no-op.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Slot could not be cleared")
    )
)]
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    match state.sessions.logout().await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// current_session
///
/// [Public Action] Returns the current session snapshot, including whether
/// the startup restore has completed. This is the read surface the
/// navigation layer polls before rendering role-gated chrome.
#[utoipa::path(
    get,
    path = "/session",
    responses((status = 200, description = "Current session state", body = SessionSnapshot))
)]
pub async fn current_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let (phase, session) = state.sessions.snapshot().await;
    Json(SessionSnapshot {
        restored: phase == crate::session::RestorePhase::Complete,
        session,
    })
}

/// complete_payment
///
/// [Public Action] Records a (simulated) successful payment against the
/// active session, opening the student gate. 409 when no session is active
/// or the write-through fails.
#[utoipa::path(
    post,
    path = "/payment/complete",
    responses(
        (status = 200, description = "Payment recorded", body = Session),
        (status = 409, description = "No active session")
    )
)]
pub async fn complete_payment(State(state): State<AppState>) -> Result<Json<Session>, StatusCode> {
    match state.sessions.complete_payment().await {
        Ok(session) => Ok(Json(session)),
        Err(_) => Err(StatusCode::CONFLICT),
    }
}

/// approve_verification
///
/// [Public Action] Records a (simulated) verification approval against the
/// active session, opening the teacher gate.
#[utoipa::path(
    post,
    path = "/teacher-verification/complete",
    responses(
        (status = 200, description = "Verification recorded", body = Session),
        (status = 409, description = "No active session")
    )
)]
pub async fn approve_verification(
    State(state): State<AppState>,
) -> Result<Json<Session>, StatusCode> {
    match state.sessions.approve_verification().await {
        Ok(session) => Ok(Json(session)),
        Err(_) => Err(StatusCode::CONFLICT),
    }
}

// --- Page Shells ---
//
// One handler per navigation path. Each returns the marker naming the page
// the router resolved; the page-rendering layer (dashboards, marketing copy,
// quiz UI) is an external presentation concern.

pub async fn landing_page() -> Json<PageShell> {
    Json(PageShell::new("landing"))
}

pub async fn login_page() -> Json<PageShell> {
    Json(PageShell::new("login"))
}

pub async fn register_page() -> Json<PageShell> {
    Json(PageShell::new("register"))
}

pub async fn teacher_login_page() -> Json<PageShell> {
    Json(PageShell::new("teacher-login"))
}

pub async fn teacher_register_page() -> Json<PageShell> {
    Json(PageShell::new("teacher-register"))
}

pub async fn teacher_verification_page() -> Json<PageShell> {
    Json(PageShell::new("teacher-verification"))
}

pub async fn payment_page() -> Json<PageShell> {
    Json(PageShell::new("payment"))
}

pub async fn courses_page() -> Json<PageShell> {
    Json(PageShell::new("courses"))
}

pub async fn subjects_page() -> Json<PageShell> {
    Json(PageShell::new("subjects"))
}

pub async fn student_dashboard() -> Json<PageShell> {
    Json(PageShell::new("student-dashboard"))
}

pub async fn agent_dashboard() -> Json<PageShell> {
    Json(PageShell::new("agent-dashboard"))
}

pub async fn admin_dashboard() -> Json<PageShell> {
    Json(PageShell::new("admin-dashboard"))
}

pub async fn teacher_dashboard() -> Json<PageShell> {
    Json(PageShell::new("teacher-dashboard"))
}

pub async fn create_course_page() -> Json<PageShell> {
    Json(PageShell::new("create-course"))
}

pub async fn course_page(Path(id): Path<String>) -> Json<PageShell> {
    Json(PageShell::with_param("course", id))
}

pub async fn quiz_page(Path(id): Path<String>) -> Json<PageShell> {
    Json(PageShell::with_param("quiz", id))
}

pub async fn ai_assistant_page() -> Json<PageShell> {
    Json(PageShell::new("ai-assistant"))
}

pub async fn forum_page() -> Json<PageShell> {
    Json(PageShell::new("forum"))
}

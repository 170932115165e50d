use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Gated Router Module
///
/// Defines the role-restricted navigation paths, one router per required
/// role. Each of these routers is wrapped by `guard::require_role` (in
/// `create_router`) configured with the matching role, so the invariant
/// "every restricted path has exactly one required role" falls out of the
/// structure: a path's role is determined by which router it lives in.
///
/// The guard layer makes the redirect decision before any handler below runs;
/// handlers therefore carry no access checks of their own.

/// Routes requiring an active, paid student session.
pub fn student_routes() -> Router<AppState> {
    Router::new()
        // GET /student
        // The student dashboard (subjects, progress, quiz entry points).
        .route("/student", get(handlers::student_dashboard))
        // GET /course/{id}
        // A single enrolled course's content.
        .route("/course/{id}", get(handlers::course_page))
        // GET /quiz/{id}
        // The timed quiz flow for a course.
        .route("/quiz/{id}", get(handlers::quiz_page))
        // GET /ai-assistant
        // The scripted study-assistant chat.
        .route("/ai-assistant", get(handlers::ai_assistant_page))
        // GET /forum
        // The student discussion forum.
        .route("/forum", get(handlers::forum_page))
}

/// Routes requiring an active, verified teacher session.
pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        // GET /teacher
        // The teacher dashboard (assigned courses, earnings).
        .route("/teacher", get(handlers::teacher_dashboard))
        // GET /create-course
        // The course authoring page.
        .route("/create-course", get(handlers::create_course_page))
}

/// Routes requiring an active agent session. Agents carry no gating flag;
/// role match alone authorizes.
pub fn agent_routes() -> Router<AppState> {
    // GET /agent
    // The referral/withdrawal dashboard.
    Router::new().route("/agent", get(handlers::agent_dashboard))
}

/// Routes requiring an active admin session. Admins carry no gating flag.
pub fn admin_routes() -> Router<AppState> {
    // GET /admin
    // The oversight dashboard (users, teachers, payouts).
    Router::new().route("/admin", get(handlers::admin_dashboard))
}

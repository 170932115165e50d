use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::AppState;
use crate::models::{PageShell, Role, Session};
use crate::session::RestorePhase;

/// RedirectTarget
///
/// The closed set of places a denied navigation can be sent. Every
/// non-authorized guard outcome is one of these; denial is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Anonymous visitor on a restricted page.
    Login,
    /// Authenticated, but the wrong role for this page.
    Home,
    /// Student whose payment gate is still open.
    Payment,
    /// Teacher whose verification gate is still open.
    TeacherVerification,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Home => "/",
            RedirectTarget::Payment => "/payment",
            RedirectTarget::TeacherVerification => "/teacher-verification",
        }
    }
}

/// Decision
///
/// The outcome of evaluating one navigation against the current session.
/// Exactly one is produced per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Session restore has not completed; render a neutral loading state and
    /// make no redirect decision yet.
    Loading,
    /// Render the requested page.
    Render,
    /// Send the visitor elsewhere.
    Redirect(RedirectTarget),
}

/// decide
///
/// The route-guard decision function: pure over its inputs, so the same
/// (phase, session, required role) triple always yields the same outcome.
///
/// The checks are ordered, and the order is load-bearing:
/// 1. a pending restore short-circuits everything (no flash-redirect);
/// 2. identity presence;
/// 3. role match;
/// 4. the role's gating flag (payment for students, verification for
///    teachers);
/// 5. authorized.
pub fn decide(phase: RestorePhase, session: Option<&Session>, required: Role) -> Decision {
    if phase == RestorePhase::Pending {
        return Decision::Loading;
    }

    let Some(session) = session else {
        return Decision::Redirect(RedirectTarget::Login);
    };

    if session.role != required {
        return Decision::Redirect(RedirectTarget::Home);
    }

    if required == Role::Student && !session.payment_complete() {
        return Decision::Redirect(RedirectTarget::Payment);
    }

    if required == Role::Teacher && !session.verification_complete() {
        return Decision::Redirect(RedirectTarget::TeacherVerification);
    }

    Decision::Render
}

/// require_role
///
/// The middleware wrapper applied as a route layer on every role-restricted
/// router. It snapshots the Session Store, delegates the decision to
/// `decide`, and maps the outcome onto HTTP: render runs the inner handler,
/// redirects become 303s, and a pending restore renders the loading shell.
///
/// Installed via `middleware::from_fn_with_state((state, role), require_role)`
/// so each restricted router carries exactly one required role.
pub async fn require_role(
    State((state, required)): State<(AppState, Role)>,
    request: Request,
    next: Next,
) -> Response {
    let (phase, session) = state.sessions.snapshot().await;

    match decide(phase, session.as_ref(), required) {
        Decision::Render => next.run(request).await,
        Decision::Loading => Json(PageShell::new("loading")).into_response(),
        Decision::Redirect(target) => {
            tracing::debug!(
                required = required.as_str(),
                target = target.path(),
                "navigation denied"
            );
            Redirect::to(target.path()).into_response()
        }
    }
}

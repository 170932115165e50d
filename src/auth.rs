use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::{RegisterRequest, Role, Session};

/// AuthService
///
/// Defines the abstract contract with the identity provider. In this
/// client-only model the provider is entirely mocked (no real credential
/// verification happens anywhere), but the trait is the seam where a real
/// authentication service would plug in: the Session Store never knows which
/// implementation it is talking to.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges a credential pair for a fully-populated session.
    ///
    /// `role_hint` overrides role inference when supplied (the dedicated
    /// teacher login page sends one); otherwise the role is inferred from the
    /// email string. Fails only on an unexpected provider error, surfaced as
    /// a generic message.
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        role_hint: Option<Role>,
    ) -> Result<Session, String>;

    /// Creates a new identity from submitted profile fields.
    async fn register(&self, profile: RegisterRequest) -> Result<Session, String>;
}

/// infer_role
///
/// Role inference by substring match on the login identifier, checked in a
/// fixed order: teacher, admin, agent, then student as the fallback.
///
/// This mirrors the placeholder behavior of the mocked provider and is *not*
/// an authenticated claim; a real provider would return the role itself.
/// Isolated here so nothing outside the mock depends on it.
pub fn infer_role(role_hint: Option<Role>, email: &str) -> Role {
    if let Some(role) = role_hint {
        return role;
    }
    if email.contains("teacher") {
        Role::Teacher
    } else if email.contains("admin") {
        Role::Admin
    } else if email.contains("agent") {
        Role::Agent
    } else {
        Role::Student
    }
}

/// generate_referral_code
///
/// Issues a fresh agent referral code. Millisecond timestamps keep codes
/// unique enough for the mocked accounting flow.
pub fn generate_referral_code() -> String {
    format!("REF{}", Utc::now().timestamp_millis())
}

/// display_name
///
/// Derives a presentable name from the email local part ("ada.obi@x.com" ->
/// "ada obi"). Login has no name field, so this stands in until the profile
/// is edited.
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local.replace(['.', '_'], " ")
}

/// MockAuthService
///
/// The mocked identity provider. Accepts any credential pair, suspends once
/// for a fixed simulated delay, and fabricates a session according to the
/// configured entry-path defaults:
///
/// - login marks payment per `login_marks_paid` (default true);
/// - registration marks non-teachers per `registration_marks_paid`
///   (default false) and teachers as paid but unverified;
/// - agents are issued a fresh referral code on either path.
#[derive(Clone)]
pub struct MockAuthService {
    delay: Duration,
    login_marks_paid: bool,
    registration_marks_paid: bool,
    /// When true, all operations return a simulated failure.
    pub should_fail: bool,
}

impl MockAuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.auth_delay_ms),
            login_marks_paid: config.login_marks_paid,
            registration_marks_paid: config.registration_marks_paid,
            should_fail: false,
        }
    }

    pub fn new_failing(config: &AppConfig) -> Self {
        Self {
            should_fail: true,
            ..Self::new(config)
        }
    }

    /// The single suspend point of every mocked call.
    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn authenticate(
        &self,
        email: &str,
        _password: &str,
        role_hint: Option<Role>,
    ) -> Result<Session, String> {
        self.simulate_latency().await;

        if self.should_fail {
            return Err("Mock Auth Error: Simulation requested".to_string());
        }

        let role = infer_role(role_hint, email);

        Ok(Session {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: display_name(email),
            role,
            referral_code: (role == Role::Agent).then(generate_referral_code),
            // Login marks everyone paid by default; only the student gate
            // ever reads the flag.
            is_paid: Some(self.login_marks_paid),
            referred_by: None,
            phone: None,
            qualification: None,
            expertise: None,
            is_verified: (role == Role::Teacher).then_some(true),
        })
    }

    async fn register(&self, profile: RegisterRequest) -> Result<Session, String> {
        self.simulate_latency().await;

        if self.should_fail {
            return Err("Mock Auth Error: Simulation requested".to_string());
        }

        let role = profile.role;

        Ok(Session {
            id: Uuid::new_v4(),
            email: profile.email,
            name: profile.name,
            role,
            referral_code: (role == Role::Agent).then(generate_referral_code),
            is_paid: Some(if role == Role::Teacher {
                true
            } else {
                self.registration_marks_paid
            }),
            referred_by: profile.referral_code,
            phone: profile.phone,
            qualification: profile.qualification,
            expertise: profile.expertise,
            // Fresh teachers must pass verification before their dashboard opens.
            is_verified: (role == Role::Teacher).then_some(false),
        })
    }
}

/// AuthState
///
/// The concrete type used to share the identity provider across the application state.
pub type AuthState = Arc<dyn AuthService>;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Domain Schemas ---

/// Role
///
/// The closed set of identities the platform recognizes. Every role-restricted
/// page names exactly one of these variants, and the gating flags on `Session`
/// are only ever consulted for the variant they belong to (`is_paid` for
/// `Student`, `is_verified` for `Teacher`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Student,
    Agent,
    Admin,
    Teacher,
}

impl Role {
    /// Stable lowercase name, matching the serialized record form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Agent => "agent",
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }
}

/// Session
///
/// The canonical record of the currently authenticated identity. This struct
/// *is* the persisted session record: it serializes to the exact camelCase
/// JSON shape the front end stores under its single session slot
/// (`{id, email, name, role, referralCode?, isPaid?, ...}`), with absent
/// optional fields omitted rather than written as null.
///
/// Field semantics are role-conditional by design:
/// - `referral_code` / `referred_by` are meaningful only for agents and
///   agent-referred registrations.
/// - `is_paid` is consulted only when gating a student.
/// - `is_verified` is consulted only when gating a teacher.
/// - `phone` / `qualification` / `expertise` are teacher profile fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl Session {
    /// payment_complete
    ///
    /// The student gating predicate. An absent flag counts as unpaid, so a
    /// record written before the flag existed still routes through payment.
    pub fn payment_complete(&self) -> bool {
        self.is_paid.unwrap_or(false)
    }

    /// verification_complete
    ///
    /// The teacher gating predicate. Absent counts as unverified.
    pub fn verification_complete(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }
}

/// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for POST /login. The mocked identity provider accepts any
/// non-empty credential pair; `role` is an optional hint that overrides the
/// email-substring inference (the teacher login page sends `role=teacher`).
///
/// Note: The password is only handed to the identity provider and is never
/// persisted or logged by this application.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// RegisterRequest
///
/// Input payload for POST /register. `referral_code` here is the *upline*
/// code entered by a referred student (stored as `referred_by` on the
/// resulting session); a freshly registered agent is issued its own code by
/// the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
}

/// --- Response Schemas (Output) ---

/// SessionSnapshot
///
/// Output schema for GET /session: the current session (if any) plus whether
/// the startup restore has completed. The front end uses `restored = false`
/// to hold its loading state instead of flashing a redirect.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSnapshot {
    pub restored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

/// PageShell
///
/// Minimal marker returned by every page route. Actual page rendering is the
/// presentation layer's concern; the server only decides *which* page a
/// navigation resolves to (or redirects away from).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageShell {
    /// Stable page identifier, e.g. "student-dashboard".
    pub page: String,
    /// Path parameter for parameterized pages (course/quiz id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl PageShell {
    pub fn new(page: &str) -> Self {
        Self {
            page: page.to_string(),
            param: None,
        }
    }

    pub fn with_param(page: &str, param: String) -> Self {
        Self {
            page: page.to_string(),
            param: Some(param),
        }
    }
}

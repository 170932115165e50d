use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::auth::AuthState;
use crate::models::{RegisterRequest, Role, Session};
use crate::slot::SlotState;

/// RestorePhase
///
/// Tracks whether the startup attempt to read the persisted session has
/// completed. The guard refuses to make a redirect decision while this is
/// `Pending`, which is what prevents a flash-redirect to /login for a user
/// whose stored session simply has not been loaded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePhase {
    Pending,
    Complete,
}

/// The mutable heart of the store: the restore phase and the (at most one)
/// active session.
struct Inner {
    phase: RestorePhase,
    session: Option<Session>,
}

/// SessionStore
///
/// The single source of truth for the current authenticated identity. All
/// reads and writes of the session go through this object; nothing else may
/// touch the durable slot.
///
/// Write-through discipline: every mutating operation persists to the slot
/// *before* committing to memory, so the in-memory session and the persisted
/// record can never diverge — a failed persist leaves both sides on the old
/// state, and a successful one leaves them identical.
///
/// At most one mutation is in flight at a time (`mutation` is held across the
/// provider call), standing in for the UI disabling its submit controls while
/// a request is pending.
pub struct SessionStore {
    slot: SlotState,
    auth: AuthState,
    inner: RwLock<Inner>,
    mutation: Mutex<()>,
}

impl SessionStore {
    /// Creates a store with no session and restore still pending.
    pub fn new(slot: SlotState, auth: AuthState) -> Self {
        Self {
            slot,
            auth,
            inner: RwLock::new(Inner {
                phase: RestorePhase::Pending,
                session: None,
            }),
            mutation: Mutex::new(()),
        }
    }

    /// restore
    ///
    /// Attempts to load a persisted session at startup. Absent or malformed
    /// records yield an anonymous session; this operation never fails. Always
    /// marks the restore phase complete, even when nothing was found.
    pub async fn restore(&self) {
        let restored = self.slot.load().await;
        match &restored {
            Some(session) => {
                tracing::info!(role = session.role.as_str(), "session restored from slot")
            }
            None => tracing::info!("no persisted session; starting anonymous"),
        }

        let mut inner = self.inner.write().await;
        inner.session = restored;
        inner.phase = RestorePhase::Complete;
    }

    /// snapshot
    ///
    /// The consistent (phase, session) pair the guard evaluates. Guard
    /// decisions are pure over this snapshot.
    pub async fn snapshot(&self) -> (RestorePhase, Option<Session>) {
        let inner = self.inner.read().await;
        (inner.phase, inner.session.clone())
    }

    /// login
    ///
    /// Exchanges credentials for a session via the identity provider, then
    /// persists and activates it. Any empty credential or provider/slot
    /// failure surfaces as the generic "Login failed" — the caller gets no
    /// further detail, and the current state is left untouched.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role_hint: Option<Role>,
    ) -> Result<Session, String> {
        let _pending = self.mutation.lock().await;

        if email.trim().is_empty() || password.trim().is_empty() {
            return Err("Login failed".to_string());
        }

        let session = self
            .auth
            .authenticate(email, password, role_hint)
            .await
            .map_err(|e| {
                tracing::error!("login rejected by identity provider: {}", e);
                "Login failed".to_string()
            })?;

        self.commit(session).await.map_err(|e| {
            tracing::error!("login persist failed: {}", e);
            "Login failed".to_string()
        })
    }

    /// register
    ///
    /// Creates a new identity from submitted profile fields, then persists and
    /// activates it. Same failure contract as `login`.
    pub async fn register(&self, profile: RegisterRequest) -> Result<Session, String> {
        let _pending = self.mutation.lock().await;

        if profile.email.trim().is_empty() || profile.password.trim().is_empty() {
            return Err("Registration failed".to_string());
        }

        let session = self.auth.register(profile).await.map_err(|e| {
            tracing::error!("registration rejected by identity provider: {}", e);
            "Registration failed".to_string()
        })?;

        self.commit(session).await.map_err(|e| {
            tracing::error!("registration persist failed: {}", e);
            "Registration failed".to_string()
        })
    }

    /// logout
    ///
    /// Clears the persisted record and the in-memory session. Logging out of
    /// an anonymous session is a no-op that still succeeds.
    pub async fn logout(&self) -> Result<(), String> {
        let _pending = self.mutation.lock().await;

        self.slot.clear().await.map_err(|e| {
            tracing::error!("logout failed to clear slot: {}", e);
            "Logout failed".to_string()
        })?;

        let mut inner = self.inner.write().await;
        inner.session = None;
        Ok(())
    }

    /// complete_payment
    ///
    /// Simulated payment confirmation: flips `is_paid` on the active session
    /// and writes through. Errors if no session is active; the (external,
    /// mocked) payment processor is trusted to have already "succeeded".
    pub async fn complete_payment(&self) -> Result<Session, String> {
        self.mutate_flag(|session| session.is_paid = Some(true))
            .await
    }

    /// approve_verification
    ///
    /// Simulated verification approval: flips `is_verified` on the active
    /// session and writes through. Errors if no session is active.
    pub async fn approve_verification(&self) -> Result<Session, String> {
        self.mutate_flag(|session| session.is_verified = Some(true))
            .await
    }

    /// Shared flag-mutation path: copy, mutate, persist, commit.
    async fn mutate_flag(&self, apply: impl FnOnce(&mut Session)) -> Result<Session, String> {
        let _pending = self.mutation.lock().await;

        let mut session = {
            let inner = self.inner.read().await;
            inner
                .session
                .clone()
                .ok_or_else(|| "No active session".to_string())?
        };
        apply(&mut session);

        self.commit(session).await
    }

    /// Persist-then-commit. Only called with the mutation lock held.
    async fn commit(&self, session: Session) -> Result<Session, String> {
        self.slot.save(&session).await?;

        let mut inner = self.inner.write().await;
        inner.session = Some(session.clone());
        // An activated session supersedes whatever restore would have found.
        inner.phase = RestorePhase::Complete;
        Ok(session)
    }
}

/// SessionState
///
/// The concrete type used to share the Session Store across the application state.
pub type SessionState = Arc<SessionStore>;

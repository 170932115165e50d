use std::env;
use std::path::PathBuf;

/// AppConfig
///
/// Holds the application's entire configuration state. This struct is designed
/// to be immutable once loaded, ensuring consistency across the Session Store,
/// the guard, and the router. It is pulled into the application state via
/// FromRef, embodying the "immutable AppConfig" part of the Unified State Pattern.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log format and fail-fast strictness.
    pub env: Env,
    // Address the HTTP server binds to.
    pub bind_addr: String,
    // The durable local slot holding the serialized session record.
    pub session_file: PathBuf,
    // Fixed delay (ms) applied by the mocked identity provider. Each mocked
    // call suspends exactly once for this long before resolving.
    pub auth_delay_ms: u64,
    // Entry-path payment defaults. Login and registration intentionally
    // disagree (login marks students paid, registration does not); both are
    // kept as explicit knobs pending product clarification.
    pub login_marks_paid: bool,
    pub registration_marks_paid: bool,
}

/// Env
///
/// Defines the runtime context, used to switch between development conveniences
/// (pretty logs, implicit defaults) and production-grade settings (JSON logs,
/// mandatory explicit configuration).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for test
    /// setup. The auth delay is zeroed so unit tests do not sleep.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: "127.0.0.1:3000".to_string(),
            session_file: env::temp_dir().join("prep-portal-session.json"),
            auth_delay_ms: 0,
            login_marks_paid: true,
            registration_marks_paid: false,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration at
    /// startup. It reads all parameters from environment variables and
    /// implements the **fail-fast** principle.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current
    /// runtime environment (especially Production) is not found. This prevents
    /// the application from starting with an incomplete configuration.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // Session Slot Resolution
        // The production slot path is mandatory and must be explicitly set.
        let session_file = match env {
            Env::Production => PathBuf::from(
                env::var("SESSION_FILE").expect("FATAL: SESSION_FILE must be set in production."),
            ),
            // In local, fall back to a well-known path under the OS temp dir.
            _ => env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir().join("prep-portal-session.json")),
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let auth_delay_ms = env::var("AUTH_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(400);

        Self {
            env,
            bind_addr,
            session_file,
            auth_delay_ms,
            login_marks_paid: flag_var("LOGIN_MARKS_PAID", true),
            registration_marks_paid: flag_var("REGISTRATION_MARKS_PAID", false),
        }
    }
}

/// Reads a boolean environment variable, falling back to `default` when the
/// variable is unset or unparseable.
fn flag_var(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

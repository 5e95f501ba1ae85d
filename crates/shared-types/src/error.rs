use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Bad credentials, or the backend refused the sign-in.
    AuthenticationFailed,
    /// Authentication succeeded but no `profiles` row exists for the user.
    ProfileNotFound,
    /// The profile carries a role outside the four known roles.
    InvalidRole,
    /// The backend no longer accepts the stored access token.
    Unauthorized,
    Network,
    Backend,
    Storage,
    Validation,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::AuthenticationFailed => write!(f, "AuthenticationFailed"),
            AppErrorKind::ProfileNotFound => write!(f, "ProfileNotFound"),
            AppErrorKind::InvalidRole => write!(f, "InvalidRole"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Backend => write!(f, "Backend"),
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::Validation => write!(f, "Validation"),
        }
    }
}

/// Structured error shared by the backend client and the UI.
///
/// Every backend failure is converted into one of these at the call site and
/// kept in view state; the UI picks its copy from `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::AuthenticationFailed, message)
    }

    pub fn profile_not_found() -> Self {
        Self::new(AppErrorKind::ProfileNotFound, "Profile not found")
    }

    /// Error for a role string the client does not recognise.
    pub fn invalid_role(raw: &str) -> Self {
        Self::new(AppErrorKind::InvalidRole, format!("Invalid user role: {raw:?}"))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Backend, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Validation, message)
    }

    pub fn is(&self, kind: AppErrorKind) -> bool {
        self.kind == kind
    }

    /// Short user-facing message for inline display.
    ///
    /// Network and backend details stay in the logs; the user sees a generic
    /// line. `InvalidRole` is left to the caller, which owns the support copy.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::AuthenticationFailed => {
                if self.message.is_empty() {
                    "Authentication failed".to_string()
                } else {
                    self.message.clone()
                }
            }
            AppErrorKind::ProfileNotFound => "Profile not found".to_string(),
            AppErrorKind::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            AppErrorKind::Validation | AppErrorKind::InvalidRole => self.message.clone(),
            AppErrorKind::Network | AppErrorKind::Backend | AppErrorKind::Storage => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::backend(format!("Malformed payload: {err}"))
    }
}

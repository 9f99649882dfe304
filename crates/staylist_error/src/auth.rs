//! Authentication and authorization error types.

/// Authentication and authorization failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AuthErrorKind {
    /// Request carried no usable credentials
    #[display("Authentication credentials were not provided.")]
    Required,
    /// Bearer token failed verification
    #[display("Invalid token: {}", _0)]
    InvalidToken(String),
    /// Acting identity is not the resource owner
    #[display("You do not have permission to perform this action.")]
    Forbidden,
    /// Username/password pair did not check out
    #[display("Wrong username or password.")]
    InvalidCredentials,
    /// Password hashing or verification machinery failed
    #[display("Password hash error: {}", _0)]
    Hash(String),
}

/// Auth error with source location tracking.
///
/// # Examples
///
/// ```
/// use staylist_error::{AuthError, AuthErrorKind};
///
/// let err = AuthError::new(AuthErrorKind::Forbidden);
/// assert!(format!("{}", err).contains("permission"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Auth Error: {} at line {} in {}", kind, line, file)]
pub struct AuthError {
    /// The kind of error that occurred
    pub kind: AuthErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{AuthError, ConfigError, NotFoundError, RuleError, ServerError, ValidationError};

/// The foundation error enum for the workspace.
///
/// # Examples
///
/// ```
/// use staylist_error::{AuthError, AuthErrorKind, StaylistError};
///
/// let auth_err = AuthError::new(AuthErrorKind::Forbidden);
/// let err: StaylistError = auth_err.into();
/// assert!(format!("{}", err).contains("Auth Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StaylistErrorKind {
    /// Field-level payload validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Marketplace rule violation
    #[from(RuleError)]
    Rule(RuleError),
    /// Authentication or authorization failure
    #[from(AuthError)]
    Auth(AuthError),
    /// Resource resolution failure
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP server lifecycle error
    #[from(ServerError)]
    Server(ServerError),
}

/// Staylist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use staylist_error::{StaylistResult, RuleError, RuleErrorKind};
///
/// fn might_fail() -> StaylistResult<()> {
///     Err(RuleError::new(RuleErrorKind::CategoryRequired))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Staylist Error: {}", _0)]
pub struct StaylistError(Box<StaylistErrorKind>);

impl StaylistError {
    /// Create a new error from a kind.
    pub fn new(kind: StaylistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StaylistErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> StaylistErrorKind {
        *self.0
    }
}

// Generic From implementation for any type that converts to StaylistErrorKind
impl<T> From<T> for StaylistError
where
    T: Into<StaylistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Staylist operations.
///
/// # Examples
///
/// ```
/// use staylist_error::{NotFoundError, StaylistResult};
///
/// fn fetch_data() -> StaylistResult<String> {
///     Err(NotFoundError::new("room", 3))?
/// }
/// ```
pub type StaylistResult<T> = std::result::Result<T, StaylistError>;

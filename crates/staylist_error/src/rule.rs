//! Domain-rule violations surfaced as request failures.

/// Marketplace rule violations.
///
/// These map to 400 responses with a single detail message. The amenity
/// variant names the first offending id instead of collapsing into a
/// generic message, so callers can tell which input was bad.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RuleErrorKind {
    /// Room payload carried no category id
    #[display("Category is required.")]
    CategoryRequired,
    /// Referenced category does not exist
    #[display("Category not found.")]
    CategoryNotFound(i64),
    /// Referenced category is not a room category
    #[display("The category kind should be 'rooms'.")]
    WrongCategoryKind(String),
    /// Referenced amenity does not exist
    #[display("Amenity {} not found.", _0)]
    AmenityNotFound(i64),
}

/// Rule error with source location tracking.
///
/// # Examples
///
/// ```
/// use staylist_error::{RuleError, RuleErrorKind};
///
/// let err = RuleError::new(RuleErrorKind::AmenityNotFound(42));
/// assert!(format!("{}", err).contains("Amenity 42 not found."));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Rule Error: {} at line {} in {}", kind, line, file)]
pub struct RuleError {
    /// The kind of error that occurred
    pub kind: RuleErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RuleError {
    /// Create a new RuleError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RuleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

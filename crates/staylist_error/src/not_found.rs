//! Resource resolution failures.

/// A resource lookup by id came up empty.
///
/// # Examples
///
/// ```
/// use staylist_error::NotFoundError;
///
/// let err = NotFoundError::new("wishlist", 9);
/// assert!(format!("{}", err).contains("wishlist 9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Found: {} {} at line {} in {}", resource, id, line, file)]
pub struct NotFoundError {
    /// Resource family that failed to resolve ("room", "amenity", ...)
    pub resource: &'static str,
    /// The identifier that was looked up
    pub id: i64,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new NotFoundError with automatic location tracking.
    #[track_caller]
    pub fn new(resource: &'static str, id: i64) -> Self {
        let location = std::panic::Location::caller();
        Self {
            resource,
            id,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! The authenticated acting identity.

/// Identity extracted from a verified bearer token.
///
/// Every ownership check compares this against the stored owner id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    /// User id the token was issued for
    pub user_id: i64,
    /// Username at issue time
    pub username: String,
}

impl Identity {
    /// Create a new identity.
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Whether this identity owns a resource with the given owner id.
    pub fn owns(&self, owner_id: i64) -> bool {
        self.user_id == owner_id
    }
}

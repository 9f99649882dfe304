//! Page-window arithmetic for sub-resource listings.

use staylist_error::ValidationError;

/// Page size used when the server config does not override it.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// A validated one-based page number.
///
/// Listings return the window `[(page-1)*size, page*size)` of the related
/// collection. Out-of-range pages are an empty window, not an error;
/// malformed page values are rejected up front.
///
/// # Examples
///
/// ```
/// use staylist_core::PageRequest;
///
/// let page = PageRequest::parse(Some("2")).unwrap();
/// assert_eq!(page.offset(3), 3);
/// assert!(PageRequest::parse(Some("zero")).is_err());
/// assert_eq!(PageRequest::parse(None).unwrap().page(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl PageRequest {
    /// Parse an optional raw query value, defaulting to the first page.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            None => Ok(Self { page: 1 }),
            Some(value) => match value.trim().parse::<i64>() {
                Ok(page) if page >= 1 => Ok(Self { page }),
                Ok(_) => Err(ValidationError::single("page", "Page numbers start at 1.")),
                Err(_) => Err(ValidationError::single(
                    "page",
                    "A valid integer is required.",
                )),
            },
        }
    }

    /// The one-based page number.
    pub fn page(self) -> i64 {
        self.page
    }

    /// Row offset of this page for the given page size.
    pub fn offset(self, page_size: i64) -> i64 {
        (self.page - 1) * page_size
    }

    /// Slice an in-memory collection down to this page's window.
    pub fn window<T>(self, items: &[T], page_size: i64) -> &[T] {
        let start = usize::try_from(self.offset(page_size)).unwrap_or(usize::MAX);
        let size = usize::try_from(page_size).unwrap_or(0);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }
}

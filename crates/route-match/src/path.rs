/// Path utilities for segment splitting and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
/// The same rules apply to request paths and to route templates.

use std::borrow::Cow;

/// Splits a path into its non-empty `/`-delimited segments
///
/// Leading, trailing and repeated slashes produce empty tokens, which are dropped,
/// so `//a//b//` and `/a/b` yield the same segments.
///
/// # Examples
///
/// ```
/// use route_match::path::split_segments;
///
/// assert_eq!(split_segments("/users/123"), vec!["users", "123"]);
/// assert_eq!(split_segments("//users//123//"), vec!["users", "123"]);
/// assert!(split_segments("/").is_empty());
/// assert!(split_segments("").is_empty());
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Checks if a path is already in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use route_match::path::is_normalized;
///
/// assert!(is_normalized("/"));
/// assert!(is_normalized("/users/123"));
///
/// assert!(!is_normalized(""));
/// assert!(!is_normalized("users"));
/// assert!(!is_normalized("/users/"));
/// assert!(!is_normalized("/users//123"));
/// ```
pub fn is_normalized(path: &str) -> bool {
    if !path.starts_with('/') || path.contains("//") {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical, otherwise a single
/// allocation holding `/` followed by the segments joined with `/`.
///
/// Matching never depends on this: `split_segments` applies the same collapsing
/// on every call. Callers use it to build stable cache keys or log lines.
///
/// # Examples
///
/// ```
/// use route_match::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("api//v1///users"), "/api/v1/users");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_normalized(path) {
        return Cow::Borrowed(path);
    }

    let segments = split_segments(path);
    if segments.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", segments.join("/")))
    }
}

//! # route-match
//!
//! Path-pattern matching for isomorphic routers. Given a request path and a
//! route template, decides whether the template matches and extracts named
//! parameters plus an optional rest-of-path capture.
//!
//! ## Template Grammar
//!
//! - Literal segments (`/about`)
//! - Named parameters (`/users/:id`)
//! - Optional parameters (`/users/:id?`), bound to `""` when absent
//! - Required rest (`/files/:path+`), one or more segments joined with `/`
//! - Optional rest (`/files/:path*`), zero or more segments
//! - Anonymous rest (`/static/*`), stored raw in [`Matches::rest`]
//!
//! ## Path Normalization
//!
//! Both the path and the template are split on `/` with empty segments
//! dropped, so leading, trailing and repeated slashes never matter:
//! `//api//v1//` and `/api/v1` are the same.
//!
//! ## Decoding
//!
//! Captured parameter values are percent-decoded. Malformed escapes never fail
//! a match: the offending segment is kept exactly as received.
//!
//! ## Example
//!
//! ```
//! use route_match::{match_path, Pattern};
//!
//! let m = match_path("/foo/bar%20baz", "/foo/:param").unwrap();
//! assert_eq!(m.get("param"), Some("bar baz"));
//!
//! // Pre-parse a template that is matched repeatedly
//! let pattern = Pattern::parse("/user/:id+");
//! let m = pattern.matches("/user/foo/bar").unwrap();
//! assert_eq!(m.get("id"), Some("foo/bar"));
//!
//! assert!(match_path("/", "/user/:id").is_none());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod decode;
mod matcher;
mod options;
pub mod path;
pub mod route;

pub use decode::decode_segment;
pub use matcher::{Matches, Params};
pub use options::{Decoding, MatchOptions, WildcardPrefix};
pub use path::{normalize_path, split_segments};
pub use route::pattern::{classify_segment, Flag, Segment};
pub use route::template::{ParamKind, Pattern};

// ============================================================================
// Entry Points
// ============================================================================

/// Matches a path against a template with default options
///
/// Returns `None` when the template does not describe the path. A match with
/// no parameters is `Some` with an empty map.
///
/// # Examples
///
/// ```
/// use route_match::match_path;
///
/// let m = match_path("/user/foo/bar/baz", "/user/*").unwrap();
/// assert!(m.params.is_empty());
/// assert_eq!(m.rest(), Some("/foo/bar/baz"));
///
/// let m = match_path("/user", "/user/:id?").unwrap();
/// assert_eq!(m.get("id"), Some(""));
///
/// let m = match_path("/api//v1//users", "/api/v1/users").unwrap();
/// assert!(m.params.is_empty());
/// assert_eq!(m.rest(), None);
/// ```
pub fn match_path(path: &str, template: &str) -> Option<Matches> {
    match_path_with(path, template, Params::new(), &MatchOptions::default())
}

/// Matches a path against a template, starting from already-bound parameters
///
/// The seed is moved into the result; the matcher only adds or overwrites keys.
///
/// # Examples
///
/// ```
/// use route_match::{match_path_seeded, Params};
///
/// let mut seed = Params::new();
/// seed.insert("existing".to_string(), "value".to_string());
///
/// let m = match_path_seeded("/foo/bar", "/:first/:second", seed).unwrap();
/// assert_eq!(m.get("existing"), Some("value"));
/// assert_eq!(m.get("first"), Some("foo"));
/// assert_eq!(m.get("second"), Some("bar"));
/// ```
pub fn match_path_seeded(path: &str, template: &str, seed: Params) -> Option<Matches> {
    match_path_with(path, template, seed, &MatchOptions::default())
}

/// Matches a path against a template with explicit options
///
/// # Examples
///
/// ```
/// use route_match::{match_path_with, Decoding, MatchOptions, Params};
///
/// let options = MatchOptions::default().with_decoding(Decoding::Form);
/// let m = match_path_with("/search/rust+lang", "/search/:q", Params::new(), &options).unwrap();
/// assert_eq!(m.get("q"), Some("rust lang"));
/// ```
pub fn match_path_with(
    path: &str,
    template: &str,
    seed: Params,
    options: &MatchOptions,
) -> Option<Matches> {
    Pattern::parse(template)
        .with_options(*options)
        .matches_seeded(path, seed)
}

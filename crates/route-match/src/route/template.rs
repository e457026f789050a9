/// Pre-parsed route templates
///
/// A `Pattern` holds the classified segments of a template so repeated matches
/// skip the token scan. It is immutable once built and can be shared across threads.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::pattern::{classify_segment, Flag, Segment};
use crate::matcher::{match_segments, Matches, Params};
use crate::options::MatchOptions;
use crate::path::split_segments;

/// Whether a successful match is guaranteed to bind a parameter to a non-empty value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// `:name` or `:name+`
    Required,
    /// `:name?` or `:name*` (bound to `""` when absent)
    Optional,
}

impl From<Flag> for ParamKind {
    fn from(flag: Flag) -> Self {
        if flag.allows_empty() {
            ParamKind::Optional
        } else {
            ParamKind::Required
        }
    }
}

/// A route template parsed into segments
///
/// # Examples
///
/// ```
/// use route_match::Pattern;
///
/// let pattern = Pattern::parse("/user/:id/*");
///
/// let m = pattern.matches("/user/2/foo/bar").unwrap();
/// assert_eq!(m.get("id"), Some("2"));
/// assert_eq!(m.rest(), Some("/foo/bar"));
///
/// assert!(pattern.matches("/").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
    options: MatchOptions,
}

impl Pattern {
    /// Parses a template; every string is a valid template
    pub fn parse(template: &str) -> Self {
        let segments = split_segments(template)
            .into_iter()
            .map(classify_segment)
            .collect();

        Pattern {
            segments,
            options: MatchOptions::default(),
        }
    }

    /// Sets the options used by `matches` and `matches_seeded`
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names a match can bind, in template order
    ///
    /// Stops after the first named rest segment, since it consumes the rest of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_match::{ParamKind, Pattern};
    ///
    /// let pattern = Pattern::parse("/shop/:category/:item?");
    /// let params: Vec<_> = pattern.params().collect();
    /// assert_eq!(
    ///     params,
    ///     vec![("category", ParamKind::Required), ("item", ParamKind::Optional)]
    /// );
    /// ```
    pub fn params(&self) -> impl Iterator<Item = (&str, ParamKind)> + '_ {
        let cut = self
            .segments
            .iter()
            .position(|s| matches!(s, Segment::Param(_, flag) if flag.is_rest()))
            .map_or(self.segments.len(), |i| i + 1);

        self.segments[..cut].iter().filter_map(|segment| match segment {
            Segment::Param(name, flag) => Some((name.as_str(), ParamKind::from(*flag))),
            _ => None,
        })
    }

    /// Whether a match against this template can carry a `rest` capture
    pub fn has_rest(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    /// Matches a path against this template
    pub fn matches(&self, path: &str) -> Option<Matches> {
        self.matches_seeded(path, Params::new())
    }

    /// Matches a path, starting from already-bound parameters
    ///
    /// Seeded entries survive unless the template binds the same name.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_match::{Params, Pattern};
    ///
    /// let mut seed = Params::new();
    /// seed.insert("tenant".to_string(), "acme".to_string());
    ///
    /// let m = Pattern::parse("/:first/:second").matches_seeded("/foo/bar", seed).unwrap();
    /// assert_eq!(m.get("tenant"), Some("acme"));
    /// assert_eq!(m.get("first"), Some("foo"));
    /// ```
    pub fn matches_seeded(&self, path: &str, seed: Params) -> Option<Matches> {
        let path_segments = split_segments(path);
        let result = match_segments(&path_segments, &self.segments, seed, &self.options);

        tracing::trace!(
            path,
            pattern = %self,
            matched = result.is_some(),
            "route match"
        );

        result
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pattern::parse(s))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

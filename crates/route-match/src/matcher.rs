/// Segment-by-segment matching of a request path against a parsed template
///
/// The walk is a single left-to-right pass over both segment lists with no
/// backtracking. It short-circuits on the first mismatch and on rest capture.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::decode::decode_segment;
use crate::options::{MatchOptions, WildcardPrefix};
use crate::route::pattern::Segment;

/// Parameter name → bound value
pub type Params = HashMap<String, String>;

/// Result of a successful match
///
/// Serializes as `{"params": {...}, "rest": "/..."}`, with `rest` omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Matches {
    /// Parameters bound by named segments, plus any seeded entries
    pub params: Params,
    /// Unconsumed tail captured by an anonymous `*` segment, `/`-prefixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
}

impl Matches {
    /// Gets a parameter value by name
    ///
    /// # Examples
    ///
    /// ```
    /// use route_match::match_path;
    ///
    /// let m = match_path("/user/42", "/user/:id").unwrap();
    /// assert_eq!(m.get("id"), Some("42"));
    /// assert_eq!(m.get("missing"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The captured rest of the path, if an anonymous wildcard matched
    pub fn rest(&self) -> Option<&str> {
        self.rest.as_deref()
    }
}

/// Walks path and template segments in lock-step
///
/// `seed` becomes the initial parameter map; bindings are added on top of it.
pub(crate) fn match_segments(
    path_segments: &[&str],
    template: &[Segment],
    seed: Params,
    options: &MatchOptions,
) -> Option<Matches> {
    let past_end = Segment::empty();
    let mut matches = Matches {
        params: seed,
        rest: None,
    };

    for i in 0..path_segments.len().max(template.len()) {
        let segment = template.get(i).unwrap_or(&past_end);
        let val = path_segments.get(i).copied().unwrap_or("");
        let remaining = path_segments.get(i..).unwrap_or(&[]);

        match segment {
            // Literal match, including both lists being exhausted at this index
            Segment::Literal(name) | Segment::Wildcard(name) if name == val => continue,

            // Anonymous rest: /foo/*
            Segment::Wildcard(prefix) if !val.is_empty() => {
                if options.wildcard_prefix == WildcardPrefix::Strict && !prefix.is_empty() {
                    tracing::trace!(index = i, segment = %segment, val, "wildcard prefix mismatch");
                    return None;
                }
                matches.rest = Some(format!("/{}", remaining.join("/")));
                return Some(matches);
            }

            Segment::Literal(_) | Segment::Wildcard(_) => {
                tracing::trace!(index = i, segment = %segment, val, "segment mismatch");
                return None;
            }

            Segment::Param(_, flag) if val.is_empty() && !flag.allows_empty() => {
                tracing::trace!(index = i, segment = %segment, "missing required segment");
                return None;
            }

            // Named rest: /:path+ or /:path*
            Segment::Param(name, flag) if flag.is_rest() => {
                let decoded: Vec<_> = remaining
                    .iter()
                    .map(|s| decode_segment(s, options.decoding))
                    .collect();
                matches.params.insert(name.clone(), decoded.join("/"));
                return Some(matches);
            }

            // Required or optional single segment; an absent optional binds ""
            Segment::Param(name, _) => {
                let value = decode_segment(val, options.decoding).into_owned();
                matches.params.insert(name.clone(), value);
            }
        }
    }

    Some(matches)
}

/// Segment grammar for route templates
///
/// Pure functional parsing of a single template token into a typed segment.
/// All functions are **pure**: same input → same output, no side effects.

use std::fmt;

/// Cardinality flag carried by a named parameter
///
/// Written as the single trailing character of the token:
/// nothing, `?`, `+` or `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flag {
    /// `:name` - exactly one segment
    #[default]
    None,
    /// `:name?` - zero or one segment
    Optional,
    /// `:name+` - one or more segments
    RequiredRest,
    /// `:name*` - zero or more segments
    OptionalRest,
}

impl Flag {
    /// Maps a trailing character to its flag, if it is one
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Flag::Optional),
            '+' => Some(Flag::RequiredRest),
            '*' => Some(Flag::OptionalRest),
            _ => None,
        }
    }

    /// The character this flag is written with (`None` for the unflagged form)
    pub fn as_char(self) -> Option<char> {
        match self {
            Flag::None => None,
            Flag::Optional => Some('?'),
            Flag::RequiredRest => Some('+'),
            Flag::OptionalRest => Some('*'),
        }
    }

    /// Whether a missing path segment still satisfies this flag
    pub fn allows_empty(self) -> bool {
        matches!(self, Flag::Optional | Flag::OptionalRest)
    }

    /// Whether this flag consumes every remaining path segment
    pub fn is_rest(self) -> bool {
        matches!(self, Flag::RequiredRest | Flag::OptionalRest)
    }
}

/// Represents one parsed template token
///
/// Functional sum type for pattern matching template segments.
///
/// # Examples
///
/// ```
/// use route_match::route::pattern::{classify_segment, Flag, Segment};
///
/// assert_eq!(classify_segment("users"), Segment::Literal("users".to_string()));
/// assert_eq!(classify_segment(":id"), Segment::Param("id".to_string(), Flag::None));
/// assert_eq!(classify_segment(":id?"), Segment::Param("id".to_string(), Flag::Optional));
/// assert_eq!(classify_segment(":path+"), Segment::Param("path".to_string(), Flag::RequiredRest));
/// assert_eq!(classify_segment("*"), Segment::Wildcard(String::new()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text compared verbatim with the path segment
    ///
    /// A trailing `?` or `+` on a token without `:` is stripped and has no other effect.
    Literal(String),
    /// Anonymous rest: a token without `:` ending in `*`, holding the text before the `*`
    Wildcard(String),
    /// Named parameter: `:name` with an optional flag
    Param(String, Flag),
}

impl Segment {
    /// The segment used for template positions past the last token
    pub fn empty() -> Self {
        Segment::Literal(String::new())
    }

    /// Whether this segment captures into the `rest` field of a match
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // A bare flag keeps an empty or flag-ending literal from being re-read differently
            Segment::Literal(text) if text.is_empty() || text.ends_with(['?', '+', '*']) => {
                write!(f, "{}?", text)
            }
            Segment::Literal(text) => f.write_str(text),
            Segment::Wildcard(prefix) => write!(f, "{}*", prefix),
            Segment::Param(name, flag) => {
                write!(f, ":{}", name)?;
                match flag.as_char() {
                    Some(c) => write!(f, "{}", c),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Classifies a template token into a segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. A leading `:` marks a named parameter and is stripped
/// 2. One trailing `?`, `+` or `*` is stripped as the flag
/// 3. The remainder is the name (possibly empty)
///
/// Tokens without `:` become `Wildcard` when the flag is `*`, otherwise `Literal`.
///
/// # Examples
///
/// ```
/// use route_match::route::pattern::{classify_segment, Flag, Segment};
///
/// assert_eq!(classify_segment("files*"), Segment::Wildcard("files".to_string()));
/// assert_eq!(classify_segment("about?"), Segment::Literal("about".to_string()));
/// assert_eq!(classify_segment(":"), Segment::Param(String::new(), Flag::None));
/// assert_eq!(classify_segment(":a**"), Segment::Param("a*".to_string(), Flag::OptionalRest));
/// ```
///
/// # Performance
///
/// - O(n) where n is token length
/// - Single allocation for the name
pub fn classify_segment(token: &str) -> Segment {
    let (has_colon, body) = match token.strip_prefix(':') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let (name, flag) = split_flag(body);

    match (has_colon, flag) {
        (true, flag) => Segment::Param(name.to_string(), flag),
        (false, Flag::OptionalRest) => Segment::Wildcard(name.to_string()),
        (false, _) => Segment::Literal(name.to_string()),
    }
}

/// Splits one trailing flag character off a token body
fn split_flag(body: &str) -> (&str, Flag) {
    body.chars()
        .next_back()
        .and_then(|c| Flag::from_char(c).map(|flag| (&body[..body.len() - c.len_utf8()], flag)))
        .unwrap_or((body, Flag::None))
}

/// Route template module
///
/// Contains pure functional components for template parsing:
/// - `pattern` classifies a single template token into a `Segment`
/// - `template` holds a whole parsed template as a `Pattern`

pub mod pattern;
pub mod template;

// Re-export commonly used types
pub use pattern::{classify_segment, Flag, Segment};
pub use template::{ParamKind, Pattern};

//! Regex compatible interface over single matches, captures, splitting and replacement.
mod captures;
mod re;
mod replace;

pub use self::captures::{Captures, CapturesIter};
pub use self::re::{Match, Matches, Split, SplitN};
pub use self::replace::{Dialect, NoExpand, ReplaceError, Replacer};

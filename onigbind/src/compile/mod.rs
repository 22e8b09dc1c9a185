mod builder;
mod names;
mod regex;

pub use self::builder::RegexBuilder;
pub use self::names::{GroupName, GroupNames};
pub use self::regex::{Regex, RegexRef};

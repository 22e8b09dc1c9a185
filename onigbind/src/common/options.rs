use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::{ffi, Error, Result};

bitflags! {
    /// Options which modify how a pattern is compiled.
    #[derive(Default)]
    pub struct RegexOptions: ffi::OnigOptionType {
        /// Default options.
        const NONE = ffi::ONIG_OPTION_NONE;
        /// Ambiguity match on.
        const IGNORECASE = ffi::ONIG_OPTION_IGNORECASE;
        /// Extended pattern form.
        const EXTEND = ffi::ONIG_OPTION_EXTEND;
        /// `'.'` match with newline.
        const MULTILINE = ffi::ONIG_OPTION_MULTILINE;
        /// `'^'` -> `'\A'`, `'$'` -> `'\Z'`.
        const SINGLELINE = ffi::ONIG_OPTION_SINGLELINE;
        /// Find longest match.
        const FIND_LONGEST = ffi::ONIG_OPTION_FIND_LONGEST;
        /// Ignore empty match.
        const FIND_NOT_EMPTY = ffi::ONIG_OPTION_FIND_NOT_EMPTY;
        /// Clear `SINGLELINE` which is enabled by some syntaxes.
        const NEGATE_SINGLE_LINE = ffi::ONIG_OPTION_NEGATE_SINGLELINE;
        /// Only named groups capture.
        const DONT_CAPTURE_GROUP = ffi::ONIG_OPTION_DONT_CAPTURE_GROUP;
        /// Named and unnamed groups both capture.
        const CAPTURE_GROUP = ffi::ONIG_OPTION_CAPTURE_GROUP;
    }
}

bitflags! {
    /// Options which modify a single search.
    #[derive(Default)]
    pub struct SearchOptions: ffi::OnigOptionType {
        /// Default options.
        const NONE = ffi::ONIG_OPTION_NONE;
        /// The start of the text is not the beginning of a line.
        const NOTBOL = ffi::ONIG_OPTION_NOTBOL;
        /// The end of the text is not the end of a line.
        const NOTEOL = ffi::ONIG_OPTION_NOTEOL;
    }
}

impl FromStr for RegexOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut options = RegexOptions::empty();

        for c in s.chars() {
            match c {
                'i' => options |= RegexOptions::IGNORECASE,
                'x' => options |= RegexOptions::EXTEND,
                'm' => options |= RegexOptions::MULTILINE,
                's' => options |= RegexOptions::SINGLELINE,
                'l' => options |= RegexOptions::FIND_LONGEST,
                'E' => options |= RegexOptions::FIND_NOT_EMPTY,
                _ => return Err(Error::InvalidOption(c)),
            }
        }

        Ok(options)
    }
}

impl fmt::Display for RegexOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(RegexOptions::IGNORECASE) {
            write!(f, "i")?
        }
        if self.contains(RegexOptions::EXTEND) {
            write!(f, "x")?
        }
        if self.contains(RegexOptions::MULTILINE) {
            write!(f, "m")?
        }
        if self.contains(RegexOptions::SINGLELINE) {
            write!(f, "s")?
        }
        if self.contains(RegexOptions::FIND_LONGEST) {
            write!(f, "l")?
        }
        if self.contains(RegexOptions::FIND_NOT_EMPTY) {
            write!(f, "E")?
        }
        Ok(())
    }
}

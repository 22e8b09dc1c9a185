use crate::{
    common::{RegexOptions, Syntax},
    compile::Regex,
    Result,
};

/// A configurable builder for a regular expression.
///
/// A builder can be used to configure how the regex is built,
/// for example, by setting the default flags
/// (which can be overridden in the expression itself).
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: String,
    options: RegexOptions,
    syntax: Syntax,
}

impl RegexBuilder {
    /// Create a new regular expression builder with the given pattern.
    ///
    /// If the pattern is invalid, then an error will be returned when build is called.
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        RegexBuilder {
            pattern: pattern.into(),
            options: RegexOptions::NONE,
            syntax: Syntax::default(),
        }
    }

    /// Compile the regular expression.
    pub fn build(&self) -> Result<Regex> {
        Regex::with_options(&self.pattern, self.options, self.syntax)
    }

    fn toggle(&mut self, options: RegexOptions, yes: bool) -> &mut Self {
        self.options.set(options, yes);
        self
    }

    /// Replace all compile options at once.
    pub fn options(&mut self, options: RegexOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Select the syntax the pattern is written in.
    pub fn syntax(&mut self, syntax: Syntax) -> &mut Self {
        self.syntax = syntax;
        self
    }

    /// Set the value for the case insensitive (`i`) flag.
    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::IGNORECASE, yes)
    }

    /// Set the value for the extended (`x`) flag,
    /// whitespace is ignored and `#` starts a comment.
    pub fn extended(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::EXTEND, yes)
    }

    /// Set the value for the Ruby flavoured multi-line flag, where `.` also matches a newline.
    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::MULTILINE, yes)
    }

    /// Set the value for the single-line flag,
    /// `^` and `$` only match at the beginning and end of the text.
    pub fn single_line(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::SINGLELINE, yes)
    }

    /// Prefer the longest of all matches starting at the same position.
    pub fn find_longest(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::FIND_LONGEST, yes)
    }

    /// Ignore empty matches.
    pub fn find_not_empty(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::FIND_NOT_EMPTY, yes)
    }

    /// Only named groups capture when the pattern declares any.
    pub fn dont_capture_group(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::DONT_CAPTURE_GROUP, yes)
    }

    /// Plain groups capture even when the pattern declares named groups.
    pub fn capture_group(&mut self, yes: bool) -> &mut Self {
        self.toggle(RegexOptions::CAPTURE_GROUP, yes)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_builder() {
        let re = RegexBuilder::new("HELLO").case_insensitive(true).build().unwrap();

        assert!(re.is_match("hello world"));

        let re = RegexBuilder::new("a b # comment\n c")
            .extended(true)
            .build()
            .unwrap();

        assert!(re.is_match("abc"));
        assert!(!re.is_match("a b c"));
    }

    #[test]
    fn test_builder_toggle() {
        let mut builder = RegexBuilder::new("a.b");

        builder.multi_line(true);
        assert!(builder.build().unwrap().is_match("a\nb"));

        builder.multi_line(false);
        assert!(!builder.build().unwrap().is_match("a\nb"));
    }

    #[test]
    fn test_builder_syntax() {
        let re = RegexBuilder::new("(?P<x>a)").syntax(Syntax::Python).build().unwrap();

        assert_eq!(re.syntax(), Some(Syntax::Python));
        assert_eq!(re.capture_names(), vec!["x"]);

        let re = RegexBuilder::new("(?<n>a)(b)").capture_group(true).build().unwrap();

        assert_eq!(re.captures_len(), 2);

        let re = RegexBuilder::new("(?<n>a)(b)").build().unwrap();

        assert_eq!(re.captures_len(), 1);
    }
}

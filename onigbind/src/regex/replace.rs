use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

use crate::{compile::RegexRef, regex::Captures, Result};

/// The flavour of replacement templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// `\0`-`\9`, `\k<name>` and `\k<n>`.
    Ruby,
    /// `\0`-`\9`, `\g<name>` and `\g<n>`.
    Python,
    /// `$n` and `${name}`, `\` escapes the next character.
    Java,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Ruby
    }
}

/// Replacement template error
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplaceError {
    /// A group number that does not fit in an integer.
    #[error("invalid capture group number: {0}")]
    InvalidGroupNumber(String),

    /// `${` without a matching `}` right after the group name.
    #[error("missing closing brace in replacement pattern")]
    MissingClosingBrace,

    /// `$` followed by something else than a group reference.
    #[error("unexpected token in replacement pattern: {0}")]
    UnexpectedToken(char),

    /// The template ends with `$`.
    #[error("incomplete replacement pattern")]
    IncompletePattern,

    /// The template ends with `\`.
    #[error("incomplete escape pattern")]
    IncompleteEscape,
}

impl Dialect {
    /// Expand `template` with the groups of `caps`, appending the result to `dst`.
    ///
    /// Groups that do not exist or did not participate expand to nothing.
    pub fn expand(self, template: &str, caps: &Captures<'_>, dst: &mut String) -> StdResult<(), ReplaceError> {
        match self {
            Dialect::Ruby => expand_escaped(template, 'k', caps, dst),
            Dialect::Python => expand_escaped(template, 'g', caps, dst),
            Dialect::Java => expand_dollar(template, caps, dst),
        }
    }
}

type StdResult<T, E> = std::result::Result<T, E>;

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    match name.parse::<usize>() {
        Ok(i) => caps.at(i),
        Err(_) => caps.at_name(name),
    }
}

fn expand_escaped(template: &str, prefix: char, caps: &Captures<'_>, dst: &mut String) -> StdResult<(), ReplaceError> {
    let mut chars = template.chars().peekable();
    let mut escaped = false;
    let mut name: Option<String> = None;

    while let Some(c) = chars.next() {
        if let Some(mut s) = name.take() {
            match c {
                '>' => dst.push_str(group(caps, &s)),
                '<' => name = Some(s),
                _ => {
                    s.push(c);
                    name = Some(s);
                }
            }
        } else if escaped {
            escaped = false;

            match c {
                '0'..='9' => dst.push_str(caps.at(c as usize - '0' as usize)),
                '\\' => dst.push('\\'),
                _ if c == prefix && chars.peek() == Some(&'<') => {
                    chars.next();
                    name = Some(String::new());
                }
                _ => {
                    dst.push('\\');
                    dst.push(c);
                }
            }
        } else if c == '\\' {
            escaped = true;
        } else {
            dst.push(c);
        }
    }

    Ok(())
}

fn expand_dollar(template: &str, caps: &Captures<'_>, dst: &mut String) -> StdResult<(), ReplaceError> {
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => dst.push(chars.next().ok_or(ReplaceError::IncompleteEscape)?),
            '$' => match chars.next() {
                Some('{') => {
                    let name = braced_name(&mut chars)?;

                    dst.push_str(caps.at_name(&name));
                }
                Some(d) if d.is_ascii_digit() => {
                    let mut digits = d.to_string();

                    while let Some(&d) = chars.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        digits.push(d);
                        chars.next();
                    }

                    let i = digits
                        .parse::<usize>()
                        .map_err(|_| ReplaceError::InvalidGroupNumber(digits.clone()))?;

                    dst.push_str(caps.at(i));
                }
                Some(c) => return Err(ReplaceError::UnexpectedToken(c)),
                None => return Err(ReplaceError::IncompletePattern),
            },
            _ => dst.push(c),
        }
    }

    Ok(())
}

fn braced_name(chars: &mut Peekable<Chars<'_>>) -> StdResult<String, ReplaceError> {
    let mut name = String::new();

    for c in chars {
        match c {
            '}' => return Ok(name),
            c if c.is_ascii_alphanumeric() || c == '_' => name.push(c),
            _ => break,
        }
    }

    Err(ReplaceError::MissingClosingBrace)
}

/// Replacer describes types that can be used to replace matches in a string.
pub trait Replacer {
    /// Appends text to `dst` to replace the current match.
    ///
    /// `dialect` is the template flavour of the regex being used.
    fn replace_append(&mut self, caps: &Captures<'_>, dialect: Dialect, dst: &mut String) -> Result<()>;
}

impl<'a> Replacer for &'a str {
    fn replace_append(&mut self, caps: &Captures<'_>, dialect: Dialect, dst: &mut String) -> Result<()> {
        dialect.expand(*self, caps, dst).map_err(Into::into)
    }
}

impl<'a> Replacer for &'a String {
    fn replace_append(&mut self, caps: &Captures<'_>, dialect: Dialect, dst: &mut String) -> Result<()> {
        self.as_str().replace_append(caps, dialect, dst)
    }
}

impl Replacer for String {
    fn replace_append(&mut self, caps: &Captures<'_>, dialect: Dialect, dst: &mut String) -> Result<()> {
        self.as_str().replace_append(caps, dialect, dst)
    }
}

impl<F, T> Replacer for F
where
    F: FnMut(&Captures<'_>) -> T,
    T: AsRef<str>,
{
    fn replace_append(&mut self, caps: &Captures<'_>, _dialect: Dialect, dst: &mut String) -> Result<()> {
        dst.push_str((*self)(caps).as_ref());
        Ok(())
    }
}

/// A replacement string inserted verbatim, without expanding group references.
#[derive(Clone, Copy, Debug)]
pub struct NoExpand<'t>(pub &'t str);

impl<'t> Replacer for NoExpand<'t> {
    fn replace_append(&mut self, _caps: &Captures<'_>, _dialect: Dialect, dst: &mut String) -> Result<()> {
        dst.push_str(self.0);
        Ok(())
    }
}

impl RegexRef {
    /// Replaces the leftmost-first match with the replacement provided.
    ///
    /// If no match is found, then a copy of the string is returned unchanged.
    /// Template strings are expanded in the dialect of the regex's syntax.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use onigbind::prelude::*;
    /// let re = Regex::new(r"(?<last>[^,\s]+),\s+(?<first>\S+)").unwrap();
    /// let result = re.replace("Springsteen, Bruce", r"\k<first> \k<last>").unwrap();
    /// assert_eq!(result, "Bruce Springsteen");
    /// ```
    pub fn replace<R: Replacer>(&self, text: &str, rep: R) -> Result<String> {
        self.replacen(text, 1, rep)
    }

    /// Replaces all non-overlapping matches in `text` with the replacement provided.
    pub fn replace_all<R: Replacer>(&self, text: &str, rep: R) -> Result<String> {
        self.replacen(text, 0, rep)
    }

    /// Replaces at most `limit` non-overlapping matches in `text` with the replacement provided.
    /// If `limit` is 0, then all non-overlapping matches are replaced.
    pub fn replacen<R: Replacer>(&self, text: &str, limit: usize, mut rep: R) -> Result<String> {
        let dialect = self.syntax().unwrap_or_default().dialect();
        let mut dst = String::with_capacity(text.len());
        let mut last = 0;

        for (i, caps) in self.captures_iter(text)?.enumerate() {
            if limit > 0 && i >= limit {
                break;
            }

            if let Some(m) = caps.get(0) {
                dst.push_str(&text[last..m.start()]);
                rep.replace_append(&caps, dialect, &mut dst)?;
                last = m.end();
            }
        }

        dst.push_str(&text[last..]);

        Ok(dst)
    }
}

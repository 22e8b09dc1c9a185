use std::ops::Range;
use std::vec;

use crate::{
    common::SearchOptions,
    compile::RegexRef,
    runtime::{Advance, MatchParam, Matching, Region},
    Result,
};

/// Match represents a single match of a regex in a haystack.
///
/// The lifetime parameter `'t` refers to the lifetime of the matched text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Returns the starting byte offset of the match in the haystack.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset of the match in the haystack.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the range over the starting and ending byte offsets of the
    /// match in the haystack.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the matched text.
    #[inline]
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    #[inline]
    pub(crate) fn new(haystack: &'t str, start: usize, end: usize) -> Match<'t> {
        Match {
            text: haystack,
            start,
            end,
        }
    }
}

impl<'t> From<Match<'t>> for &'t str {
    fn from(m: Match<'t>) -> &'t str {
        m.as_str()
    }
}

impl<'t> From<Match<'t>> for Range<usize> {
    fn from(m: Match<'t>) -> Range<usize> {
        m.range()
    }
}

/// All non-overlapping matches of a regex in a string.
///
/// The iterator yields a `Match` value for each match, left to right.
pub struct Matches<'t>(&'t str, vec::IntoIter<Range<usize>>);

impl<'t> Matches<'t> {
    /// Return the text being searched.
    pub fn text(&self) -> &'t str {
        self.0
    }
}

impl<'t> Iterator for Matches<'t> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.1.next().map(|range| Match::new(self.0, range.start, range.end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.1.size_hint()
    }
}

impl<'t> DoubleEndedIterator for Matches<'t> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.1
            .next_back()
            .map(|range| Match::new(self.0, range.start, range.end))
    }
}

impl ExactSizeIterator for Matches<'_> {}

impl RegexRef {
    /// Returns the start and end byte range of the leftmost-first match in text.
    /// If no match exists, then `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use onigbind::prelude::*;
    /// let text = "I categorically deny having triskaidekaphobia.";
    /// let mat = Regex::new(r"\b\w{13}\b").unwrap().find(text).unwrap().unwrap();
    /// assert_eq!(mat.start(), 2);
    /// assert_eq!(mat.end(), 15);
    /// ```
    pub fn find<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>> {
        let mut region = Region::new()?;

        Ok(self
            .search_with_options(text, 0, text.len(), SearchOptions::NONE, Some(&mut *region))?
            .and_then(|_| region.pos(0))
            .map(|(start, end)| Match::new(text, start, end)))
    }

    /// Returns an iterator for each successive non-overlapping match in
    /// `text`, returning the start and end byte indices with respect to
    /// `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use onigbind::prelude::*;
    /// let text = "Retroactively relinquishing remunerations is reprehensible.";
    /// for mat in Regex::new(r"\b\w{13}\b").unwrap().find_iter(text).unwrap() {
    ///     println!("{:?}", mat);
    /// }
    /// ```
    pub fn find_iter<'t>(&self, text: &'t str) -> Result<Matches<'t>> {
        let param = MatchParam::new()?;
        let mut matched = Vec::<Range<usize>>::new();

        self.scan_by(
            text.as_bytes(),
            0,
            text.len(),
            SearchOptions::NONE,
            &param,
            Advance::Char,
            |region| {
                if let Some((start, end)) = region.pos(0) {
                    matched.push(start..end);
                }

                Matching::Continue
            },
        )?;

        Ok(Matches(text, matched.into_iter()))
    }

    /// Returns an iterator of substrings of `text` delimited by a match of the
    /// regular expression. Namely, each element of the iterator corresponds to
    /// text that *isn't* matched by the regular expression.
    ///
    /// This method will *not* copy the text given.
    ///
    /// # Examples
    ///
    /// To split a string delimited by arbitrary amounts of spaces or tabs:
    ///
    /// ```rust
    /// # use onigbind::prelude::*;
    /// let re = Regex::new(r"[ \t]+").unwrap();
    /// let fields: Vec<&str> = re.split("a b \t  c\td    e").unwrap().collect();
    /// assert_eq!(fields, vec!["a", "b", "c", "d", "e"]);
    /// ```
    pub fn split<'t>(&self, text: &'t str) -> Result<Split<'t>> {
        Ok(Split {
            finder: self.find_iter(text)?,
            last: 0,
        })
    }

    /// Returns an iterator of at most `limit` substrings of `text` delimited
    /// by a match of the regular expression. (A `limit` of `0` will return no
    /// substrings.) The remainder of the string that is not split will be the
    /// last element in the iterator.
    ///
    /// # Examples
    ///
    /// Get the first two words in some text:
    ///
    /// ```rust
    /// # use onigbind::prelude::*;
    /// let re = Regex::new(r"\W+").unwrap();
    /// let fields: Vec<&str> = re.splitn("Hey! How are you?", 3).unwrap().collect();
    /// assert_eq!(fields, vec!("Hey", "How", "are you?"));
    /// ```
    pub fn splitn<'t>(&self, text: &'t str, limit: usize) -> Result<SplitN<'t>> {
        Ok(SplitN {
            splits: self.split(text)?,
            n: limit,
        })
    }
}

/// Yields all substrings delimited by a regular expression match.
///
/// `'t` is the lifetime of the string being split.
pub struct Split<'t> {
    finder: Matches<'t>,
    last: usize,
}

impl<'t> Iterator for Split<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let text = self.finder.text();
        match self.finder.next() {
            None => {
                if self.last > text.len() {
                    None
                } else {
                    let s = &text[self.last..];
                    self.last = text.len() + 1; // Next call will return None
                    Some(s)
                }
            }
            Some(m) => {
                let matched = &text[self.last..m.start()];
                self.last = m.end();
                Some(matched)
            }
        }
    }
}

/// Yields at most `N` substrings delimited by a regular expression match.
///
/// The last substring will be whatever remains after splitting.
pub struct SplitN<'t> {
    splits: Split<'t>,
    n: usize,
}

impl<'t> Iterator for SplitN<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.n == 0 {
            return None;
        }

        self.n -= 1;
        if self.n > 0 {
            return self.splits.next();
        }

        let text = self.splits.finder.text();
        if self.splits.last > text.len() {
            None
        } else {
            Some(&text[self.splits.last..])
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn ranges(pattern: &str, text: &str) -> Vec<std::ops::Range<usize>> {
        Regex::new(pattern)
            .unwrap()
            .find_iter(text)
            .unwrap()
            .map(|m| m.range())
            .collect()
    }

    #[test]
    fn test_find() {
        let re = Regex::new(r"\d+").unwrap();

        let m = re.find("abc 123 def").unwrap().unwrap();

        assert_eq!(m.range(), 4..7);
        assert_eq!(m.as_str(), "123");
        assert!(re.find("abc").unwrap().is_none());
    }

    #[test]
    fn test_find_iter() {
        let _ = pretty_env_logger::try_init();

        for &(regex, text) in &[
            (r"\b\w{13}\b", "Retroactively relinquishing remunerations is reprehensible."),
            (r"[a-z]+", "abc 123 DEF ghi"),
            (r"\d*", "a1bbb2"),
        ] {
            assert_eq!(
                regex::Regex::new(regex)
                    .unwrap()
                    .find_iter(text)
                    .map(|m| m.range())
                    .collect::<Vec<_>>(),
                ranges(regex, text),
                "{} over {:?}",
                regex,
                text
            );
        }
    }

    #[test]
    fn test_find_iter_unicode() {
        assert_eq!(ranges("", "é€"), vec![0..0, 2..2, 5..5]);
        assert_eq!(ranges("x*", "éx€"), vec![0..0, 2..3, 6..6]);
        assert_eq!(ranges("x*", "é€").len(), 3);
    }

    #[test]
    fn test_find_iter_rev() {
        let matches = Regex::new("a+").unwrap().find_iter("aa b aaa").unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(
            matches.rev().map(|m| m.as_str()).collect::<Vec<_>>(),
            vec!["aaa", "aa"]
        );
    }

    #[test]
    fn test_split() {
        let re = Regex::new(",").unwrap();

        assert_eq!(re.split("a,b,,c").unwrap().collect::<Vec<_>>(), vec!["a", "b", "", "c"]);
        assert_eq!(re.split("").unwrap().collect::<Vec<_>>(), vec![""]);
        assert_eq!(re.splitn("a,b,c", 2).unwrap().collect::<Vec<_>>(), vec!["a", "b,c"]);
        assert_eq!(re.splitn("a,b,c", 0).unwrap().count(), 0);
    }
}

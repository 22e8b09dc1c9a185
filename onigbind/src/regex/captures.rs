use std::fmt;
use std::ops::{Index, Range};
use std::vec;

use crate::{
    common::SearchOptions,
    compile::RegexRef,
    regex::Match,
    runtime::{Advance, MatchParam, Matching, Region, RegionRef},
    Result,
};

/// The capture groups of a single match.
///
/// Group 0 always corresponds to the entire match, each subsequent index to the
/// next capture group of the regex. Positions are byte offsets into the searched text.
#[derive(Clone)]
pub struct Captures<'t> {
    text: &'t str,
    regex: &'t RegexRef,
    locs: Vec<Option<Range<usize>>>,
}

impl<'t> Captures<'t> {
    fn new(text: &'t str, regex: &'t RegexRef, region: &RegionRef) -> Self {
        Captures {
            text,
            regex,
            locs: region.iter().map(|pos| pos.map(|(start, end)| start..end)).collect(),
        }
    }

    /// The match of the given group, `None` if it is not a valid group or did not participate.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        self.pos(i).map(|range| Match::new(self.text, range.start, range.end))
    }

    /// The match of the named group.
    ///
    /// When several groups share the name, the highest-numbered group that matched wins.
    pub fn name(&self, name: &str) -> Option<Match<'t>> {
        self.regex
            .group_numbers(name)
            .into_iter()
            .rev()
            .find_map(|group| self.get(group as usize))
    }

    /// The byte range of the given group.
    pub fn pos(&self, i: usize) -> Option<Range<usize>> {
        self.locs.get(i).cloned().flatten()
    }

    /// The text of the given group, empty if the group did not participate.
    pub fn at(&self, i: usize) -> &'t str {
        self.get(i).map_or("", |m| m.as_str())
    }

    /// The text of the named group, empty if no group of that name participated.
    pub fn at_name(&self, name: &str) -> &'t str {
        self.name(name).map_or("", |m| m.as_str())
    }

    /// The byte offset where the whole match starts.
    pub fn offset(&self) -> usize {
        self.pos(0).map_or(0, |range| range.start)
    }

    /// The number of groups, group 0 included.
    pub fn len(&self) -> usize {
        self.locs.len()
    }

    /// Returns `true` if no group was captured.
    pub fn is_empty(&self) -> bool {
        self.locs.is_empty()
    }

    /// Iterate the matches of all groups in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Match<'t>>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// The text searched.
    pub fn text(&self) -> &'t str {
        self.text
    }
}

impl fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|m| m.map(|m| m.as_str()))).finish()
    }
}

impl<'t> Index<usize> for Captures<'t> {
    type Output = str;

    fn index(&self, i: usize) -> &str {
        self.at(i)
    }
}

impl<'t, 'n> Index<&'n str> for Captures<'t> {
    type Output = str;

    fn index(&self, name: &'n str) -> &str {
        self.at_name(name)
    }
}

/// The captures of all non-overlapping matches of a regex in a string.
pub struct CapturesIter<'t>(vec::IntoIter<Captures<'t>>);

impl<'t> Iterator for CapturesIter<'t> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'t> DoubleEndedIterator for CapturesIter<'t> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl ExactSizeIterator for CapturesIter<'_> {}

impl RegexRef {
    /// The capture groups of the leftmost-first match in `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use onigbind::prelude::*;
    /// let re = Regex::new(r"(?<year>\d{4})-(\d{2})").unwrap();
    /// let caps = re.captures("on 2021-07").unwrap().unwrap();
    /// assert_eq!(&caps[0], "2021-07");
    /// assert_eq!(&caps["year"], "2021");
    /// ```
    pub fn captures<'t>(&'t self, text: &'t str) -> Result<Option<Captures<'t>>> {
        let mut region = Region::new()?;

        Ok(self
            .search_with_options(text, 0, text.len(), SearchOptions::NONE, Some(&mut *region))?
            .map(|_| Captures::new(text, self, &region)))
    }

    /// The capture groups of every non-overlapping match in `text`.
    pub fn captures_iter<'t>(&'t self, text: &'t str) -> Result<CapturesIter<'t>> {
        let param = MatchParam::new()?;
        let mut captures = vec![];

        self.scan_by(
            text.as_bytes(),
            0,
            text.len(),
            SearchOptions::NONE,
            &param,
            Advance::Char,
            |region| {
                captures.push(Captures::new(text, self, region));

                Matching::Continue
            },
        )?;

        Ok(CapturesIter(captures.into_iter()))
    }
}

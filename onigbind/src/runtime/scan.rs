use crate::{
    common::SearchOptions,
    compile::RegexRef,
    runtime::{MatchParamRef, Region, RegionRef},
    Error, Result,
};

/// Indicating whether or not matching should continue on the target data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matching {
    /// Continue matching.
    Continue,
    /// Terminate matching.
    Terminate,
}

impl Default for Matching {
    fn default() -> Self {
        Matching::Continue
    }
}

/// How far the cursor moves past a rejected empty match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Advance {
    /// One byte, the text may not be UTF-8.
    Byte,
    /// One UTF-8 encoded character.
    Char,
}

impl Advance {
    fn width(self, text: &[u8], cursor: usize) -> usize {
        match (self, text.get(cursor)) {
            (Advance::Char, Some(&b)) if b >= 0xF0 => 4,
            (Advance::Char, Some(&b)) if b >= 0xE0 => 3,
            (Advance::Char, Some(&b)) if b >= 0xC0 => 2,
            _ => 1,
        }
    }
}

impl RegexRef {
    /// Find every non-overlapping match starting between `from` and `to`, calling `callback`
    /// with the region of each accepted match.
    ///
    /// An empty match starting where the previous accepted match ended is skipped,
    /// and the search resumes one byte further.
    ///
    /// Returns the number of accepted matches. A mismatch ends the scan and is not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use onigbind::prelude::*;
    /// let re = Regex::new("a*").unwrap();
    /// let mp = MatchParam::new().unwrap();
    /// let mut matches = vec![];
    ///
    /// re.scan_with_param("baaab", 0, 5, SearchOptions::NONE, &mp, |region| {
    ///     matches.push(region.pos(0).unwrap());
    ///     Matching::Continue
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(matches, vec![(0, 0), (1, 4), (5, 5)]);
    /// ```
    pub fn scan_with_param<T, F>(
        &self,
        text: T,
        from: usize,
        to: usize,
        options: SearchOptions,
        param: &MatchParamRef,
        callback: F,
    ) -> Result<usize>
    where
        T: AsRef<[u8]>,
        F: FnMut(&RegionRef) -> Matching,
    {
        self.scan_by(text.as_ref(), from, to, options, param, Advance::Byte, callback)
    }

    pub(crate) fn scan_by<F>(
        &self,
        text: &[u8],
        from: usize,
        to: usize,
        options: SearchOptions,
        param: &MatchParamRef,
        advance: Advance,
        mut callback: F,
    ) -> Result<usize>
    where
        F: FnMut(&RegionRef) -> Matching,
    {
        if from > text.len() || to > text.len() {
            return Err(Error::InvalidRange {
                from,
                to,
                len: text.len(),
            });
        }

        let mut region = Region::new()?;
        let mut cursor = from;
        let mut last_end = None;
        let mut matched = 0;

        while cursor <= to {
            region.clear();

            if self.search_with_param(text, cursor, to, options, Some(&mut *region), param)?.is_none() {
                break;
            }

            let (start, end) = match region.pos(0) {
                Some(pos) => pos,
                None => break,
            };

            if start == end && last_end == Some(end) {
                trace!("skip empty match at {}", start);

                cursor += advance.width(text, cursor);
                continue;
            }

            trace!("match #{} @ [{}, {})", matched, start, end);

            matched += 1;
            cursor = end;
            last_end = Some(end);

            if callback(&region) == Matching::Terminate {
                break;
            }
        }

        Ok(matched)
    }
}

#[cfg(test)]
pub mod tests {
    use super::Advance;
    use crate::prelude::*;

    fn scan(pattern: &str, text: &str) -> Vec<(usize, usize)> {
        let re = Regex::new(pattern).unwrap();
        let mp = MatchParam::new().unwrap();
        let mut matches = vec![];

        let n = re
            .scan_with_param(text, 0, text.len(), SearchOptions::NONE, &mp, |region| {
                matches.push(region.pos(0).unwrap());
                Matching::Continue
            })
            .unwrap();

        assert_eq!(n, matches.len());

        matches
    }

    #[test]
    fn test_scan_empty_matches() {
        let _ = pretty_env_logger::try_init();

        assert_eq!(scan("a*", "baaab"), vec![(0, 0), (1, 4), (5, 5)]);
        assert_eq!(scan(r"\d*", "a1b2"), vec![(0, 0), (1, 2), (3, 4)]);
        assert_eq!(
            scan(r"\d*", "a1bbb2"),
            vec![(0, 0), (1, 2), (3, 3), (4, 4), (5, 6)]
        );
        assert_eq!(scan(r"\b", "test string"), vec![(0, 0), (4, 4), (5, 5), (11, 11)]);
        assert_eq!(scan("b|(?=,)", "ba,"), vec![(0, 1), (2, 2)]);
        assert_eq!(scan("", ""), vec![(0, 0)]);
    }

    #[test]
    fn test_scan_no_match() {
        assert!(scan("z", "baaab").is_empty());
    }

    #[test]
    fn test_scan_terminate() {
        let re = Regex::new("a").unwrap();
        let mp = MatchParam::new().unwrap();
        let mut calls = 0;

        let n = re
            .scan_with_param("aaaa", 0, 4, SearchOptions::NONE, &mp, |_| {
                calls += 1;
                if calls == 2 {
                    Matching::Terminate
                } else {
                    Matching::Continue
                }
            })
            .unwrap();

        assert_eq!(n, 2);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_scan_sub_range() {
        let re = Regex::new("a").unwrap();
        let mp = MatchParam::new().unwrap();
        let mut matches = vec![];

        re.scan_with_param("aaaa", 2, 4, SearchOptions::NONE, &mp, |region| {
            matches.push(region.pos(0).unwrap());
            Matching::Continue
        })
        .unwrap();

        assert_eq!(matches, vec![(2, 3), (3, 4)]);

        assert!(matches!(
            re.scan_with_param("aaaa", 0, 5, SearchOptions::NONE, &mp, |_| Matching::Continue),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_advance_width() {
        let text = "aé€😀".as_bytes();

        assert_eq!(Advance::Char.width(text, 0), 1);
        assert_eq!(Advance::Char.width(text, 1), 2);
        assert_eq!(Advance::Char.width(text, 3), 3);
        assert_eq!(Advance::Char.width(text, 6), 4);
        assert_eq!(Advance::Char.width(text, 10), 1);
        assert_eq!(Advance::Byte.width(text, 1), 1);
    }
}

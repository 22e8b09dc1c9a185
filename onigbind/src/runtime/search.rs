use std::ptr;

use foreign_types::ForeignTypeRef;

use crate::{
    common::{OnigError, SearchOptions},
    compile::RegexRef,
    ffi,
    runtime::{MatchParam, MatchParamRef, RegionRef},
    Error, Result,
};

impl RegexRef {
    /// Search once for a match starting between `from` and `to` with the given match parameters.
    ///
    /// A `to` below `from` searches backward. Matches may extend past `to`.
    ///
    /// Returns the byte offset where the match starts, or `None` on mismatch.
    /// The capture offsets are written to `region` when one is given.
    pub fn search_with_param<T>(
        &self,
        text: T,
        from: usize,
        to: usize,
        options: SearchOptions,
        region: Option<&mut RegionRef>,
        param: &MatchParamRef,
    ) -> Result<Option<usize>>
    where
        T: AsRef<[u8]>,
    {
        let bytes = text.as_ref();

        if from > bytes.len() || to > bytes.len() {
            return Err(Error::InvalidRange {
                from,
                to,
                len: bytes.len(),
            });
        }

        let region = region.map_or_else(ptr::null_mut, |region| region.as_ptr());

        let status = unsafe {
            let start = bytes.as_ptr();
            let end = start.add(bytes.len());

            ffi::onig_search_with_param(
                self.as_ptr(),
                start,
                end,
                start.add(from),
                start.add(to),
                region,
                options.bits(),
                param.as_ptr(),
            )
        };

        if status >= 0 {
            Ok(Some(status as usize))
        } else if status == ffi::ONIG_MISMATCH {
            Ok(None)
        } else {
            Err(OnigError::from(status).into())
        }
    }

    /// Search once with the engine's default limits.
    pub fn search_with_options<T>(
        &self,
        text: T,
        from: usize,
        to: usize,
        options: SearchOptions,
        region: Option<&mut RegionRef>,
    ) -> Result<Option<usize>>
    where
        T: AsRef<[u8]>,
    {
        let param = MatchParam::new()?;

        self.search_with_param(text, from, to, options, region, &param)
    }

    /// Returns true if and only if the regex matches the string given.
    ///
    /// Errors raised by the engine count as no match.
    pub fn is_match(&self, text: &str) -> bool {
        self.search_with_options(text, 0, text.len(), SearchOptions::NONE, None)
            .map(|pos| pos.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub mod tests {
    use crate::prelude::*;

    #[test]
    fn test_search() {
        let _ = pretty_env_logger::try_init();

        let re = Regex::new("l+").unwrap();
        let mp = MatchParam::new().unwrap();

        assert_eq!(
            re.search_with_param("hello", 0, 5, SearchOptions::NONE, None, &mp).unwrap(),
            Some(2)
        );
        assert_eq!(
            re.search_with_param("hello", 4, 5, SearchOptions::NONE, None, &mp).unwrap(),
            None
        );
        assert_eq!(
            re.search_with_param(b"hello".as_ref(), 0, 1, SearchOptions::NONE, None, &mp)
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_search_invalid_range() {
        let re = Regex::new("a").unwrap();

        assert_eq!(
            re.search_with_options("abc", 4, 3, SearchOptions::NONE, None),
            Err(Error::InvalidRange { from: 4, to: 3, len: 3 })
        );
        assert_eq!(
            re.search_with_options("abc", 0, 10, SearchOptions::NONE, None)
                .unwrap_err()
                .code(),
            crate::ffi::ONIGERR_INVALID_ARGUMENT
        );
    }

    #[test]
    fn test_search_notbol() {
        let re = Regex::new("^a").unwrap();

        assert!(re.is_match("abc"));
        assert_eq!(
            re.search_with_options("abc", 0, 3, SearchOptions::NOTBOL, None).unwrap(),
            None
        );
    }

    #[test]
    fn test_search_backward() {
        let re = Regex::new("a").unwrap();
        let mut region = Region::new().unwrap();

        assert_eq!(
            re.search_with_options("aXa", 3, 0, SearchOptions::NONE, Some(&mut *region))
                .unwrap(),
            Some(2)
        );
        assert_eq!(region.pos(0), Some((2, 3)));
    }
}

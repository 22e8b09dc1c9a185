use foreign_types::{foreign_type, ForeignType, ForeignTypeRef};
use libc::{c_int, c_uint, c_ulong};

use crate::{common::OnigError, error::AsResult, ffi, Result};

/// Per-search resource caps.
///
/// `None` keeps the engine default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of the backtracking stack.
    pub max_stack_size: Option<u32>,
    /// Maximum number of retries in a single match attempt.
    pub retry_limit: Option<u32>,
}

impl Limits {
    /// Limits from raw values, where `0` keeps the engine default.
    pub fn from_raw(max_stack_size: u32, retry_limit: u32) -> Self {
        Limits {
            max_stack_size: Some(max_stack_size).filter(|&n| n != 0),
            retry_limit: Some(retry_limit).filter(|&n| n != 0),
        }
    }
}

foreign_type! {
    /// Match parameters of a search, carrying its resource limits.
    pub unsafe type MatchParam: Send + Sync {
        type CType = ffi::OnigMatchParam;

        fn drop = free_match_param;
    }
}

unsafe fn free_match_param(mp: *mut ffi::OnigMatchParam) {
    ffi::onig_free_match_param(mp)
}

impl MatchParam {
    /// Allocate match parameters with the engine defaults.
    pub fn new() -> Result<MatchParam> {
        unsafe {
            let mp = ffi::onig_new_match_param();

            if mp.is_null() {
                return Err(OnigError::from(ffi::ONIGERR_MEMORY as c_int).into());
            }

            let mp = MatchParam::from_ptr(mp);

            ffi::onig_initialize_match_param(mp.as_ptr()).ok()?;

            Ok(mp)
        }
    }

    /// Allocate match parameters with the given limits.
    pub fn with_limits(limits: Limits) -> Result<MatchParam> {
        let mut mp = MatchParam::new()?;

        if let Some(size) = limits.max_stack_size {
            mp.set_match_stack_limit(size)?;
        }
        if let Some(limit) = limits.retry_limit {
            mp.set_retry_limit_in_match(limit)?;
        }

        Ok(mp)
    }
}

impl MatchParamRef {
    /// Cap the backtracking stack size of the search.
    pub fn set_match_stack_limit(&mut self, size: u32) -> Result<&mut Self> {
        unsafe { ffi::onig_set_match_stack_limit_size_of_match_param(self.as_ptr(), size as c_uint) }
            .ok()
            .map(|_| self)
    }

    /// Cap the retries of a single match attempt.
    pub fn set_retry_limit_in_match(&mut self, limit: u32) -> Result<&mut Self> {
        unsafe { ffi::onig_set_retry_limit_in_match_of_match_param(self.as_ptr(), limit as c_ulong) }
            .ok()
            .map(|_| self)
    }
}

use std::mem::MaybeUninit;
use std::ptr;
use std::str::FromStr;

use foreign_types::{foreign_type, ForeignType, ForeignTypeRef};

use crate::{
    common::{self, OnigError, RegexOptions, Syntax},
    ffi, Error, Result,
};

foreign_type! {
    /// A compiled Oniguruma regular expression.
    ///
    /// Searching only reads the compiled pattern, every search brings its own
    /// region and match parameters.
    pub unsafe type Regex: Send + Sync {
        type CType = ffi::OnigRegexType;

        fn drop = free_regex;
    }
}

unsafe fn free_regex(reg: *mut ffi::OnigRegexType) {
    ffi::onig_free(reg)
}

impl FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Regex> {
        Regex::new(s)
    }
}

impl Regex {
    /// Compiles a regular expression with the default options and syntax.
    pub fn new(pattern: &str) -> Result<Regex> {
        Regex::with_options(pattern, RegexOptions::NONE, Syntax::default())
    }

    /// Compiles a regular expression with the given options and syntax.
    pub fn with_options(pattern: &str, options: RegexOptions, syntax: Syntax) -> Result<Regex> {
        unsafe { Regex::compile(pattern.as_bytes(), options.bits(), syntax.as_ptr()) }
    }

    /// Compiles a UTF-8 encoded pattern with raw engine options and syntax.
    ///
    /// A null `syntax` selects the default syntax.
    ///
    /// # Safety
    ///
    /// `syntax` must be null or point to a live `OnigSyntaxType`.
    pub unsafe fn compile(
        pattern: &[u8],
        options: ffi::OnigOptionType,
        syntax: *mut ffi::OnigSyntaxType,
    ) -> Result<Regex> {
        common::init();

        let syntax = if syntax.is_null() {
            Syntax::default().as_ptr()
        } else {
            syntax
        };
        let start = pattern.as_ptr();
        let end = start.add(pattern.len());
        let mut reg = ptr::null_mut();
        let mut info = MaybeUninit::<ffi::OnigErrorInfo>::zeroed();

        let status = ffi::onig_new(
            &mut reg,
            start,
            end,
            options,
            common::utf8(),
            syntax,
            info.as_mut_ptr(),
        );

        if status == ffi::ONIG_NORMAL as _ && !reg.is_null() {
            debug!(
                "compiled pattern `{}` with options {:#x}",
                String::from_utf8_lossy(pattern),
                options
            );

            Ok(Regex::from_ptr(reg))
        } else {
            debug!(
                "fail to compile pattern `{}`, status {}",
                String::from_utf8_lossy(pattern),
                status
            );

            Err(OnigError::with_info(status, &info.assume_init()).into())
        }
    }
}

impl RegexRef {
    /// The number of capture groups in the pattern, not counting the whole match.
    pub fn captures_len(&self) -> usize {
        unsafe { ffi::onig_number_of_captures(self.as_ptr()).max(0) as usize }
    }

    /// The syntax the pattern was compiled with, if it is a built-in one.
    pub fn syntax(&self) -> Option<Syntax> {
        Syntax::from_ptr(unsafe { ffi::onig_get_syntax(self.as_ptr()) })
    }
}

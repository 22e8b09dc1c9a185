use std::fmt;

use libc::c_int;
use thiserror::Error;

use crate::ffi;

/// Broad classification of Oniguruma error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A match-stack or retry limit was exceeded during a search.
    ResourceLimit,
    /// The pattern could not be parsed or compiled.
    Syntax,
    /// Memory exhaustion, an invalid argument, or another engine fault.
    Internal,
}

/// An error code reported by Oniguruma, together with its message.
#[derive(Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct OnigError {
    code: c_int,
    message: String,
}

impl fmt::Debug for OnigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnigError")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish()
    }
}

impl From<c_int> for OnigError {
    fn from(code: c_int) -> Self {
        let mut buf = [0u8; ffi::ONIG_MAX_ERROR_MESSAGE_LEN as usize];

        let len = unsafe { ffi::onig_error_code_to_str(buf.as_mut_ptr(), code) };

        OnigError::new(code, &buf, len)
    }
}

impl OnigError {
    /// Builds the error for a failed compilation, using the parser's error info
    /// to name the offending part of the pattern.
    pub(crate) fn with_info(code: c_int, info: &ffi::OnigErrorInfo) -> Self {
        let mut buf = [0u8; ffi::ONIG_MAX_ERROR_MESSAGE_LEN as usize];

        let len = unsafe { ffi::onig_error_code_to_str(buf.as_mut_ptr(), code, info as *const ffi::OnigErrorInfo) };

        OnigError::new(code, &buf, len)
    }

    fn new(code: c_int, buf: &[u8], len: c_int) -> Self {
        let len = (len.max(0) as usize).min(buf.len());

        OnigError {
            code,
            message: String::from_utf8_lossy(&buf[..len]).into_owned(),
        }
    }

    /// The raw Oniguruma status code.
    pub fn code(&self) -> c_int {
        self.code
    }

    /// A human-readable error message describing the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Classifies the error code.
    pub fn kind(&self) -> ErrorKind {
        match self.code {
            ffi::ONIGERR_MATCH_STACK_LIMIT_OVER
            | ffi::ONIGERR_RETRY_LIMIT_IN_MATCH_OVER
            | ffi::ONIGERR_RETRY_LIMIT_IN_SEARCH_OVER => ErrorKind::ResourceLimit,
            code if code <= -100 => ErrorKind::Syntax,
            _ => ErrorKind::Internal,
        }
    }

    /// A match-stack or retry limit was exceeded.
    pub fn is_resource_limit(&self) -> bool {
        self.kind() == ErrorKind::ResourceLimit
    }
}

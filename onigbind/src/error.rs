use std::fmt;
use std::result::Result as StdResult;

use libc::c_int;
use thiserror::Error;

use crate::{common::OnigError, ffi, regex::ReplaceError};

/// The type returned by onigbind methods.
pub type Result<T> = StdResult<T, Error>;

/// onigbind Error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Oniguruma error
    #[error(transparent)]
    Onig(#[from] OnigError),

    /// The search range does not fit in the searched text.
    #[error("search range {from}..{to} is out of bounds for text of {len} bytes")]
    InvalidRange {
        /// Start of the requested range.
        from: usize,
        /// End of the requested range.
        to: usize,
        /// Length of the searched text.
        len: usize,
    },

    /// Replacement template error
    #[error(transparent)]
    Replace(#[from] ReplaceError),

    /// Invalid UTF-8 string
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// Invalid option
    #[error("invalid regex option: {0}")]
    InvalidOption(char),
}

impl Error {
    /// The Oniguruma status code equivalent to this error.
    ///
    /// Errors raised before reaching the engine are reported as `ONIGERR_INVALID_ARGUMENT`.
    pub fn code(&self) -> c_int {
        match self {
            Error::Onig(err) => err.code(),
            _ => ffi::ONIGERR_INVALID_ARGUMENT as c_int,
        }
    }
}

pub trait AsResult
where
    Self: Sized,
{
    type Output;
    type Error: fmt::Debug;

    fn ok(self) -> StdResult<Self::Output, Self::Error>;
}

impl AsResult for c_int {
    type Output = ();
    type Error = Error;

    fn ok(self) -> StdResult<Self::Output, Self::Error> {
        if self == ffi::ONIG_NORMAL as c_int {
            Ok(())
        } else {
            Err(OnigError::from(self).into())
        }
    }
}

//! Oniguruma is a modern and flexible regular expressions library.
//!
//! `onigbind` compiles UTF-8 patterns in one of the built-in syntaxes, and searches them
//! with per-search resource limits, reporting the capture offsets of every match.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! onigbind = "0.1"
//! ```
//!
//! # Examples
//!
//! ```
//! use onigbind::prelude::*;
//!
//! let re = Regex::new(r"(?<word>\w+)@(\d+)").unwrap();
//! let mp = MatchParam::with_limits(Limits::from_raw(0, 10_000)).unwrap();
//! let mut region = Region::new().unwrap();
//!
//! let pos = re
//!     .search_with_param("mail foo@42", 0, 11, SearchOptions::NONE, Some(&mut *region), &mp)
//!     .unwrap();
//!
//! assert_eq!(pos, Some(5));
//! assert_eq!(region.pos(0), Some((5, 11)));
//! assert_eq!(re.group_names().get("word"), Some(&[1][..]));
//!
//! let mut found = vec![];
//!
//! re.scan_with_param("a@1 b@2", 0, 7, SearchOptions::NONE, &mp, |region| {
//!     found.push(region.pos(0).unwrap());
//!     Matching::Continue
//! })
//! .unwrap();
//!
//! assert_eq!(found, vec![(0, 3), (4, 7)]);
//! ```
#![deny(missing_docs, rust_2018_compatibility, rust_2018_idioms)]

#[macro_use]
extern crate log;

#[doc(hidden)]
pub mod ffi {
    pub use onig_sys::*;
}

mod common;
mod compile;
mod error;
pub mod regex;
mod runtime;

pub use crate::common::{version, version_str, ErrorKind, OnigError, RegexOptions, SearchOptions, Syntax};
pub use crate::compile::{GroupName, GroupNames, Regex, RegexBuilder, RegexRef};
pub use crate::error::{Error, Result};
pub use crate::regex::{Captures, Dialect, Match, NoExpand, ReplaceError, Replacer};
pub use crate::runtime::{Limits, MatchParam, MatchParamRef, Matching, Positions, Region, RegionRef};

/// The `onigbind` Prelude
pub mod prelude {
    pub use crate::{
        Captures, Error, Limits, MatchParam, MatchParamRef, Matching, NoExpand, Regex, RegexBuilder, RegexOptions,
        RegexRef, Region, RegionRef, Replacer, SearchOptions, Syntax,
    };
}

#[cfg(doctest)]
#[macro_use]
extern crate doc_comment;

#[cfg(doctest)]
doctest!("../../README.md");

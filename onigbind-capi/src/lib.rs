//! A C ABI over `onigbind`, for hosts that drive Oniguruma through plain function calls.
//!
//! Every text and pattern buffer passed in is `malloc`-ed by the host and released here
//! before the call returns. Every structure handed out is owned by the host
//! and released with the matching `free*` function. All `free*` functions accept null.
//!
//! The structure layouts are declared in `include/onigbind.h`.
#![allow(non_snake_case)]
#![deny(rust_2018_compatibility, rust_2018_idioms)]

#[macro_use]
extern crate log;

mod buf;
mod compile;
mod search;
mod types;

#[cfg(test)]
mod testing;

pub use crate::buf::CBuf;
pub use crate::compile::{callOnigForeachName, freeGroupNamesArray, freeRegex, newRegex, ForeachNameCallback};
pub use crate::search::{
    freeRegion, freeRegionsArray, freeRegionsArrayWithRegions, searchAllWithParam, searchFirstWithParam,
};
pub use crate::types::{
    GroupName, GroupNamesArray, NewRegexResult, Region, RegionsArray, SearchAllResult, SearchFirstResult,
};

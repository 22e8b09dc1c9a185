mod match_param;
mod region;
mod scan;
mod search;

pub use self::match_param::{Limits, MatchParam, MatchParamRef};
pub use self::region::{Positions, Region, RegionRef};
pub(crate) use self::scan::Advance;
pub use self::scan::Matching;

pub(super) use super::{
    AgeUnit, LimitParseError, SizeUnit, parse_age_days, parse_count, parse_positive_real,
    parse_size,
};
pub(super) use std::num::NonZeroU64;

mod age;
mod real;

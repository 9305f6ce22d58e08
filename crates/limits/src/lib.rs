#![doc = "Argument parsing for the numeric limits accepted by `fileprune`."]
#![doc = ""]
#![doc = "Counts, byte sizes with `k|m|g|t` multipliers, ages with `w|m|y`"]
#![doc = "multipliers, and the positive real parameters of the exponential and"]
#![doc = "Gaussian distributions all funnel through this crate so the CLI reports"]
#![doc = "malformed values consistently."]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod parse;

pub use crate::parse::{
    AgeUnit, LimitParseError, SizeUnit, parse_age_days, parse_count, parse_positive_real,
    parse_size,
};

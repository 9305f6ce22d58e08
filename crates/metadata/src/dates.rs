//! Records built from date labels instead of files.
//!
//! Each operand is parsed into a point in time, interpreted in a caller
//! supplied UTC offset. The default pattern is `YYYY-MM-DD [hh[:mm[:ss]]]`;
//! missing time fields are zero. A custom pattern uses the `time` crate's
//! format description syntax, e.g. `[year][month][day]`.

use std::time::SystemTime;

use engine::FileRecord;
use time::format_description::{self, OwnedFormatItem};
use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};

use crate::error::MetadataError;

const ISO_DESCRIPTION: &str = "YYYY-MM-DD [hh[:mm[:ss]]]";

/// How date operands are parsed.
#[derive(Clone, Debug, Default)]
pub enum DatePattern {
    /// `YYYY-MM-DD` optionally followed by whitespace and `hh[:mm[:ss]]`.
    #[default]
    Iso,
    /// A `time` format description supplied by the user.
    Custom {
        /// The description as given.
        description: String,
        /// The compiled description.
        items: OwnedFormatItem,
    },
}

impl DatePattern {
    /// Compiles a custom format description.
    pub fn custom(description: &str) -> Result<Self, MetadataError> {
        let items = format_description::parse_owned::<1>(description).map_err(|error| {
            MetadataError::Pattern {
                pattern: description.to_owned(),
                reason: error.to_string(),
            }
        })?;
        Ok(Self::Custom {
            description: description.to_owned(),
            items,
        })
    }

    /// Parses `input` as a local time at `offset`.
    pub fn parse(&self, input: &str, offset: UtcOffset) -> Result<SystemTime, MetadataError> {
        let local = match self {
            Self::Iso => parse_iso(input),
            Self::Custom { items, .. } => parse_custom(input, items),
        }
        .map_err(|reason| MetadataError::Date {
            input: input.to_owned(),
            expected: self.description().to_owned(),
            reason,
        })?;

        Ok(SystemTime::from(local.assume_offset(offset)))
    }

    /// Human readable form of the pattern.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Iso => ISO_DESCRIPTION,
            Self::Custom { description, .. } => description,
        }
    }
}

/// The local UTC offset, or UTC when it cannot be determined.
#[must_use]
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Builds one zero-sized record per date operand, named after the operand.
pub fn parse_dates<I, S>(
    operands: I,
    pattern: &DatePattern,
    offset: UtcOffset,
) -> Result<Vec<FileRecord>, MetadataError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    operands
        .into_iter()
        .map(|operand| {
            let label = operand.as_ref();
            let stamp = pattern.parse(label, offset)?;
            tracing::debug!(target: "fileprune::stat", label, "parsed date");
            Ok(FileRecord::new(label, 0, stamp))
        })
        .collect()
}

fn parse_iso(input: &str) -> Result<PrimitiveDateTime, String> {
    let mut parts = input.split_ascii_whitespace();
    let date_text = parts.next().ok_or("missing date")?;
    let time_text = parts.next();
    if parts.next().is_some() {
        return Err("unexpected text after the time".to_owned());
    }

    let fields: Vec<&str> = date_text.split('-').collect();
    let [year, month, day] = fields.as_slice() else {
        return Err("expected year, month and day separated by '-'".to_owned());
    };
    let year: i32 = numeric_field(year, "year")?;
    let month = Month::try_from(numeric_field::<u8>(month, "month")?)
        .map_err(|error| error.to_string())?;
    let day: u8 = numeric_field(day, "day")?;
    let date = Date::from_calendar_date(year, month, day).map_err(|error| error.to_string())?;

    let time = match time_text {
        None => Time::MIDNIGHT,
        Some(text) => {
            let fields: Vec<&str> = text.split(':').collect();
            if fields.len() > 3 {
                return Err("expected at most hours, minutes and seconds".to_owned());
            }
            let mut hms = [0u8; 3];
            for (slot, (field, name)) in hms
                .iter_mut()
                .zip(fields.iter().zip(["hour", "minute", "second"]))
            {
                *slot = numeric_field(field, name)?;
            }
            Time::from_hms(hms[0], hms[1], hms[2]).map_err(|error| error.to_string())?
        }
    };

    Ok(PrimitiveDateTime::new(date, time))
}

fn numeric_field<T: std::str::FromStr>(text: &str, name: &str) -> Result<T, String> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(format!("invalid {name} '{text}'"));
    }
    text.parse().map_err(|_| format!("{name} '{text}' out of range"))
}

fn parse_custom(input: &str, items: &OwnedFormatItem) -> Result<PrimitiveDateTime, String> {
    match PrimitiveDateTime::parse(input, items) {
        Ok(stamp) => Ok(stamp),
        Err(first) => Date::parse(input, items)
            .map(Date::midnight)
            .map_err(|_| first.to_string()),
    }
}

use std::num::NonZeroU64;

use thiserror::Error;

mod numeric;

use self::numeric::{parse_digits, split_numeric_prefix};

/// Errors returned when a limit argument cannot be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum LimitParseError {
    /// The argument was empty or contained only whitespace.
    #[error("value must not be empty")]
    Empty,
    /// The argument did not start with an unsigned decimal integer.
    #[error("value must be an unsigned integer")]
    InvalidDigits,
    /// The integer part was zero.
    #[error("value must be greater than zero")]
    Zero,
    /// The integer was followed by an unrecognised multiplier.
    #[error("invalid multiplier '{0}'")]
    UnknownSuffix(char),
    /// The integer was followed by more than one multiplier character.
    #[error("trailing characters after multiplier")]
    TrailingCharacters,
    /// The scaled value overflowed the supported range.
    #[error("value exceeds the supported range")]
    TooLarge,
    /// A real-valued argument could not be parsed as a decimal number.
    #[error("value must be a decimal number")]
    InvalidNumber,
    /// A real-valued argument was zero, negative, or not finite.
    #[error("value must be a positive number")]
    NotPositive,
}

/// Binary multiplier accepted after a size argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizeUnit {
    /// Plain bytes (no suffix).
    Bytes,
    /// `k`: 1024 bytes.
    Kibi,
    /// `m`: 1024² bytes.
    Mebi,
    /// `g`: 1024³ bytes.
    Gibi,
    /// `t`: 1024⁴ bytes.
    Tebi,
}

impl SizeUnit {
    fn from_suffix(suffix: char) -> Option<Self> {
        match suffix.to_ascii_lowercase() {
            'k' => Some(Self::Kibi),
            'm' => Some(Self::Mebi),
            'g' => Some(Self::Gibi),
            't' => Some(Self::Tebi),
            _ => None,
        }
    }

    /// Number of bytes represented by one unit.
    pub const fn multiplier(self) -> u64 {
        let exponent = match self {
            Self::Bytes => 0,
            Self::Kibi => 1,
            Self::Mebi => 2,
            Self::Gibi => 3,
            Self::Tebi => 4,
        };
        1024u64.pow(exponent)
    }
}

/// Calendar multiplier accepted after an age argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AgeUnit {
    /// Plain days (no suffix).
    Days,
    /// `w`: seven days.
    Weeks,
    /// `m`: 30.4375 days, truncated after scaling.
    Months,
    /// `y`: 365.25 days, truncated after scaling.
    Years,
}

impl AgeUnit {
    fn from_suffix(suffix: char) -> Option<Self> {
        match suffix.to_ascii_lowercase() {
            'w' => Some(Self::Weeks),
            'm' => Some(Self::Months),
            'y' => Some(Self::Years),
            _ => None,
        }
    }

    /// Converts `count` units into whole days.
    ///
    /// Months and years use the mean Gregorian lengths and truncate the
    /// product, so `1m` is 30 days and `1y` is 365 days.
    pub fn to_days(self, count: u64) -> Result<u64, LimitParseError> {
        let (numerator, denominator) = match self {
            Self::Days => (1u128, 1u128),
            Self::Weeks => (7, 1),
            Self::Months => (304_375, 10_000),
            Self::Years => (36_525, 100),
        };
        let days = u128::from(count) * numerator / denominator;
        u64::try_from(days).map_err(|_| LimitParseError::TooLarge)
    }
}

/// Parses a `--count` argument: a positive decimal integer.
pub fn parse_count(text: &str) -> Result<NonZeroU64, LimitParseError> {
    let trimmed = trim(text)?;
    let value = parse_digits(trimmed.as_bytes())?;
    NonZeroU64::new(value).ok_or(LimitParseError::Zero)
}

/// Parses a `--size` or `--free-space` argument.
///
/// The integer may be followed by one of `k`, `m`, `g`, or `t` (either
/// case), each scaling by a further factor of 1024.
///
/// ```
/// use limits::parse_size;
///
/// assert_eq!(parse_size("3k").unwrap().get(), 3 * 1024);
/// assert_eq!(parse_size("1G").unwrap().get(), 1 << 30);
/// assert!(parse_size("0").is_err());
/// ```
pub fn parse_size(text: &str) -> Result<NonZeroU64, LimitParseError> {
    let (value, suffix) = parse_scaled(text)?;
    let unit = match suffix {
        None => SizeUnit::Bytes,
        Some(ch) => SizeUnit::from_suffix(ch).ok_or(LimitParseError::UnknownSuffix(ch))?,
    };
    let bytes = value
        .checked_mul(unit.multiplier())
        .ok_or(LimitParseError::TooLarge)?;
    NonZeroU64::new(bytes).ok_or(LimitParseError::Zero)
}

/// Parses an `--age` argument into whole days.
///
/// The integer may be followed by `w` (weeks), `m` (months), or `y`
/// (years), case-insensitively.
pub fn parse_age_days(text: &str) -> Result<NonZeroU64, LimitParseError> {
    let (value, suffix) = parse_scaled(text)?;
    let unit = match suffix {
        None => AgeUnit::Days,
        Some(ch) => AgeUnit::from_suffix(ch).ok_or(LimitParseError::UnknownSuffix(ch))?,
    };
    NonZeroU64::new(unit.to_days(value)?).ok_or(LimitParseError::Zero)
}

/// Parses a strictly positive, finite real number such as an exponential
/// base or a standard deviation.
pub fn parse_positive_real(text: &str) -> Result<f64, LimitParseError> {
    let trimmed = trim(text)?;
    let value: f64 = trimmed
        .parse()
        .map_err(|_| LimitParseError::InvalidNumber)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LimitParseError::NotPositive)
    }
}

fn trim(text: &str) -> Result<&str, LimitParseError> {
    let trimmed = text.trim_matches(|ch: char| ch.is_ascii_whitespace());
    if trimmed.is_empty() {
        Err(LimitParseError::Empty)
    } else {
        Ok(trimmed)
    }
}

/// Splits `text` into a non-zero integer and an optional one-character suffix.
fn parse_scaled(text: &str) -> Result<(u64, Option<char>), LimitParseError> {
    let trimmed = trim(text)?;
    let (digits, remainder) = split_numeric_prefix(trimmed);
    if digits.is_empty() {
        return Err(LimitParseError::InvalidDigits);
    }

    let value = parse_digits(digits.as_bytes())?;
    if value == 0 {
        return Err(LimitParseError::Zero);
    }

    let mut chars = remainder.chars();
    let suffix = chars.next();
    if chars.next().is_some() {
        return Err(match suffix {
            Some(ch) if !ch.is_ascii_alphabetic() => LimitParseError::UnknownSuffix(ch),
            _ => LimitParseError::TrailingCharacters,
        });
    }

    Ok((value, suffix))
}

#[cfg(test)]
mod tests;

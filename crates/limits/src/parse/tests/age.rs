use super::{AgeUnit, LimitParseError, NonZeroU64, parse_age_days};

fn days(text: &str) -> Result<u64, LimitParseError> {
    parse_age_days(text).map(NonZeroU64::get)
}

#[test]
fn age_without_suffix_is_days() {
    assert_eq!(days("30"), Ok(30));
}

#[test]
fn age_weeks_multiply_by_seven() {
    assert_eq!(days("2w"), Ok(14));
    assert_eq!(days("2W"), Ok(14));
}

#[test]
fn age_months_truncate_mean_month() {
    assert_eq!(days("1m"), Ok(30));
    assert_eq!(days("2m"), Ok(60));
    assert_eq!(days("4M"), Ok(121));
    assert_eq!(days("12m"), Ok(365));
}

#[test]
fn age_years_truncate_mean_year() {
    assert_eq!(days("1y"), Ok(365));
    assert_eq!(days("2y"), Ok(730));
    assert_eq!(days("4Y"), Ok(1461));
}

#[test]
fn age_rejects_size_suffixes() {
    assert_eq!(days("3k"), Err(LimitParseError::UnknownSuffix('k')));
    assert_eq!(days("3d"), Err(LimitParseError::UnknownSuffix('d')));
}

#[test]
fn age_rejects_zero() {
    assert_eq!(days("0w"), Err(LimitParseError::Zero));
}

#[test]
fn age_unit_conversion_reports_overflow() {
    assert_eq!(AgeUnit::Weeks.to_days(u64::MAX), Err(LimitParseError::TooLarge));
    assert_eq!(AgeUnit::Days.to_days(u64::MAX), Ok(u64::MAX));
    assert!(AgeUnit::Months.to_days(u64::MAX / 31).is_ok());
}

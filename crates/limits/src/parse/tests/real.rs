use super::{LimitParseError, parse_positive_real};

#[test]
fn positive_reals_parse() {
    assert_eq!(parse_positive_real("2"), Ok(2.0));
    assert_eq!(parse_positive_real("1.5"), Ok(1.5));
    assert_eq!(parse_positive_real(" 180 "), Ok(180.0));
    assert_eq!(parse_positive_real("1e2"), Ok(100.0));
}

#[test]
fn non_positive_reals_are_rejected() {
    for text in ["0", "0.0", "-1", "-0.5"] {
        assert_eq!(
            parse_positive_real(text),
            Err(LimitParseError::NotPositive),
            "input: {text}"
        );
    }
}

#[test]
fn non_finite_reals_are_rejected() {
    for text in ["inf", "NaN", "1e400"] {
        assert_eq!(
            parse_positive_real(text),
            Err(LimitParseError::NotPositive),
            "input: {text}"
        );
    }
}

#[test]
fn malformed_reals_are_rejected() {
    assert_eq!(parse_positive_real("two"), Err(LimitParseError::InvalidNumber));
    assert_eq!(parse_positive_real("1.5x"), Err(LimitParseError::InvalidNumber));
    assert_eq!(parse_positive_real(""), Err(LimitParseError::Empty));
}

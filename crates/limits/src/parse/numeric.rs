use super::LimitParseError;

/// Splits the leading ASCII digits of `text` from the remainder.
pub(crate) fn split_numeric_prefix(text: &str) -> (&str, &str) {
    let end = text
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Accumulates decimal digits with overflow checking.
pub(crate) fn parse_digits(bytes: &[u8]) -> Result<u64, LimitParseError> {
    if bytes.is_empty() {
        return Err(LimitParseError::InvalidDigits);
    }

    let mut value = 0u64;

    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(LimitParseError::InvalidDigits);
        }

        value = value
            .checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(byte - b'0')))
            .ok_or(LimitParseError::TooLarge)?;
    }

    Ok(value)
}

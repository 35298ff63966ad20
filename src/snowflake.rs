//! The packed snowflake value and its decimal form

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSnowflakeError;

/// A packed 64-bit snowflake
///
/// Ordering is numeric, so sorting snowflakes sorts them by timestamp first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Snowflake(u64);

impl Snowflake {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    #[inline(always)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn to_raw(self) -> u64 {
        self.0
    }

    /// Decode a decimal string
    ///
    /// Only ASCII digits are accepted. Leading zeros are tolerated on input even
    /// though [`Display`](fmt::Display) never produces them.
    pub fn parse_decimal(s: &str) -> Result<Self, ParseSnowflakeError> {
        if s.is_empty() {
            return Err(ParseSnowflakeError::Empty);
        }

        let mut value: u64 = 0;
        for (index, ch) in s.char_indices() {
            let digit = ch
                .to_digit(10)
                .ok_or(ParseSnowflakeError::InvalidDigit { ch, index })?;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as u64))
                .ok_or(ParseSnowflakeError::Overflow)?;
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Snowflake {
    type Err = ParseSnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_decimal(s)
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_no_leading_zeros() {
        assert_eq!(Snowflake::ZERO.to_string(), "0");
        assert_eq!(Snowflake::from_raw(4194304).to_string(), "4194304");
        assert_eq!(Snowflake::MAX.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("0".parse::<Snowflake>().unwrap(), Snowflake::ZERO);
        assert_eq!("000123".parse::<Snowflake>().unwrap().to_raw(), 123);
        assert_eq!(
            "18446744073709551615".parse::<Snowflake>().unwrap(),
            Snowflake::MAX
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Snowflake>(), Err(ParseSnowflakeError::Empty));
        assert_eq!(
            "12a4".parse::<Snowflake>(),
            Err(ParseSnowflakeError::InvalidDigit { ch: 'a', index: 2 })
        );
        assert_eq!(
            "-1".parse::<Snowflake>(),
            Err(ParseSnowflakeError::InvalidDigit { ch: '-', index: 0 })
        );
        assert_eq!(
            " 1".parse::<Snowflake>(),
            Err(ParseSnowflakeError::InvalidDigit { ch: ' ', index: 0 })
        );
        assert_eq!(
            "18446744073709551616".parse::<Snowflake>(),
            Err(ParseSnowflakeError::Overflow)
        );
    }

    #[test]
    fn test_ordering_is_numeric() {
        let small = Snowflake::from_raw(9);
        let large = Snowflake::from_raw(10);
        assert!(small < large);
        // Lexicographic order of the strings disagrees
        assert!(small.to_string() > large.to_string());
    }
}

//! Local date-time parsing shared by the timestamped records.
//!
//! Browsers' `datetime-local` inputs send minute precision
//! (`2025-11-12T00:42`), so seconds are optional on input. Output always
//! carries seconds.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Canonical form, used for storage and accepted first on input.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses `value` with seconds, falling back to minute precision.
pub fn parse_local(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, MINUTE_FORMAT))
}

/// `deserialize_with` target for `NaiveDateTime` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_local(&text).map_err(|err| {
        serde::de::Error::custom(format!("invalid local date-time `{text}`: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::parse_local;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn accepts_minute_second_and_fractional_precision() {
        let minute = parse_local("2025-11-12T00:42").unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 11, 12)
            .unwrap()
            .and_hms_opt(0, 42, 0)
            .unwrap();
        assert_eq!(minute, expected);

        assert_eq!(parse_local("2025-11-12T00:42:00").unwrap(), expected);

        let fractional = parse_local("2025-11-12T00:42:07.250").unwrap();
        assert_eq!(fractional.second(), 7);
        assert_eq!(fractional.nanosecond(), 250_000_000);
    }

    #[test]
    fn rejects_dates_without_time() {
        assert!(parse_local("2025-11-12").is_err());
        assert!(parse_local("2025-11-12T7").is_err());
    }
}

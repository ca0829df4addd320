//
//  testrail-cli
//  api/types/timespan.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Compact duration strings.
//!
//! TestRail encodes estimates and elapsed times as strings such as
//! `"1d 2h 3m 4s"`, `"30s"` or `"2m"`. [`Timespan`] parses those into a
//! [`chrono::Duration`] and renders them back in the same notation.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::api::common::ApiError;

/// `<integer><unit letter>`, optionally separated from the unit by spaces.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*([A-Za-z])").expect("timespan pattern is valid"));

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// A duration expressed in TestRail's `d h m s` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timespan(Duration);

impl Timespan {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Builds a timespan from whole seconds.
    pub fn from_seconds(seconds: i64) -> Self {
        Self(Duration::seconds(seconds))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// Parses a compact duration string.
    ///
    /// Each whitespace-separated `<integer><unit>` token is added to the total;
    /// units are `d`, `h`, `m` and `s`, case-insensitive. An absent or blank
    /// string yields `Ok(None)`. Unknown unit letters, stray characters and
    /// overflowing amounts are errors.
    ///
    /// ```rust
    /// use testrail_cli::api::types::Timespan;
    ///
    /// let ts = Timespan::parse("1d 2h 3m 4s").unwrap().unwrap();
    /// assert_eq!(ts.num_seconds(), 93_784);
    /// assert_eq!(Timespan::parse("  ").unwrap(), None);
    /// assert!(Timespan::parse("5x").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Option<Self>, ApiError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let invalid = |reason: &str| ApiError::InvalidTimespan(format!("{:?}: {}", text, reason));

        let mut total = Duration::zero();
        let mut consumed = 0;

        for captures in TOKEN_PATTERN.captures_iter(trimmed) {
            let (Some(whole), Some(amount), Some(unit)) =
                (captures.get(0), captures.get(1), captures.get(2))
            else {
                continue;
            };

            if !trimmed[consumed..whole.start()].trim().is_empty() {
                return Err(invalid("unexpected characters"));
            }

            let amount: i64 = amount
                .as_str()
                .parse()
                .map_err(|_| invalid("amount out of range"))?;

            let part = match unit.as_str().to_ascii_lowercase().as_str() {
                "d" => Duration::try_days(amount),
                "h" => Duration::try_hours(amount),
                "m" => Duration::try_minutes(amount),
                "s" => Duration::try_seconds(amount),
                other => return Err(invalid(&format!("unknown unit '{}'", other))),
            }
            .ok_or_else(|| invalid("amount out of range"))?;

            total = total
                .checked_add(&part)
                .ok_or_else(|| invalid("amount out of range"))?;
            consumed = whole.end();
        }

        if !trimmed[consumed..].trim().is_empty() {
            return Err(invalid("unexpected characters"));
        }

        Ok(Some(Self(total)))
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining = self.0.num_seconds();
        if remaining <= 0 {
            return f.write_str("0s");
        }

        let mut parts = Vec::with_capacity(4);
        for (unit, size) in [
            ('d', SECONDS_PER_DAY),
            ('h', SECONDS_PER_HOUR),
            ('m', SECONDS_PER_MINUTE),
            ('s', 1),
        ] {
            let amount = remaining / size;
            if amount > 0 {
                parts.push(format!("{}{}", amount, unit));
                remaining %= size;
            }
        }

        f.write_str(&parts.join(" "))
    }
}

impl FromStr for Timespan {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?.ok_or_else(|| ApiError::InvalidTimespan("empty timespan".to_string()))
    }
}

impl From<Duration> for Timespan {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl Serialize for Timespan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timespan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Serde adapter for optional timespan fields.
///
/// Use with `#[serde(default, with = "timespan::optional", skip_serializing_if = "Option::is_none")]`.
/// `null`, a missing field and a blank string all read as `None`.
pub mod optional {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Timespan>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(timespan) => serializer.serialize_str(&timespan.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Timespan>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => Timespan::parse(&text).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_units() {
        let ts = Timespan::parse("1d 2h 3m 4s").unwrap().unwrap();
        assert_eq!(
            ts.as_duration(),
            Duration::days(1) + Duration::hours(2) + Duration::minutes(3) + Duration::seconds(4)
        );
    }

    #[test]
    fn test_parse_seconds_only() {
        let ts = Timespan::parse("90s").unwrap().unwrap();
        assert_eq!(ts.num_seconds(), 90);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_tolerates_spacing() {
        let ts = Timespan::parse("2H 5 M").unwrap().unwrap();
        assert_eq!(ts.num_seconds(), 2 * 3600 + 5 * 60);
        let compact = Timespan::parse("1d2h").unwrap().unwrap();
        assert_eq!(compact.num_seconds(), 86_400 + 7_200);
    }

    #[test]
    fn test_unknown_unit_is_error() {
        assert!(matches!(Timespan::parse("5x"), Err(ApiError::InvalidTimespan(_))));
        assert!(Timespan::parse("1h 5w").is_err());
    }

    #[test]
    fn test_stray_text_is_error() {
        assert!(Timespan::parse("soon").is_err());
        assert!(Timespan::parse("1h and 5m").is_err());
        assert!(Timespan::parse("10").is_err());
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(Timespan::parse("").unwrap(), None);
        assert_eq!(Timespan::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Timespan::from_seconds(93_784).to_string(), "1d 2h 3m 4s");
        assert_eq!(Timespan::from_seconds(90).to_string(), "1m 30s");
        assert_eq!(Timespan::from_seconds(7200).to_string(), "2h");
        assert_eq!(Timespan::from_seconds(0).to_string(), "0s");
    }

    #[test]
    fn test_optional_adapter() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Holder {
            #[serde(default, with = "optional", skip_serializing_if = "Option::is_none")]
            estimate: Option<Timespan>,
        }

        let parsed: Holder = serde_json::from_str(r#"{"estimate":"1m 5s"}"#).unwrap();
        assert_eq!(parsed.estimate, Some(Timespan::from_seconds(65)));

        let blank: Holder = serde_json::from_str(r#"{"estimate":""}"#).unwrap();
        assert_eq!(blank.estimate, None);
        let null: Holder = serde_json::from_str(r#"{"estimate":null}"#).unwrap();
        assert_eq!(null.estimate, None);
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.estimate, None);

        assert!(serde_json::from_str::<Holder>(r#"{"estimate":"3q"}"#).is_err());
        assert_eq!(serde_json::to_string(&Holder { estimate: None }).unwrap(), "{}");
    }
}

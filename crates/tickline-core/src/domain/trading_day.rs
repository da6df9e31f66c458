use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Weekday};

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DAY_FIRST_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");

/// Input encodings accepted for request dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `YYYY-MM-DD`, the canonical wire encoding.
    #[default]
    Iso,
    /// `DD-MM-YYYY`, kept for callers that still send day-first input.
    DayFirst,
}

impl DateFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::DayFirst => "day_first",
        }
    }

    /// Human-readable shape of the encoding, used in parse errors.
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Iso => "YYYY-MM-DD",
            Self::DayFirst => "DD-MM-YYYY",
        }
    }

    const fn items(self) -> &'static [BorrowedFormatItem<'static>] {
        match self {
            Self::Iso => ISO_DATE,
            Self::DayFirst => DAY_FIRST_DATE,
        }
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar date on the trading timeline.
///
/// The ordinal form (a monotonic day count since a fixed epoch) is the sole
/// regression feature downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDay(Date);

impl TradingDay {
    /// Parse a raw date string under the given encoding.
    ///
    /// Surrounding whitespace and single quotes are stripped first; one of
    /// the upstream callers quotes its dates.
    pub fn parse(input: &str, format: DateFormat) -> Result<Self, ValidationError> {
        let trimmed = input.trim().trim_matches('\'');
        let date =
            Date::parse(trimmed, format.items()).map_err(|_| ValidationError::InvalidDate {
                value: trimmed.to_owned(),
                expected: format.expected(),
            })?;
        Ok(Self(date))
    }

    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    /// Monotonic day number since a fixed calendar epoch.
    pub const fn ordinal(self) -> i64 {
        self.0.to_julian_day() as i64
    }

    /// The next calendar day. No weekend or holiday adjustment.
    pub fn next(self) -> Result<Self, ValidationError> {
        self.0
            .next_day()
            .map(Self)
            .ok_or(ValidationError::DateOutOfRange)
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("calendar dates must be ISO formattable")
    }
}

impl Display for TradingDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradingDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradingDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value, DateFormat::Iso).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let day = TradingDay::parse("2024-01-02", DateFormat::Iso).expect("must parse");
        assert_eq!(day.format_iso(), "2024-01-02");
    }

    #[test]
    fn parses_quoted_day_first_date() {
        let day = TradingDay::parse("'02-01-2024'", DateFormat::DayFirst).expect("must parse");
        assert_eq!(day.format_iso(), "2024-01-02");
    }

    #[test]
    fn rejects_iso_input_in_day_first_mode() {
        let err = TradingDay::parse("2024-01-02", DateFormat::DayFirst).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::InvalidDate {
                expected: "DD-MM-YYYY",
                ..
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_components() {
        let err = TradingDay::parse("2024-13-40", DateFormat::Iso).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn ordinal_advances_one_per_day() {
        let friday = TradingDay::parse("2024-03-01", DateFormat::Iso).expect("must parse");
        let saturday = friday.next().expect("in range");
        assert_eq!(saturday.ordinal(), friday.ordinal() + 1);
        assert!(saturday.is_weekend());
        assert!(!friday.is_weekend());
    }

    #[test]
    fn next_crosses_month_boundary() {
        let day = TradingDay::parse("2024-02-29", DateFormat::Iso).expect("must parse");
        assert_eq!(day.next().expect("in range").format_iso(), "2024-03-01");
    }

    #[test]
    fn serde_uses_iso_string() {
        let day = TradingDay::parse("2024-06-28", DateFormat::Iso).expect("must parse");
        let json = serde_json::to_string(&day).expect("must serialize");
        assert_eq!(json, "\"2024-06-28\"");
        let back: TradingDay = serde_json::from_str(&json).expect("must deserialize");
        assert_eq!(back, day);
    }
}

//! Date ranges of stays and the date formats accepted for them

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::error::{AppError, AppResult};

/// Inclusive start, checkout-day end. A stay starting and ending on the same
/// day occupies that one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::Validation(format!(
                "end_date {} is before start_date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// First day no longer occupied
    pub fn end_exclusive(&self) -> NaiveDate {
        if self.end > self.start {
            self.end
        } else {
            self.start.checked_add_days(Days::new(1)).unwrap_or(self.start)
        }
    }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.start < other.end_exclusive() && other.start < self.end_exclusive()
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end_exclusive()
    }

    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date.
pub fn parse_stay_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc).date_naive()))
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

/// `serde_as` adapter for stay dates posted by browsers.
pub struct FlexibleDate;

impl<'de> DeserializeAs<'de, NaiveDate> for FlexibleDate {
    fn deserialize_as<D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_stay_date(&raw).map_err(de::Error::custom)
    }
}

impl SerializeAs<NaiveDate> for FlexibleDate {
    fn serialize_as<S>(source: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        source.format("%Y-%m-%d").to_string().serialize(serializer)
    }
}

//! Lifecycle status enums for bookings and rentings (stored as TEXT)

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// A status string read from the database that no enum variant matches
#[derive(Debug, Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking states: scheduled -> active -> completed, or cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a booking in this state keeps its room unavailable for its dates
    pub fn holds_room(&self) -> bool {
        matches!(self, BookingStatus::Scheduled | BookingStatus::Active)
    }

    /// Check-in moves scheduled bookings to active; active is accepted again.
    pub fn can_check_in(&self) -> bool {
        matches!(self, BookingStatus::Scheduled | BookingStatus::Active)
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(BookingStatus::Scheduled),
            "active" => Ok(BookingStatus::Active),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for BookingStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RentingStatus
// ---------------------------------------------------------------------------

/// Renting states: open -> completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RentingStatus {
    #[default]
    Open,
    Completed,
}

impl RentingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentingStatus::Open => "open",
            RentingStatus::Completed => "completed",
        }
    }

    pub fn holds_room(&self) -> bool {
        matches!(self, RentingStatus::Open)
    }
}

impl FromStr for RentingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(RentingStatus::Open),
            "completed" => Ok(RentingStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for RentingStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for RentingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

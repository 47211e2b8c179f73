//! Booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::status::BookingStatus;
use super::stay::{FlexibleDate, StayRange};
use crate::error::AppResult;

/// Booking model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub booking_id: i32,
    pub customer_id: i32,
    pub hotel_id: i32,
    pub room_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn stay(&self) -> StayRange {
        StayRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Booking with customer and hotel names for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookingDetails {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub booking: Booking,
    pub full_name: String,
    pub chain_name: String,
    pub street_number: Option<i32>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub province_state: Option<String>,
}

/// Create booking request
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    /// Defaults to `scheduled`
    #[serde(default)]
    pub status: BookingStatus,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde_as(as = "FlexibleDate")]
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub start_date: NaiveDate,
    #[serde_as(as = "FlexibleDate")]
    #[schema(value_type = String, format = Date, example = "2024-01-05")]
    pub end_date: NaiveDate,
    #[validate(range(min = 1))]
    pub room_number: i32,
    #[validate(range(min = 1))]
    pub hotel_id: i32,
}

impl CreateBooking {
    /// Validated stay of the request
    pub fn stay(&self) -> AppResult<StayRange> {
        StayRange::new(self.start_date, self.end_date)
    }
}

/// Check-in response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub message: String,
    pub booking: Booking,
}

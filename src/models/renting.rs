//! Renting model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::booking::Booking;
use super::status::RentingStatus;
use super::stay::{FlexibleDate, StayRange};
use crate::error::AppResult;

/// Renting model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Renting {
    pub renting_id: i32,
    /// Source booking; `None` for walk-in customers
    pub booking_id: Option<i32>,
    pub employee_id: i32,
    pub customer_id: i32,
    pub hotel_id: i32,
    pub room_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: RentingStatus,
    pub has_booked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Renting {
    pub fn stay(&self) -> StayRange {
        StayRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Create renting request.
///
/// Ids are accepted as numbers or numeric strings, since the front desk form
/// posts its text inputs unchanged.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRenting {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub booking_id: Option<i32>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1))]
    pub employee_id: i32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1))]
    pub customer_id: i32,
    /// Defaults to `open`
    #[serde(default)]
    pub status: RentingStatus,
    #[serde_as(as = "FlexibleDate")]
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub start_date: NaiveDate,
    #[serde_as(as = "FlexibleDate")]
    #[schema(value_type = String, format = Date, example = "2024-01-05")]
    pub end_date: NaiveDate,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1))]
    pub room_number: i32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1))]
    pub hotel_id: i32,
}

impl CreateRenting {
    pub fn stay(&self) -> AppResult<StayRange> {
        StayRange::new(self.start_date, self.end_date)
    }
}

/// Check-out response: the completed renting and its completed source booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckOutResponse {
    pub message: String,
    pub renting: Renting,
    pub booking: Option<Booking>,
}

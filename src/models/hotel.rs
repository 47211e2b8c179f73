//! Hotel model and hotel-level projections

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Hotel row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hotel {
    pub hotel_id: i32,
    /// Chain the hotel belongs to
    pub chain_name: String,
    pub street_number: Option<i32>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub province_state: Option<String>,
    pub postal_code: Option<String>,
    /// Star rating, 1 to 5
    pub category: i32,
}

/// Hotel with the number of its rooms free today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HotelInfo {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub hotel: Hotel,
    pub available_rooms: i64,
}

/// Average category of the hotels of one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChainAverage {
    pub chain_name: String,
    pub avg_category: f64,
}

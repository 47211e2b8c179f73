//! Room model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Room row, keyed by (hotel_id, room_number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub hotel_id: i32,
    pub room_number: i32,
    /// Nightly price as a decimal string
    #[schema(value_type = String, example = "129.99")]
    pub price: Decimal,
    pub capacity: i32,
    pub mountain_view: bool,
    pub sea_view: bool,
    pub is_expandable: bool,
    pub amenities: Option<String>,
    pub damages: Option<String>,
}

//! Customer model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub customer_id: i32,
    pub full_name: String,
    pub customer_email: Option<String>,
    pub street_number: Option<i32>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub province_state: Option<String>,
    pub postal_code: Option<String>,
}

//! Customer endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Customer, AppState};

/// List customers
#[utoipa::path(
    get,
    path = "/customer_info",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.catalog.customers().await?;
    Ok(Json(customers))
}

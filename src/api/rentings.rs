//! Renting endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::JsonBody;
use crate::{
    error::AppResult,
    models::{renting::CheckOutResponse, CreateRenting, Renting},
    AppState,
};

/// List rentings
#[utoipa::path(
    get,
    path = "/rentings_info",
    tag = "rentings",
    responses(
        (status = 200, description = "All rentings", body = Vec<Renting>)
    )
)]
pub async fn list_rentings(State(state): State<AppState>) -> AppResult<Json<Vec<Renting>>> {
    let rentings = state.services.catalog.rentings().await?;
    Ok(Json(rentings))
}

/// Record a renting, walk-in or from a booking
#[utoipa::path(
    post,
    path = "/rentings",
    tag = "rentings",
    request_body = CreateRenting,
    responses(
        (status = 200, description = "Renting created", body = Renting),
        (status = 400, description = "Malformed body, invalid ids or dates"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room already taken for these dates"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_renting(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateRenting>,
) -> AppResult<Json<Renting>> {
    let renting = state.services.lifecycle.create_renting(request).await?;
    Ok(Json(renting))
}

/// Check a renting out, completing its source booking too
#[utoipa::path(
    put,
    path = "/rentings/{id}",
    tag = "rentings",
    params(
        ("id" = i32, Path, description = "Renting ID")
    ),
    responses(
        (status = 200, description = "Renting and its booking completed", body = CheckOutResponse),
        (status = 404, description = "Renting not found"),
        (status = 500, description = "Nothing was changed")
    )
)]
pub async fn check_out_renting(
    State(state): State<AppState>,
    Path(renting_id): Path<i32>,
) -> AppResult<Json<CheckOutResponse>> {
    let (renting, booking) = state.services.lifecycle.check_out(renting_id).await?;
    Ok(Json(CheckOutResponse {
        message: "Renting was checked out!".to_string(),
        renting,
        booking,
    }))
}

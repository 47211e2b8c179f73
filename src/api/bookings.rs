//! Booking endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::JsonBody;
use crate::{
    error::AppResult,
    models::{booking::CheckInResponse, Booking, BookingDetails, CreateBooking},
    AppState,
};

/// List bookings with customer and hotel names
#[utoipa::path(
    get,
    path = "/bookings_info",
    tag = "bookings",
    responses(
        (status = 200, description = "Bookings joined with customer and hotel", body = Vec<BookingDetails>)
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<BookingDetails>>> {
    let bookings = state.services.catalog.bookings().await?;
    Ok(Json(bookings))
}

/// Create a booking
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 200, description = "Booking created", body = Booking),
        (status = 400, description = "Malformed body, invalid ids or dates"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room already taken for these dates"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateBooking>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.lifecycle.create_booking(request).await?;
    Ok(Json(booking))
}

/// Check a booking in
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking is active", body = CheckInResponse),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is completed or cancelled")
    )
)]
pub async fn check_in_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> AppResult<Json<CheckInResponse>> {
    let booking = state.services.lifecycle.check_in(booking_id).await?;
    Ok(Json(CheckInResponse {
        message: "Booking was checked in!".to_string(),
        booking,
    }))
}
